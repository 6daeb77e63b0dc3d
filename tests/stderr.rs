#[macro_use]
extern crate bracketlight;

#[test]
fn test_println_stderr() {
    println_stderr!("bracketlight: plain message");
    println_stderr!("bracketlight: {} {}", "with", 2);
}
