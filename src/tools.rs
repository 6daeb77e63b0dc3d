use std::env;

#[macro_export]
macro_rules! println_stderr {
    ($fmt:expr) => ({
        use std::io::Write as _;
        match writeln!(&mut ::std::io::stderr(), $fmt) {
            Ok(_) => {}
            Err(e) => println!("write to stderr failed: {:?}", e)
        }
    });
    ($fmt:expr, $($arg:tt)*) => ({
        use std::io::Write as _;
        match writeln!(&mut ::std::io::stderr(), $fmt, $($arg)*) {
            Ok(_) => {}
            Err(e) => println!("write to stderr failed: {:?}", e)
        }
    });
}

pub fn get_user_home() -> String {
    match env::var("HOME") {
        Ok(x) => x,
        Err(e) => {
            log!("bracketlight: env HOME error: {}", e);
            String::new()
        }
    }
}

pub fn get_rc_file() -> String {
    let home = get_user_home();
    format!("{}/{}", home, ".bracketlightrc")
}

/// Display width of a prompt, skipping `\x01 .. \x02` wrapped escapes and
/// bare CSI sequences.
pub fn prompt_width(prompt: &str) -> usize {
    let mut width = 0;
    let mut hidden = false;
    let mut chars = prompt.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\x01' => hidden = true,
            '\x02' => hidden = false,
            '\x1b' if !hidden => {
                if chars.peek() == Some(&'[') {
                    chars.next();
                    for c in chars.by_ref() {
                        if c.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
            }
            _ if hidden => {}
            _ => width += 1,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::prompt_width;

    #[test]
    fn test_prompt_width() {
        assert_eq!(prompt_width(""), 0);
        assert_eq!(prompt_width("$ "), 2);
        assert_eq!(prompt_width("[standalone@127.0.0.1:9990 /] "), 30);
        assert_eq!(prompt_width("\x01\x1b[32m\x02user\x01\x1b[0m\x02$ "), 6);
        assert_eq!(prompt_width("\x1b[1;31mroot\x1b[0m# "), 6);
    }
}
