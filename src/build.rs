use std::process::Command;
use time::OffsetDateTime;

fn main() {
    match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(x) => {
            let git_hash = String::from_utf8_lossy(&x.stdout);
            println!("cargo:rustc-env=GIT_HASH={}", git_hash.trim());
        }
        Err(_) => {
            println!("cargo:rustc-env=GIT_HASH=");
        }
    }

    let tm = match OffsetDateTime::now_local() {
        Ok(dt) => dt,
        Err(_) => OffsetDateTime::now_utc(),
    };
    println!("cargo:rustc-env=BUILD_DATE={:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        tm.year(), tm.month() as u8, tm.day(), tm.hour(), tm.minute(), tm.second());
}
