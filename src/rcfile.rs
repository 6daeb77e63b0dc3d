use std::fs::File;
use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::ansi;
use crate::config::{self, Config};
use crate::tools;

lazy_static! {
    static ref RE_SET: Regex = Regex::new(r"^\s*set\s+([a-z-]+)\s+(\S+)\s*$").unwrap();
}

/// Loads the rc file in the user's home, if there is one.
pub fn load_rcfile(config: &mut Config) {
    let rc_file = tools::get_rc_file();
    if !Path::new(rc_file.as_str()).exists() {
        return;
    }
    load_rcfile_from(&rc_file, config);
}

pub fn load_rcfile_from(rc_file: &str, config: &mut Config) {
    let mut file = match File::open(rc_file) {
        Ok(x) => x,
        Err(e) => {
            println_stderr!("bracketlight: open rcfile err: {:?}", e);
            return;
        }
    };
    let mut text = String::new();
    if let Err(e) = file.read_to_string(&mut text) {
        println_stderr!("bracketlight: read_to_string error: {:?}", e);
        return;
    }
    load_text(&text, config);
}

pub fn load_text(text: &str, config: &mut Config) {
    for (i, line) in text.lines().enumerate() {
        if let Err(e) = handle_line(config, line) {
            log!("rcfile line {}: {}", i + 1, e);
        }
    }
}

fn handle_line(config: &mut Config, line: &str) -> Result<(), String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    let caps = match RE_SET.captures(trimmed) {
        Some(x) => x,
        None => return Err(format!("not a set directive: {:?}", trimmed)),
    };
    let value = &caps[2];
    match &caps[1] {
        "highlight" => config.enabled = to_bool(value)?,
        "active-bracket" => config.active = config::parse_active(value)?,
        "paint" => config.paint = config::parse_paint(value)?,
        "move-style" => config.moves = config::parse_move_style(value)?,
        "highlight-bold" => config.style.bold = to_bool(value)?,
        "highlight-background" => {
            config.style.background = match ansi::background_code(value) {
                Some(code) => code,
                None => return Err(format!("unknown color: {}", value)),
            };
        }
        name => return Err(format!("unknown variable: {}", name)),
    }
    Ok(())
}

fn to_bool(value: &str) -> Result<bool, String> {
    config::parse_bool(value).ok_or_else(|| format!("invalid boolean: {}", value))
}

#[cfg(test)]
mod tests {
    use super::{handle_line, load_text};
    use crate::config::Config;
    use crate::types::{MoveStyle, Paint};

    #[test]
    fn test_load_text() {
        let mut config = Config::default();
        load_text(
            "# bracket highlighting\n\
             set highlight off\n\
             \n\
             set paint partner\n\
             set move-style line-start\n\
             set highlight-background blue\n\
             set highlight-bold 0\n\
             set bogus 1\n\
             alias ll='ls -lh'\n",
            &mut config,
        );
        assert!(!config.enabled);
        assert_eq!(config.paint, Paint::Partner);
        assert_eq!(config.moves, MoveStyle::LineStart);
        assert_eq!(config.style.background, 44);
        assert!(!config.style.bold);
    }

    #[test]
    fn test_handle_line_errors() {
        let mut config = Config::default();
        assert!(handle_line(&mut config, "set highlight maybe").is_err());
        assert!(handle_line(&mut config, "set paint").is_err());
        assert!(handle_line(&mut config, "set highlight-background purple").is_err());
        assert!(handle_line(&mut config, "   # comment").is_ok());
        assert_eq!(config, Config::default());
    }
}
