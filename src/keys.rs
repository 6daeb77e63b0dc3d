use regex::Regex;

/// Cursor-affecting keys understood by a `Session`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Home,
    End,
    Enter,
}

/// Upper bound for a repeat count like `left(n)`.
pub const MAX_REPEAT: usize = 10_000;

lazy_static! {
    static ref RE_KEY: Regex = Regex::new(r"^(left|right|home|end|enter)(?:\((\d+)\))?$").unwrap();
}

/// Parses a key script like `left(6) right(6) enter`.
///
/// Words are separated by whitespace or commas. A count in parentheses
/// repeats the key, each repetition being its own key press.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, String> {
    let mut keys = Vec::new();
    for word in script.split(|c: char| c.is_whitespace() || c == ',') {
        if word.is_empty() {
            continue;
        }
        let lower = word.to_lowercase();
        let caps = match RE_KEY.captures(&lower) {
            Some(x) => x,
            None => return Err(format!("unknown key: {}", word)),
        };
        let key = match &caps[1] {
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            _ => Key::Enter,
        };
        let count = match caps.get(2) {
            Some(n) => match n.as_str().parse::<usize>() {
                Ok(x) => x,
                Err(e) => return Err(format!("bad count in {}: {}", word, e)),
            },
            None => 1,
        };
        if count > MAX_REPEAT {
            return Err(format!("count too large in {}, max is {}", word, MAX_REPEAT));
        }
        for _ in 0..count {
            keys.push(key);
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::{parse_keys, Key, MAX_REPEAT};

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_keys(""), Ok(vec![]));
        assert_eq!(parse_keys("enter"), Ok(vec![Key::Enter]));
        assert_eq!(
            parse_keys("left(2), Right home END"),
            Ok(vec![Key::Left, Key::Left, Key::Right, Key::Home, Key::End])
        );
        assert_eq!(parse_keys("left(0)"), Ok(vec![]));
        assert!(parse_keys("up").is_err());
        assert!(parse_keys("left(x)").is_err());
    }

    #[test]
    fn test_parse_keys_count_limit() {
        let keys = parse_keys(&format!("right({})", MAX_REPEAT)).unwrap();
        assert_eq!(keys.len(), MAX_REPEAT);

        assert!(parse_keys(&format!("left({})", MAX_REPEAT + 1)).is_err());
        assert!(parse_keys("left(99999999999)").is_err());
        assert!(parse_keys("left(99999999999999999999999)").is_err());
    }
}
