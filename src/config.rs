use crate::ansi::HighlightStyle;
use crate::types::{ActivePolicy, MoveStyle, Paint};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub enabled: bool,
    pub active: ActivePolicy,
    pub paint: Paint,
    pub moves: MoveStyle,
    pub style: HighlightStyle,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            enabled: true,
            active: ActivePolicy::default(),
            paint: Paint::default(),
            moves: MoveStyle::default(),
            style: HighlightStyle::default(),
        }
    }
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "0" => Some(false),
        "1" => Some(true),
        s if s.eq_ignore_ascii_case("off") => Some(false),
        s if s.eq_ignore_ascii_case("on") => Some(true),
        _ => None,
    }
}

pub fn parse_active(s: &str) -> Result<ActivePolicy, String> {
    match s {
        "under-cursor" => Ok(ActivePolicy::UnderCursor),
        "left-then-under" => Ok(ActivePolicy::LeftThenUnder),
        _ => Err(format!("invalid active bracket policy: {}", s)),
    }
}

pub fn parse_paint(s: &str) -> Result<Paint, String> {
    match s {
        "both" => Ok(Paint::BothEnds),
        "partner" => Ok(Paint::Partner),
        _ => Err(format!("invalid paint mode: {}", s)),
    }
}

pub fn parse_move_style(s: &str) -> Result<MoveStyle, String> {
    match s {
        "relative" => Ok(MoveStyle::Relative),
        "line-start" => Ok(MoveStyle::LineStart),
        _ => Err(format!("invalid move style: {}", s)),
    }
}
