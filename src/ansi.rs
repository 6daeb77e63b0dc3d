//! Encoding of terminal ops into ANSI escape sequences.

use crate::types::TerminalOp;

pub const ESC: char = '\x1b';

/// Background colors a highlight can use, with their SGR codes.
pub const BACKGROUNDS: [(&str, u8); 8] = [
    ("black", 40),
    ("red", 41),
    ("green", 42),
    ("yellow", 43),
    ("blue", 44),
    ("magenta", 45),
    ("cyan", 46),
    ("white", 47),
];

pub fn background_code(name: &str) -> Option<u8> {
    BACKGROUNDS.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightStyle {
    pub bold: bool,
    /// SGR background code, 40 to 47.
    pub background: u8,
}

impl Default for HighlightStyle {
    fn default() -> HighlightStyle {
        HighlightStyle {
            bold: true,
            background: 42,
        }
    }
}

impl HighlightStyle {
    /// Attribute sequence written before a highlighted character.
    pub fn on(&self) -> String {
        let mut s = String::new();
        if self.bold {
            s.push_str(&format!("{}[1m", ESC));
        }
        s.push_str(&format!("{}[;39;{}m", ESC, self.background));
        s
    }

    /// Attribute sequence written before a character losing its highlight.
    pub fn off(&self) -> String {
        format!("{}[0;22m{}[;39;49m", ESC, ESC)
    }
}

pub fn encode_op(op: &TerminalOp, style: &HighlightStyle, out: &mut String) {
    match *op {
        TerminalOp::MoveLeft(n) => out.push_str(&format!("{}[{}D", ESC, n)),
        TerminalOp::MoveRight(n) => out.push_str(&format!("{}[{}C", ESC, n)),
        TerminalOp::MoveUp(n) => out.push_str(&format!("{}[{}A", ESC, n)),
        TerminalOp::MoveDown(n) => out.push_str(&format!("{}[{}B", ESC, n)),
        TerminalOp::SaveCursor => {
            out.push(ESC);
            out.push('7');
        }
        TerminalOp::RestoreCursor => {
            out.push(ESC);
            out.push('8');
        }
        TerminalOp::SetHighlightAttr(c) => {
            out.push_str(&style.on());
            out.push(c);
        }
        TerminalOp::ClearHighlightAttr(c) => {
            out.push_str(&style.off());
            out.push(c);
        }
    }
}

pub fn encode(ops: &[TerminalOp], style: &HighlightStyle) -> String {
    let mut out = String::new();
    for op in ops {
        encode_op(op, style, &mut out);
    }
    out
}

/// Makes escape characters printable, as `^[`.
pub fn escape_visible(s: &str) -> String {
    s.replace(ESC, "^[")
}

/// Space separated op names, e.g. `left(1) save up(1) highlight('[')`.
pub fn describe(ops: &[TerminalOp]) -> String {
    ops.iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
