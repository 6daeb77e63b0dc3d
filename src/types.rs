use std::fmt;

/// One of the complementary bracket pairs the highlighter knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Paren,
    Square,
    Curly,
}

pub const BRACKET_KINDS: [BracketKind; 3] = [
    BracketKind::Paren,
    BracketKind::Square,
    BracketKind::Curly,
];

impl BracketKind {
    pub fn open_char(self) -> char {
        match self {
            BracketKind::Paren => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            BracketKind::Paren => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }

    /// Classifies `ch`, returning `None` for anything that is not a bracket.
    pub fn classify(ch: char) -> Option<(BracketKind, Role)> {
        for kind in BRACKET_KINDS {
            if ch == kind.open_char() {
                return Some((kind, Role::Open));
            }
            if ch == kind.close_char() {
                return Some((kind, Role::Close));
            }
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Open,
    Close,
}

/// A bracket found in the text, valid only for the text it was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketPosition {
    pub offset: usize,
    pub kind: BracketKind,
    pub role: Role,
}

/// Two brackets of the same kind balancing each other. `open < close`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchedPair {
    pub open: usize,
    pub close: usize,
    pub kind: BracketKind,
}

impl MatchedPair {
    pub fn new(open: usize, close: usize, kind: BracketKind) -> MatchedPair {
        assert!(open < close, "pair must open before it closes: {} >= {}", open, close);
        MatchedPair { open, close, kind }
    }

    /// The end of the pair that is not `offset`.
    pub fn other_end(&self, offset: usize) -> usize {
        if offset == self.open {
            self.close
        } else {
            self.open
        }
    }
}

/// A matched pair together with the offset of the bracket the cursor
/// was on when the pair was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub pair: MatchedPair,
    pub anchor: usize,
}

impl Highlight {
    /// Offsets painted for this highlight, in the order they are written.
    pub fn cells(&self, paint: Paint) -> Vec<usize> {
        match paint {
            Paint::BothEnds => vec![self.pair.open, self.pair.close],
            Paint::Partner => vec![self.pair.other_end(self.anchor)],
        }
    }

    pub fn renders_same(&self, other: &Highlight, paint: Paint) -> bool {
        match paint {
            Paint::BothEnds => self.pair == other.pair,
            Paint::Partner => self == other,
        }
    }
}

/// Highlight changes for one cursor movement. `undo` is always emitted
/// before `apply`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub undo: Option<Highlight>,
    pub apply: Option<Highlight>,
}

impl Transition {
    pub fn empty() -> Transition {
        Transition::default()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_none() && self.apply.is_none()
    }

    pub fn pairs(&self) -> (Option<MatchedPair>, Option<MatchedPair>) {
        (self.undo.map(|h| h.pair), self.apply.map(|h| h.pair))
    }
}

/// Which bracket is considered active for a cursor offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePolicy {
    /// The character at the cursor.
    #[default]
    UnderCursor,
    /// The character left of the cursor, falling back to the one at it.
    LeftThenUnder,
}

/// Which ends of a matched pair get the highlight attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Paint {
    #[default]
    BothEnds,
    /// Only the end the cursor is not on.
    Partner,
}

/// How the emitter reaches a cell inside a save/restore block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveStyle {
    /// Net row delta, then net column delta.
    #[default]
    Relative,
    /// Row delta, then left to column 0, then right to the target column.
    LineStart,
}

/// Abstract terminal control output. Encoding is done in `ansi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalOp {
    MoveLeft(usize),
    MoveRight(usize),
    MoveUp(usize),
    MoveDown(usize),
    SaveCursor,
    RestoreCursor,
    /// Rewrite `char` in place with the highlight attribute on.
    SetHighlightAttr(char),
    /// Rewrite `char` in place with the highlight attribute off.
    ClearHighlightAttr(char),
}

impl TerminalOp {
    pub fn is_attr(&self) -> bool {
        matches!(self, TerminalOp::SetHighlightAttr(_) | TerminalOp::ClearHighlightAttr(_))
    }
}

impl fmt::Display for TerminalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalOp::MoveLeft(n) => write!(f, "left({})", n),
            TerminalOp::MoveRight(n) => write!(f, "right({})", n),
            TerminalOp::MoveUp(n) => write!(f, "up({})", n),
            TerminalOp::MoveDown(n) => write!(f, "down({})", n),
            TerminalOp::SaveCursor => write!(f, "save"),
            TerminalOp::RestoreCursor => write!(f, "restore"),
            TerminalOp::SetHighlightAttr(c) => write!(f, "highlight({:?})", c),
            TerminalOp::ClearHighlightAttr(c) => write!(f, "unhighlight({:?})", c),
        }
    }
}

/// Geometry of the displayed line: prompt width and terminal columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub prompt_len: usize,
    pub width: usize,
}

impl Screen {
    pub fn new(prompt_len: usize, width: usize) -> Screen {
        assert!(width > 0, "terminal width must be at least 1");
        Screen { prompt_len, width }
    }

    /// Offset in the displayed line of text offset `offset`.
    pub fn absolute(&self, offset: usize) -> usize {
        self.prompt_len + offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(BracketKind::classify('('), Some((BracketKind::Paren, Role::Open)));
        assert_eq!(BracketKind::classify(']'), Some((BracketKind::Square, Role::Close)));
        assert_eq!(BracketKind::classify('{'), Some((BracketKind::Curly, Role::Open)));
        assert_eq!(BracketKind::classify('<'), None);
        assert_eq!(BracketKind::classify('a'), None);
    }

    #[test]
    fn test_highlight_cells() {
        let pair = MatchedPair::new(2, 7, BracketKind::Square);
        let h = Highlight { pair, anchor: 7 };
        assert_eq!(h.cells(Paint::BothEnds), vec![2, 7]);
        assert_eq!(h.cells(Paint::Partner), vec![2]);

        let other = Highlight { pair, anchor: 2 };
        assert!(h.renders_same(&other, Paint::BothEnds));
        assert!(!h.renders_same(&other, Paint::Partner));
    }

    #[test]
    #[should_panic]
    fn test_pair_order() {
        MatchedPair::new(3, 3, BracketKind::Paren);
    }

    #[test]
    fn test_op_display() {
        assert_eq!(TerminalOp::MoveUp(2).to_string(), "up(2)");
        assert_eq!(TerminalOp::SetHighlightAttr('(').to_string(), "highlight('(')");
        assert_eq!(TerminalOp::RestoreCursor.to_string(), "restore");
    }
}
