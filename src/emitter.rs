use crate::position::{self, RowCol};
use crate::types::{MoveStyle, Paint, Screen, TerminalOp, Transition};

/// Turns highlight transitions into terminal operations.
#[derive(Clone, Copy, Debug)]
pub struct Emitter {
    paint: Paint,
    moves: MoveStyle,
}

impl Emitter {
    pub fn new(paint: Paint, moves: MoveStyle) -> Emitter {
        Emitter { paint, moves }
    }

    /// Ops for one cursor movement from `before` to `after` (text offsets).
    ///
    /// The cursor echo comes first. Every highlight edit after it is
    /// wrapped in a save/restore pair anchored at `after`, so the physical
    /// cursor ends where the user's cursor is.
    pub fn emit(&self, transition: &Transition, before: usize, after: usize,
            text: &[char], screen: &Screen) -> Vec<TerminalOp> {
        let line_len = screen.absolute(text.len());
        let here = |offset: usize| {
            position::row_col(screen.absolute(offset), line_len, screen.width)
        };

        let mut ops = Vec::new();
        let anchor = here(after);
        push_moves(&mut ops, position::delta_between(here(before), anchor));

        if let Some(undo) = transition.undo {
            for offset in undo.cells(self.paint) {
                // the line may have shrunk since this was painted
                if let Some(&ch) = text.get(offset) {
                    self.relocate(&mut ops, anchor, here(offset), TerminalOp::ClearHighlightAttr(ch));
                }
            }
        }
        if let Some(apply) = transition.apply {
            for offset in apply.cells(self.paint) {
                if let Some(&ch) = text.get(offset) {
                    self.relocate(&mut ops, anchor, here(offset), TerminalOp::SetHighlightAttr(ch));
                }
            }
        }

        ops
    }

    /// Move to `target`, rewrite one character, come back to `anchor`.
    ///
    /// Writing the character advances the cursor by one, hence the step
    /// back before restoring.
    fn relocate(&self, ops: &mut Vec<TerminalOp>, anchor: RowCol, target: RowCol,
            edit: TerminalOp) {
        ops.push(TerminalOp::SaveCursor);
        match self.moves {
            MoveStyle::Relative => {
                push_moves(ops, position::delta_between(anchor, target));
            }
            MoveStyle::LineStart => {
                let (rows, _) = position::delta_between(anchor, target);
                push_moves(ops, (rows, 0));
                push_move(ops, TerminalOp::MoveLeft(anchor.col));
                push_move(ops, TerminalOp::MoveRight(target.col));
            }
        }
        ops.push(edit);
        ops.push(TerminalOp::MoveLeft(1));
        ops.push(TerminalOp::RestoreCursor);
    }
}

/// Row moves first, then column moves. Zero moves are dropped.
pub fn push_moves(ops: &mut Vec<TerminalOp>, (rows, cols): (isize, isize)) {
    if rows > 0 {
        push_move(ops, TerminalOp::MoveDown(rows as usize));
    } else if rows < 0 {
        push_move(ops, TerminalOp::MoveUp((-rows) as usize));
    }

    if cols > 0 {
        push_move(ops, TerminalOp::MoveRight(cols as usize));
    } else if cols < 0 {
        push_move(ops, TerminalOp::MoveLeft((-cols) as usize));
    }
}

fn push_move(ops: &mut Vec<TerminalOp>, op: TerminalOp) {
    match op {
        TerminalOp::MoveLeft(0) | TerminalOp::MoveRight(0) |
        TerminalOp::MoveUp(0) | TerminalOp::MoveDown(0) => {}
        op => ops.push(op),
    }
}

/// Replays `ops` on a model cursor and returns where it ends up.
///
/// Attribute ops advance the cursor by one column, like writing a
/// character does. Used to check that an op list leaves the cursor where
/// it found it.
pub fn replay(ops: &[TerminalOp], start: RowCol) -> RowCol {
    let mut pos = (start.row as isize, start.col as isize);
    let mut saved = Vec::new();
    for op in ops {
        match *op {
            TerminalOp::MoveLeft(n) => pos.1 -= n as isize,
            TerminalOp::MoveRight(n) => pos.1 += n as isize,
            TerminalOp::MoveUp(n) => pos.0 -= n as isize,
            TerminalOp::MoveDown(n) => pos.0 += n as isize,
            TerminalOp::SaveCursor => saved.push(pos),
            TerminalOp::RestoreCursor => {
                if let Some(p) = saved.pop() {
                    pos = p;
                }
            }
            TerminalOp::SetHighlightAttr(_) | TerminalOp::ClearHighlightAttr(_) => pos.1 += 1,
        }
    }
    RowCol {
        row: pos.0.max(0) as usize,
        col: pos.1.max(0) as usize,
    }
}
