use crate::config::Config;
use crate::emitter::Emitter;
use crate::keys::Key;
use crate::tracker::Tracker;
use crate::types::{Highlight, Screen, TerminalOp};

/// One line being edited: the text, the cursor, and the highlight state
/// of what is on the terminal.
///
/// Stands in for the input loop of a shell: every key press moves the
/// cursor and returns the terminal output for it.
#[derive(Debug)]
pub struct Session {
    text: Vec<char>,
    cursor: usize,
    screen: Screen,
    tracker: Tracker,
    emitter: Emitter,
}

impl Session {
    /// A session for `text` as just typed, cursor at the end.
    pub fn new(text: &str, screen: Screen, config: &Config) -> Session {
        let text: Vec<char> = text.chars().collect();
        let cursor = text.len();
        Session {
            text,
            cursor,
            screen,
            tracker: Tracker::new(config.enabled, config.active, config.paint),
            emitter: Emitter::new(config.paint, config.moves),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn highlighted(&self) -> Option<Highlight> {
        self.tracker.current()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.tracker.set_enabled(enabled);
    }

    pub fn press(&mut self, key: Key) -> Vec<TerminalOp> {
        let before = self.cursor;
        let after = match key {
            Key::Left => before.saturating_sub(1),
            Key::Right => (before + 1).min(self.text.len()),
            Key::Home => 0,
            Key::End | Key::Enter => self.text.len(),
        };
        self.cursor = after;

        let transition = if key == Key::Enter {
            self.tracker.clear()
        } else {
            self.tracker.on_cursor_move(&self.text, after)
        };
        if !transition.is_empty() {
            log!("cursor {} -> {}: undo {:?} apply {:?}",
                before, after, transition.undo, transition.apply);
        }

        self.emitter.emit(&transition, before, after, &self.text, &self.screen)
    }

    /// Presses every key in turn, concatenating the output.
    pub fn press_all(&mut self, keys: &[Key]) -> Vec<TerminalOp> {
        let mut ops = Vec::new();
        for key in keys {
            ops.extend(self.press(*key));
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::config::Config;
    use crate::keys::Key;
    use crate::types::{BracketKind, MatchedPair, Screen, TerminalOp};

    #[test]
    fn test_press_moves_cursor() {
        let mut s = Session::new("ab", Screen::new(2, 80), &Config::default());
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.press(Key::Right), vec![]);
        assert_eq!(s.press(Key::Left), vec![TerminalOp::MoveLeft(1)]);
        assert_eq!(s.press(Key::Home), vec![TerminalOp::MoveLeft(1)]);
        assert_eq!(s.press(Key::Left), vec![]);
        assert_eq!(s.press(Key::End), vec![TerminalOp::MoveRight(2)]);
        assert_eq!(s.text(), "ab");
    }

    #[test]
    fn test_enter_clears() {
        let mut s = Session::new("(x)", Screen::new(2, 80), &Config::default());
        s.press(Key::Home);
        assert_eq!(
            s.highlighted().map(|h| h.pair),
            Some(MatchedPair::new(0, 2, BracketKind::Paren))
        );
        let ops = s.press(Key::Enter);
        assert_eq!(ops[0], TerminalOp::MoveRight(3));
        assert_eq!(ops.iter().filter(|op| op.is_attr()).count(), 2);
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_disable_midway() {
        let mut s = Session::new("()", Screen::new(2, 80), &Config::default());
        s.press(Key::Left);
        assert!(s.highlighted().is_some());
        s.set_enabled(false);
        let ops = s.press(Key::Left);
        assert!(ops.iter().all(|op| !matches!(op, TerminalOp::SetHighlightAttr(_))));
        assert_eq!(s.press(Key::Right), vec![TerminalOp::MoveRight(1)]);
    }
}
