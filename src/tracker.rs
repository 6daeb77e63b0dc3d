use crate::matcher;
use crate::types::{ActivePolicy, Highlight, Paint, Transition};

/// Holds what is currently highlighted on the terminal for one editing
/// session, and works out what has to change when the cursor moves.
#[derive(Debug)]
pub struct Tracker {
    current: Option<Highlight>,
    enabled: bool,
    policy: ActivePolicy,
    paint: Paint,
}

impl Tracker {
    pub fn new(enabled: bool, policy: ActivePolicy, paint: Paint) -> Tracker {
        Tracker {
            current: None,
            enabled,
            policy,
            paint,
        }
    }

    pub fn current(&self) -> Option<Highlight> {
        self.current
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning highlighting off keeps the current highlight until the next
    /// cursor move, which undoes it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// # Panics
    ///
    /// If `cursor` is past the end of `text`.
    pub fn on_cursor_move(&mut self, text: &[char], cursor: usize) -> Transition {
        assert!(
            cursor <= text.len(),
            "cursor {} out of range for line of {} chars",
            cursor,
            text.len()
        );

        if !self.enabled {
            return Transition {
                undo: self.current.take(),
                apply: None,
            };
        }

        let next = matcher::match_at(text, cursor, self.policy)
            .map(|(active, pair)| Highlight { pair, anchor: active.offset });

        let unchanged = match (&self.current, &next) {
            (None, None) => true,
            (Some(a), Some(b)) => a.renders_same(b, self.paint),
            _ => false,
        };
        if unchanged {
            // anchors may differ under BothEnds; keep the latest one
            self.current = next;
            return Transition::empty();
        }

        let undo = self.current.take();
        self.current = next;
        Transition { undo, apply: next }
    }

    /// Ends the session: whatever is highlighted gets undone.
    pub fn clear(&mut self) -> Transition {
        Transition {
            undo: self.current.take(),
            apply: None,
        }
    }
}
