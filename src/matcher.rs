use crate::types::{ActivePolicy, BracketKind, BracketPosition, MatchedPair, Role};

fn bracket_at(text: &[char], offset: usize) -> Option<BracketPosition> {
    let ch = *text.get(offset)?;
    let (kind, role) = BracketKind::classify(ch)?;
    Some(BracketPosition { offset, kind, role })
}

/// Returns the bracket eligible for highlighting at `cursor`, if any.
pub fn find_active(text: &[char], cursor: usize, policy: ActivePolicy) -> Option<BracketPosition> {
    match policy {
        ActivePolicy::UnderCursor => bracket_at(text, cursor),
        ActivePolicy::LeftThenUnder => {
            let left = if cursor > 0 {
                bracket_at(text, cursor - 1)
            } else {
                None
            };
            left.or_else(|| bracket_at(text, cursor))
        }
    }
}

/// Finds the structural partner of `position`.
///
/// Only brackets of `position.kind` are looked at; every other character,
/// brackets of other kinds included, is invisible to the scan. So in
/// `([){]}` the `(` still pairs with the `)` at offset 2.
pub fn find_partner(text: &[char], position: BracketPosition) -> Option<MatchedPair> {
    let kind = position.kind;
    if bracket_at(text, position.offset) != Some(position) {
        return None;
    }

    let same_kind = |(_, ch): &(usize, &char)| {
        matches!(BracketKind::classify(**ch), Some((k, _)) if k == kind)
    };

    let mut depth = 0usize;
    match position.role {
        Role::Open => {
            let view = text.iter().enumerate().skip(position.offset).filter(same_kind);
            for (offset, &ch) in view {
                if ch == kind.open_char() {
                    depth += 1;
                } else {
                    depth -= 1;
                    if depth == 0 {
                        return Some(MatchedPair::new(position.offset, offset, kind));
                    }
                }
            }
        }
        Role::Close => {
            let end = (position.offset + 1).min(text.len());
            let view = text[..end].iter().enumerate().rev().filter(same_kind);
            for (offset, &ch) in view {
                if ch == kind.close_char() {
                    depth += 1;
                } else {
                    depth -= 1;
                    if depth == 0 {
                        return Some(MatchedPair::new(offset, position.offset, kind));
                    }
                }
            }
        }
    }

    None
}

/// `find_active` followed by `find_partner`, keeping the active offset.
pub fn match_at(text: &[char], cursor: usize, policy: ActivePolicy)
        -> Option<(BracketPosition, MatchedPair)> {
    let active = find_active(text, cursor, policy)?;
    let pair = find_partner(text, active)?;
    Some((active, pair))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BracketKind::{Curly, Paren, Square};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_find_active() {
        let text = chars("a(b)");
        let under = ActivePolicy::UnderCursor;
        let left = ActivePolicy::LeftThenUnder;

        assert_eq!(find_active(&text, 0, under), None);
        assert_eq!(
            find_active(&text, 1, under),
            Some(BracketPosition { offset: 1, kind: Paren, role: Role::Open })
        );
        assert_eq!(find_active(&text, 4, under), None);

        assert_eq!(find_active(&text, 2, left).map(|p| p.offset), Some(1));
        assert_eq!(find_active(&text, 3, left).map(|p| p.offset), Some(3));
        assert_eq!(find_active(&text, 4, left).map(|p| p.offset), Some(3));
        assert_eq!(find_active(&text, 0, left), None);
        assert_eq!(find_active(&[], 0, left), None);
    }

    #[test]
    fn test_find_partner_nested() {
        let text = chars("/abc:add({a=[], b=[], c={[],()}})");
        let pair = |offset| {
            let p = find_active(&text, offset, ActivePolicy::UnderCursor).unwrap();
            find_partner(&text, p).unwrap()
        };

        assert_eq!(pair(8), MatchedPair::new(8, 32, Paren));
        assert_eq!(pair(32), MatchedPair::new(8, 32, Paren));
        assert_eq!(pair(9), MatchedPair::new(9, 31, Curly));
        assert_eq!(pair(24), MatchedPair::new(24, 30, Curly));
        assert_eq!(pair(28), MatchedPair::new(28, 29, Paren));
        assert_eq!(pair(12), MatchedPair::new(12, 13, Square));
    }

    #[test]
    fn test_find_partner_per_kind() {
        let text = chars("([){]}");
        let expected = [
            MatchedPair::new(0, 2, Paren),
            MatchedPair::new(1, 4, Square),
            MatchedPair::new(0, 2, Paren),
            MatchedPair::new(3, 5, Curly),
            MatchedPair::new(1, 4, Square),
            MatchedPair::new(3, 5, Curly),
        ];
        for (offset, want) in expected.iter().enumerate() {
            let p = find_active(&text, offset, ActivePolicy::UnderCursor).unwrap();
            let got = find_partner(&text, p).unwrap();
            assert_eq!(&got, want, "offset {}", offset);
            assert_eq!(got.kind, p.kind);
            assert!(got.open == p.offset || got.close == p.offset);
        }
    }

    #[test]
    fn test_find_partner_unbalanced() {
        let text = chars("/abc:add({a=[, b=[], c=[],)}})");
        let p = find_active(&text, 12, ActivePolicy::UnderCursor).unwrap();
        assert_eq!(find_partner(&text, p), None);

        let text = chars("((x)");
        let p = find_active(&text, 0, ActivePolicy::UnderCursor).unwrap();
        assert_eq!(find_partner(&text, p), None);
        let p = find_active(&text, 1, ActivePolicy::UnderCursor).unwrap();
        assert_eq!(find_partner(&text, p), Some(MatchedPair::new(1, 3, Paren)));

        let text = chars("x]");
        let p = find_active(&text, 1, ActivePolicy::UnderCursor).unwrap();
        assert_eq!(find_partner(&text, p), None);
    }

    #[test]
    fn test_match_at() {
        let text = chars("f(x)");
        assert_eq!(
            match_at(&text, 3, ActivePolicy::UnderCursor).map(|(a, p)| (a.offset, p)),
            Some((3, MatchedPair::new(1, 3, Paren)))
        );
        assert_eq!(match_at(&text, 2, ActivePolicy::UnderCursor), None);
    }
}
