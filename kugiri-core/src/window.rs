//! Sliding codepoint window for boundary scoring
//!
//! Both the eager and the streaming engines evaluate a candidate boundary
//! from the same bounded context, so neither needs random access to the
//! whole input and scoring stays O(1) per position.

/// Six-slot sliding window around a candidate boundary
///
/// Slot `k` holds the codepoint at relative position `k - 3` from the
/// candidate index `i`: `[i-3, i-2, i-1, i, i+1, i+2]`. Slots outside the
/// input are `None`; the scorer skips any lookup whose slots are not all
/// occupied.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScoreWindow {
    slots: [Option<char>; 6],
}

impl ScoreWindow {
    pub(crate) fn new() -> Self {
        Self { slots: [None; 6] }
    }

    /// Slide the window one position forward, taking `incoming` as the new
    /// furthest-lookahead codepoint (`None` once the input is exhausted).
    pub(crate) fn shift(&mut self, incoming: Option<char>) {
        self.slots.rotate_left(1);
        self.slots[5] = incoming;
    }

    /// The codepoint at the candidate index itself (`i`, the first
    /// codepoint after the boundary being scored).
    pub(crate) fn current(&self) -> Option<char> {
        self.slots[3]
    }

    pub(crate) fn slots(&self) -> &[Option<char>; 6] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_starts_empty() {
        let window = ScoreWindow::new();
        assert_eq!(window.slots(), &[None; 6]);
        assert_eq!(window.current(), None);
    }

    #[test]
    fn test_window_sliding() {
        let mut window = ScoreWindow::new();
        for ch in ['a', 'b', 'c', 'd'] {
            window.shift(Some(ch));
        }
        // Candidate i = 1 of "abcd...": [None, None, a, b, c, d]
        assert_eq!(
            window.slots(),
            &[None, None, Some('a'), Some('b'), Some('c'), Some('d')]
        );
        assert_eq!(window.current(), Some('b'));

        window.shift(None);
        assert_eq!(
            window.slots(),
            &[None, Some('a'), Some('b'), Some('c'), Some('d'), None]
        );
        assert_eq!(window.current(), Some('c'));
    }

    #[test]
    fn test_window_drains_at_end() {
        let mut window = ScoreWindow::new();
        window.shift(Some('a'));
        for _ in 0..5 {
            window.shift(None);
        }
        assert_eq!(window.slots(), &[None; 6]);
    }
}
