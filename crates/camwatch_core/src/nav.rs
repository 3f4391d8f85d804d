//! Wrap-around cursor over the image set.

/// The one piece of mutable state in the viewer: an index in `[0, len)`,
/// moved only by `previous`/`next`. Modulo arithmetic keeps the index in
/// range in both directions, so no bounds error is possible once `len > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    index: usize,
    len: usize,
}

impl Navigation {
    /// Cursor over `len` entries, starting at the first.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; `scan_image_folder` guarantees a non-empty
    /// set before a cursor is ever built.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "navigation over an empty image set");
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Step back one entry, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Step forward one entry, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn previous_from_first_wraps_to_last() {
        // Two-image set: Previous from index 0 lands on 1, Next returns to 0.
        let mut nav = Navigation::new(2);
        nav.previous();
        assert_eq!(nav.index(), 1);
        nav.next();
        assert_eq!(nav.index(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    fn index_stays_in_range_under_any_action_sequence(#[case] len: usize) {
        let mut nav = Navigation::new(len);
        // Deterministic mixed walk, long enough to wrap several times.
        for step in 0..4 * len + 5 {
            if step % 3 == 0 {
                nav.previous();
            } else {
                nav.next();
            }
            assert!(nav.index() < len);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(20)]
    fn next_and_previous_are_mutual_inverses(#[case] len: usize) {
        let mut nav = Navigation::new(len);
        for _ in 0..len {
            let before = nav;
            nav.next();
            nav.previous();
            assert_eq!(nav, before);
            nav.previous();
            nav.next();
            assert_eq!(nav, before);
            nav.next();
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut nav = Navigation::new(5);
        for _ in 0..5 {
            nav.next();
        }
        assert_eq!(nav.index(), 0);
        for _ in 0..5 {
            nav.previous();
        }
        assert_eq!(nav.index(), 0);
    }

    #[test]
    #[should_panic(expected = "empty image set")]
    fn empty_set_is_rejected() {
        let _ = Navigation::new(0);
    }
}
