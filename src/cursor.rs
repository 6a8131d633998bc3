//! Wrap-around selection cursor shared by every list screen.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a confirm resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// A real entry at this index.
    Entry(usize),
    /// The synthetic trailing back/cancel slot.
    Back,
}

/// Cursor over a virtual list, optionally ending in a synthetic back slot.
///
/// The index is always in `0..len()` and wraps modulo the virtual length on
/// every directional move; a one-row list leaves the cursor where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectCursor {
    index: usize,
    entries: usize,
    has_back: bool,
}

impl SelectCursor {
    /// Cursor over `entries` real rows plus the trailing back slot. With no
    /// entries at all, only the back slot exists and the cursor is pinned
    /// to it.
    pub fn with_back(entries: usize, initial: usize) -> Self {
        let mut cursor = Self {
            index: 0,
            entries,
            has_back: true,
        };
        cursor.index = initial.min(cursor.len() - 1);
        cursor
    }

    /// Cursor over a fixed option set with no back slot.
    pub fn bare(options: usize, initial: usize) -> Self {
        debug_assert!(options > 0, "an option cursor needs at least one row");
        let mut cursor = Self {
            index: 0,
            entries: options,
            has_back: false,
        };
        cursor.index = initial.min(cursor.len() - 1);
        cursor
    }

    /// Virtual length, back slot included.
    pub fn len(&self) -> usize {
        self.entries + usize::from(self.has_back)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor addresses the back slot.
    pub fn on_back(&self) -> bool {
        self.has_back && self.index == self.entries
    }

    pub fn up(&mut self) {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn down(&mut self) {
        self.index = (self.index + 1) % self.len();
    }

    /// Pointer path: jump straight to a row (clamped into range).
    pub fn set(&mut self, index: usize) {
        self.index = index.min(self.len() - 1);
    }

    /// Resolve a confirm at the current position. A disabled row resolves to
    /// `None`: a silent no-op, not an error. The cursor itself never moves
    /// on confirm.
    pub fn pick(&self, enabled: impl Fn(usize) -> bool) -> Option<Pick> {
        if self.on_back() {
            return Some(Pick::Back);
        }
        if enabled(self.index) {
            Some(Pick::Entry(self.index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_wraps_past_back_slot() {
        let mut cursor = SelectCursor::with_back(2, 0);
        cursor.down();
        cursor.down();
        assert!(cursor.on_back());
        cursor.down();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn up_wraps_to_back_slot() {
        let mut cursor = SelectCursor::with_back(3, 0);
        cursor.up();
        assert!(cursor.on_back());
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for start in 0..4 {
            let mut cursor = SelectCursor::with_back(3, start);
            for _ in 0..cursor.len() {
                cursor.down();
            }
            assert_eq!(cursor.index(), start);
            for _ in 0..cursor.len() {
                cursor.up();
            }
            assert_eq!(cursor.index(), start);
        }
    }

    #[test]
    fn single_row_list_stays_put() {
        let mut cursor = SelectCursor::with_back(0, 0);
        cursor.down();
        assert_eq!(cursor.index(), 0);
        cursor.up();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.on_back());
    }

    #[test]
    fn initial_index_is_clamped() {
        let cursor = SelectCursor::with_back(2, 99);
        assert_eq!(cursor.index(), 2);
        let cursor = SelectCursor::bare(2, 5);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn pick_skips_disabled_rows() {
        let cursor = SelectCursor::with_back(3, 1);
        assert_eq!(cursor.pick(|_| true), Some(Pick::Entry(1)));
        assert_eq!(cursor.pick(|index| index != 1), None);
    }

    #[test]
    fn pick_on_back_ignores_enablement() {
        let mut cursor = SelectCursor::with_back(2, 0);
        cursor.up();
        assert_eq!(cursor.pick(|_| false), Some(Pick::Back));
    }

    #[test]
    fn bare_cursor_has_no_back_slot() {
        let mut cursor = SelectCursor::bare(2, 0);
        cursor.up();
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.on_back());
        assert_eq!(cursor.pick(|_| true), Some(Pick::Entry(1)));
    }

    #[test]
    fn set_clamps_into_range() {
        let mut cursor = SelectCursor::with_back(2, 0);
        cursor.set(7);
        assert!(cursor.on_back());
        cursor.set(1);
        assert_eq!(cursor.index(), 1);
    }
}
