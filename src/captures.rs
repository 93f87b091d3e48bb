//! The capture table threaded through one match attempt.
//!
//! Entries are set when a group closes and restored to their prior value
//! when the driver backtracks past that closure (see `matcher::try_atom`'s
//! `Group` arm). The table is not visible to callers; it exists purely to
//! support back-references within the same attempt.

/// Capture slots for groups 1 through 9, keyed by `index - 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    slots: [Option<(usize, usize)>; 9],
}

impl Captures {
    /// The `[start, end)` character range captured by group `index`, if
    /// it has closed at least once in this attempt.
    pub fn get(&self, index: u8) -> Option<(usize, usize)> {
        self.slots[(index - 1) as usize]
    }

    /// Binds group `index` to `range`, returning whatever was there before
    /// so the caller can restore it on backtrack.
    pub fn set(&mut self, index: u8, range: (usize, usize)) -> Option<(usize, usize)> {
        let slot = &mut self.slots[(index - 1) as usize];
        std::mem::replace(slot, Some(range))
    }

    /// Restores group `index` to a value previously returned by `set`.
    pub fn restore(&mut self, index: u8, prev: Option<(usize, usize)>) {
        self.slots[(index - 1) as usize] = prev;
    }
}
