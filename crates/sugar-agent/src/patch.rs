//! Sugar patches and the constant-growback rule.

use sugar_core::GridPos;

/// Sugar regrown per tick under the constant-growback rule.
pub const GROWBACK_RATE: u32 = 1;

/// A fixed-position resource site.  One exists per grid cell.
///
/// The position never changes; only `amount` does — down when a forager
/// harvests the cell, up by [`GROWBACK_RATE`] per tick until it reaches
/// `max_sugar` again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SugarPatch {
    pub pos: GridPos,
    /// Current sugar on the cell.
    pub amount: u32,
    /// Capacity from the sugar-distribution map.  `amount` never exceeds it.
    pub max_sugar: u32,
}

impl SugarPatch {
    /// A patch starts full: initial amount equals its capacity.
    pub fn new(pos: GridPos, max_sugar: u32) -> Self {
        Self {
            pos,
            amount: max_sugar,
            max_sugar,
        }
    }

    /// One tick of constant growback.
    #[inline]
    pub fn regrow(&mut self) {
        self.amount = (self.amount + GROWBACK_RATE).min(self.max_sugar);
    }

    /// Strip the cell bare, returning what was on it.
    #[inline]
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }
}
