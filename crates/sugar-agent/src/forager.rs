//! Mobile foragers: attribute draws and the movement/harvest rules.
//!
//! # Movement rule
//!
//! A forager scans the von Neumann neighborhood within its vision radius
//! (edges clipped, nothing wraps) and keeps the cells not occupied by
//! another forager, plus its own current cell.  Among those it takes the
//! cells with the most sugar, narrows to the nearest by exact squared
//! Euclidean distance, and breaks any remaining tie uniformly at random
//! through the shared RNG.  A forager surrounded by strictly worse cells
//! therefore stays put rather than wandering.

use std::ops::Range;

use sugar_core::{GridPos, SimRng};
use sugar_grid::MultiGrid;

use crate::SugarPatch;

// ── Creation-time attribute ranges (closed-open) ──────────────────────────────

/// Initial sugar stock drawn per forager.
pub const INITIAL_SUGAR: Range<i64> = 50..100;
/// Sugar burned per tick.
pub const METABOLISM: Range<u32> = 2..4;
/// Neighborhood scan radius for movement.
pub const VISION: Range<u32> = 1..6;

// ── Forager ───────────────────────────────────────────────────────────────────

/// A consuming entity.  Created at tick 0, destroyed when its stock runs out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forager {
    pub pos: GridPos,
    /// Cleared when the forager starves; dead foragers are skipped by the
    /// activation loop and hold no grid or schedule registration.
    pub alive: bool,
    /// Current sugar stock.  Signed: one harvest can overdraw the stock
    /// below zero before the starvation check runs.
    pub sugar: i64,
    /// Stock consumed per tick.
    pub metabolism: u32,
    /// Manhattan radius of the movement scan.
    pub vision: u32,
}

impl Forager {
    /// Create a forager at `pos` with attributes drawn from the shared RNG.
    ///
    /// Draw order is stock, metabolism, vision — fixed, because every draw
    /// shifts the shared stream for all later decisions.
    pub fn draw(pos: GridPos, rng: &mut SimRng) -> Self {
        Self {
            pos,
            alive: true,
            sugar: rng.gen_range(INITIAL_SUGAR),
            metabolism: rng.gen_range(METABOLISM),
            vision: rng.gen_range(VISION),
        }
    }

    /// Pick the cell this forager moves to this tick (possibly its own).
    pub fn choose_destination(
        &self,
        grid: &MultiGrid,
        patches: &[SugarPatch],
        rng: &mut SimRng,
    ) -> GridPos {
        let mut candidates: Vec<GridPos> = grid
            .von_neumann_range(self.pos, self.vision)
            .into_iter()
            .filter(|&p| !grid.has_forager_at(p))
            .collect();
        // The current cell always competes, so the candidate set is never empty.
        candidates.push(self.pos);

        let best = candidates
            .iter()
            .map(|&p| patches[grid.cell_index(p)].amount)
            .max()
            .unwrap_or(0);
        candidates.retain(|&p| patches[grid.cell_index(p)].amount == best);

        let nearest = candidates
            .iter()
            .map(|&p| self.pos.dist_sq(p))
            .min()
            .unwrap_or(0);
        candidates.retain(|&p| self.pos.dist_sq(p) == nearest);

        rng.choose(&candidates).copied().unwrap_or(self.pos)
    }

    /// Harvest the patch under this forager and pay this tick's metabolism.
    pub fn harvest(&mut self, patch: &mut SugarPatch) {
        self.sugar += patch.take() as i64 - self.metabolism as i64;
    }

    /// `true` once the stock has run out — the forager dies this tick.
    #[inline]
    pub fn is_starved(&self) -> bool {
        self.sugar <= 0
    }
}
