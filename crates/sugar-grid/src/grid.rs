//! The multi-occupancy lattice grid.
//!
//! # Data layout
//!
//! One `Vec<Entity>` per cell, stored row-major: cell `(x, y)` lives at
//! index `y * width + x`.  Patch IDs are assigned to equal this cell index,
//! so a patch lookup from a position is a single array access with no map
//! in between.
//!
//! # Boundary semantics
//!
//! The grid is finite and non-wrapping.  Neighborhood queries clip at the
//! edges; mutating operations on out-of-bounds coordinates return
//! [`GridError::OutOfBounds`] rather than panicking.

use sugar_core::{Entity, EntityKind, GridPos};

use crate::{GridError, GridResult};

/// A dense `width × height` grid of per-cell occupant lists.
pub struct MultiGrid {
    width: u32,
    height: u32,
    /// Row-major cell occupant lists.  Length = `width * height`.
    cells: Vec<Vec<Entity>>,
}

impl MultiGrid {
    /// Construct an empty grid.
    ///
    /// # Panics
    /// Panics in debug mode if either dimension is zero; the model builder
    /// validates dimensions before constructing a grid.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Vec::new(); width as usize * height as usize],
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Row-major index of `pos`.  Doubles as the cell's `PatchId` value.
    ///
    /// `pos` must be in bounds; callers obtain positions from bounds-checked
    /// operations or [`von_neumann_range`][Self::von_neumann_range].
    #[inline]
    pub fn cell_index(&self, pos: GridPos) -> usize {
        debug_assert!(self.contains(pos));
        pos.y as usize * self.width as usize + pos.x as usize
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Add `entity` to the occupant list of `pos`.
    ///
    /// Multiple occupants per cell are allowed; placement never displaces
    /// anything already there.
    pub fn place(&mut self, entity: Entity, pos: GridPos) -> GridResult<()> {
        let idx = self.checked_index(pos)?;
        self.cells[idx].push(entity);
        Ok(())
    }

    /// Remove `entity` from the occupant list of `pos`.
    pub fn remove(&mut self, entity: Entity, pos: GridPos) -> GridResult<()> {
        let idx = self.checked_index(pos)?;
        let cell = &mut self.cells[idx];
        match cell.iter().position(|&e| e == entity) {
            // Occupant order within a cell carries no meaning.
            Some(i) => {
                cell.swap_remove(i);
                Ok(())
            }
            None => Err(GridError::NotPresent { entity, pos }),
        }
    }

    /// Move `entity` from `from` to `to` in one step.
    ///
    /// Both positions are validated before anything is mutated, so a failed
    /// relocate leaves the grid unchanged.
    pub fn relocate(&mut self, entity: Entity, from: GridPos, to: GridPos) -> GridResult<()> {
        self.checked_index(to)?;
        self.remove(entity, from)?;
        self.place(entity, to)
    }

    /// Occupants of `pos`.  `pos` must be in bounds.
    #[inline]
    pub fn entities_at(&self, pos: GridPos) -> &[Entity] {
        &self.cells[self.cell_index(pos)]
    }

    /// `true` if any forager occupies `pos`.  `pos` must be in bounds.
    ///
    /// This is the occupancy test of the movement rule: patches do not
    /// count, only other mobile entities block a cell.
    #[inline]
    pub fn has_forager_at(&self, pos: GridPos) -> bool {
        self.entities_at(pos)
            .iter()
            .any(|e| e.kind() == EntityKind::Forager)
    }

    /// Iterate all coordinates with their current occupant lists, row-major.
    pub fn coord_iter(&self) -> impl Iterator<Item = (GridPos, &[Entity])> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let pos = GridPos::new(
                (i % self.width as usize) as u32,
                (i / self.width as usize) as u32,
            );
            (pos, cell.as_slice())
        })
    }

    // ── Neighborhoods ─────────────────────────────────────────────────────

    /// All in-bounds cells at Manhattan distance `1..=radius` from `pos`
    /// (the von Neumann diamond, center excluded), clipped at the edges.
    ///
    /// Returned in deterministic row-major scan order so that downstream
    /// tie-breaking depends only on the shared RNG, never on iteration
    /// order.
    pub fn von_neumann_range(&self, pos: GridPos, radius: u32) -> Vec<GridPos> {
        let r = radius as i64;
        let (cx, cy) = (pos.x as i64, pos.y as i64);
        let mut out = Vec::new();
        for dy in -r..=r {
            let span = r - dy.abs();
            for dx in -span..=span {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                    continue;
                }
                out.push(GridPos::new(x as u32, y as u32));
            }
        }
        out
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn checked_index(&self, pos: GridPos) -> GridResult<usize> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cell_index(pos))
    }
}
