//! Sugar-distribution map loader.
//!
//! # Input format
//!
//! A plain-text numeric matrix: one line per grid row, whitespace-separated
//! non-negative numbers, exactly `height` rows of `width` columns.  Row
//! index maps to the grid `y` coordinate and column index to `x`.  Blank
//! lines are ignored.
//!
//! ```text
//! 0 0 1 1 0
//! 0 2 3 2 0
//! 0 1 2 1 0
//! ```
//!
//! Values are each cell's *maximum* sugar capacity.  Fractional values are
//! accepted and truncated; negative or non-numeric tokens are a hard parse
//! failure (a malformed map aborts model construction).

use std::io::Read;
use std::path::Path;

use sugar_core::GridPos;

use crate::{MapError, MapResult};

/// A parsed resource-capacity matrix.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SugarMap {
    width: u32,
    height: u32,
    /// Row-major capacities.  Length = `width * height`.
    values: Vec<u32>,
}

impl SugarMap {
    /// Parse a map from any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or for embedded map
    /// text in demo binaries.
    pub fn from_reader<R: Read>(mut reader: R) -> MapResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut width: Option<usize> = None;
        let mut values: Vec<u32> = Vec::new();
        let mut rows = 0usize;

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            rows += 1;
            let row_start = values.len();

            for (col, token) in line.split_whitespace().enumerate() {
                let v: f64 = token.parse().map_err(|_| MapError::Parse {
                    row: line_no + 1,
                    col: col + 1,
                    token: token.to_owned(),
                })?;
                if !v.is_finite() {
                    return Err(MapError::Parse {
                        row: line_no + 1,
                        col: col + 1,
                        token: token.to_owned(),
                    });
                }
                if v < 0.0 {
                    return Err(MapError::Negative {
                        row: line_no + 1,
                        col: col + 1,
                    });
                }
                values.push(v as u32);
            }

            let got = values.len() - row_start;
            match width {
                None if got == 0 => return Err(MapError::Empty),
                None => width = Some(got),
                Some(expected) if got != expected => {
                    return Err(MapError::RaggedRow {
                        row: line_no + 1,
                        expected,
                        got,
                    });
                }
                Some(_) => {}
            }
        }

        let width = width.ok_or(MapError::Empty)?;
        Ok(Self {
            width: width as u32,
            height: rows as u32,
            values,
        })
    }

    /// Read and parse a map file.
    pub fn from_path(path: &Path) -> MapResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair for dimension checks against the grid.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Maximum sugar capacity at `pos`.  `pos` must be in bounds.
    #[inline]
    pub fn capacity_at(&self, pos: GridPos) -> u32 {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        self.values[pos.y as usize * self.width as usize + pos.x as usize]
    }

    /// Sum of all cell capacities — the map's total carrying capacity.
    pub fn total_capacity(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }
}
