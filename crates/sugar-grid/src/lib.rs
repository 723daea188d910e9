//! `sugar-grid` — spatial storage for the sugarscape workspace.
//!
//! Two things live here:
//!
//! - [`MultiGrid`]: a dense `width × height` lattice of per-cell occupant
//!   lists.  Non-toroidal: edges clip, nothing wraps.  Cells hold any number
//!   of occupants, so crowded initial placement is well-defined.
//! - [`SugarMap`]: the static resource-distribution input — a plain-text
//!   numeric matrix giving each cell's maximum sugar capacity, parsed once
//!   at model construction.

pub mod error;
pub mod grid;
pub mod map;


pub use error::{GridError, GridResult, MapError, MapResult};
pub use grid::MultiGrid;
pub use map::SugarMap;
