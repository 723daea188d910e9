//! `sugar-agent` — the two entity variants and their per-activation rules.
//!
//! Behavior functions here are pure decisions over read-only world state
//! plus the shared RNG; all mutation of the grid and schedule happens in
//! the simulation crate's activation loop.  This keeps each rule testable
//! against a hand-built grid without standing up a full model.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`patch`]   | `SugarPatch`, constant-growback regrowth             |
//! | [`forager`] | `Forager`, attribute draws, movement + harvest rules |

pub mod forager;
pub mod patch;


pub use forager::{Forager, INITIAL_SUGAR, METABOLISM, VISION};
pub use patch::{GROWBACK_RATE, SugarPatch};
