//! `sugar-core` — foundational types for the sugarscape simulation workspace.
//!
//! This crate is a dependency of every other `sugar-*` crate.  It intentionally
//! has no `sugar-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `ForagerId`, `PatchId`                            |
//! | [`entity`] | `Entity`, `EntityKind`                            |
//! | [`pos`]    | `GridPos`, squared lattice distance               |
//! | [`time`]   | `Tick`                                            |
//! | [`rng`]    | `SimRng` (the single shared random source)        |
//! | [`config`] | `ModelConfig`                                     |
//! | [`error`]  | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ModelConfig;
pub use entity::{Entity, EntityKind};
pub use error::{CoreError, CoreResult};
pub use ids::{ForagerId, PatchId};
pub use pos::GridPos;
pub use rng::SimRng;
pub use time::Tick;
