//! `sugar-schedule` — random activation by type.
//!
//! # Why this exists
//!
//! Activation fairness is the core scheduling concern of the model: every
//! registered entity acts exactly once per tick, and the order inside each
//! type group is re-randomized every tick so no entity gets a persistent
//! first-mover advantage.  [`TypeSchedule`] owns the rosters, the per-type
//! counts, and the tick counter.
//!
//! The schedule is a data structure, not a driver: it produces one tick's
//! [`activation_order`][TypeSchedule::activation_order] and the simulation
//! crate applies each entity's effect.  That split keeps entity state out of
//! this crate entirely.

pub mod error;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use schedule::TypeSchedule;
