//! `sugar-sim` — the simulation model and its tick loop.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Order    — ask the schedule for this tick's activation sequence
//!                (each type group shuffled independently; patches first).
//!   ② Activate — apply each entity's effect in that order:
//!                  patch    → constant growback
//!                  forager  → move, harvest, die if starved
//!   ③ Clock    — advance the schedule's tick counter.
//!   ④ Collect  — record one metrics sample; print the verbose
//!                `[tick, living_count]` line if enabled.
//! ```
//!
//! Strictly single-threaded and sequential: each activation observes every
//! effect of the activations before it, which is what random activation by
//! type means.  Determinism comes from the single seeded RNG — same seed,
//! same parameters, same run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::io::Cursor;
//! use sugar_core::ModelConfig;
//! use sugar_grid::SugarMap;
//! use sugar_sim::ModelBuilder;
//!
//! let map = SugarMap::from_reader(Cursor::new("1 1\n1 1\n"))?;
//! let mut model = ModelBuilder::new(ModelConfig {
//!     width: 2, height: 2, initial_population: 3, ..Default::default()
//! })
//! .sugar_map(map)
//! .build()?;
//! model.run_model(200)?;
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::{DEFAULT_STEP_COUNT, FORAGER_SERIES, SugarscapeModel};
pub use observer::{ModelObserver, NoopObserver};
