//! `sugar-output` — metrics collection and export.
//!
//! [`DataCollector`] accumulates a per-tick time series of named model
//! reporters; the model collects once at construction (the step-0 snapshot)
//! and once at the end of every step.  [`CsvWriter`] / [`export_csv`] dump
//! the accumulated history to a CSV file — one `tick` column plus one
//! column per registered series.
//!
//! The collector is generic over the observed state `S`, so this crate has
//! no dependency on the simulation crate; the model instantiates
//! `DataCollector<TypeSchedule>` and passes the schedule at each collection.

pub mod collector;
pub mod csv;
pub mod error;


pub use collector::{DataCollector, SampleRow};
pub use csv::{CsvWriter, export_csv};
pub use error::{OutputError, OutputResult};
