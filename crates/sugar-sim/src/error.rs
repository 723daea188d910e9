use sugar_core::CoreError;
use sugar_grid::{GridError, MapError};
use sugar_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("model configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("no sugar map supplied")]
    MissingMap,

    #[error("sugar map is {got_width}x{got_height} but the grid is {width}x{height}")]
    MapDimensionMismatch {
        width: u32,
        height: u32,
        got_width: u32,
        got_height: u32,
    },

    #[error("sugar map error: {0}")]
    Map(#[from] MapError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
