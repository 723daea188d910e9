use sugar_core::{Entity, GridPos};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("position {pos} outside {width}x{height} grid")]
    OutOfBounds {
        pos: GridPos,
        width: u32,
        height: u32,
    },

    #[error("{entity} not present at {pos}")]
    NotPresent { entity: Entity, pos: GridPos },
}

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("sugar map is empty")]
    Empty,

    #[error("sugar map row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("sugar map row {row}, column {col}: cannot parse {token:?} as a number")]
    Parse {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("sugar map row {row}, column {col}: capacity must be non-negative")]
    Negative { row: usize, col: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
