use sugar_core::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{0} is not registered with the schedule")]
    NotRegistered(Entity),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
