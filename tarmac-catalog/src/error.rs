use tarmac_core::{CodeError, MoneyError, ScheduleError};

/// Everything that can go wrong when building or mutating the catalog.
///
/// Validation errors are raised before any state change, so a failed
/// operation leaves the catalog exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidCode(#[from] CodeError),

    #[error(transparent)]
    InvalidSchedule(#[from] ScheduleError),

    #[error(transparent)]
    InvalidPrice(#[from] MoneyError),

    #[error("a flight with code '{0}' already exists")]
    DuplicateCode(String),

    #[error("no flight with code '{0}' was found")]
    NotFound(String),
}
