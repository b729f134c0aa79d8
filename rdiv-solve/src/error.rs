use rdiv_series::SeriesError;
use thiserror::Error;

/// Errors that can occur when placing a search window.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("cannot place search window")]
    Series(#[from] SeriesError),
}
