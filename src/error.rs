use thiserror::Error;

pub type TickResult<T> = Result<T, TickError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickError {
    #[error("invalid tick count: {tick_count} (must be >= 2)")]
    InvalidTickCount { tick_count: usize },

    #[error("tick range must be finite and non-degenerate: lo={lo}, hi={hi}")]
    NonFiniteRange { lo: f64, hi: f64 },

    #[error("no tick of step {step} fits inside [{lo}, {hi}]")]
    NoTicksInside { lo: f64, hi: f64, step: f64 },

    #[error("couldn't find usable time scale for [{lo}, {hi}]")]
    NoUsableScale { lo: i64, hi: i64 },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
