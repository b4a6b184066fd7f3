use thiserror::Error;

/// Error taxonomy for the synchronization core.
///
/// Record-level errors (`InvalidTimestamp`, `MalformedRecord`) are recovered
/// by dropping the offending record; cycle-level errors surface to the
/// refresh controller, which keeps the last good overlay on screen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("malformed record field `{0}`")]
    MalformedRecord(&'static str),

    #[error("no renderable candle data after filtering")]
    NoRenderableData,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("network failure: {0}")]
    NetworkFailure(String),
}

impl ChartError {
    /// Record-level errors abort a single record, not the refresh cycle.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            ChartError::InvalidTimestamp(_) | ChartError::MalformedRecord(_)
        )
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
