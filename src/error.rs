use thiserror::Error;

pub type IndicatorResult<T> = Result<T, IndicatorError>;

#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend error: {0}")]
    Backend(String),
}
