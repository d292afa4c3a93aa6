use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid bar geometry: {0}")]
    InvalidGeometry(String),

    #[error("value {value} at index {index} exceeds hours limit {limit}")]
    ValueOutOfRange { index: usize, value: u8, limit: u8 },

    #[error("series length mismatch: expected {expected}, got {actual}")]
    SeriesLengthMismatch { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
