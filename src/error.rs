use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("window capacity must be greater than zero")]
    InvalidCapacity,
    #[error("line does not start with the WOG tag")]
    BadTag,
    #[error("frame field {index} is missing")]
    MissingField { index: usize },
    #[error("frame field {index} is not a number: {text:?}")]
    BadNumber { index: usize, text: String },
    #[error("failed to read from the sample stream: {0}")]
    Io(#[from] std::io::Error),
}
