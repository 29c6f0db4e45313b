use crate::error::ErrorKind;

/// Errors that can occur while building a comparison chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Nothing to plot or an unusable chart description
    #[error("Invalid chart input: {0}")]
    InvalidInput(String),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}
