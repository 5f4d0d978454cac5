//! define the error enum for parameter validation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ParameterError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type ParameterResult<T> = Result<T, ParameterError>;
