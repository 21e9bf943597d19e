use thiserror::Error;

use crate::ArgumentKind;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("invalid argument: expected a transform, got {found}")]
    InvalidArgument { found: ArgumentKind },

    #[error("unknown transform: {0}")]
    UnknownTransform(String),
}
