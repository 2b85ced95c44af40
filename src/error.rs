//! Error types for package classification

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Dimensions and mass must be non-negative ({field} = {value})")]
    InvalidArgument { field: &'static str, value: f64 },
}

impl ClassifyError {
    /// Name of the rejected input (width, height, length or mass)
    pub fn field(&self) -> &'static str {
        match self {
            ClassifyError::InvalidArgument { field, .. } => field,
        }
    }
}
