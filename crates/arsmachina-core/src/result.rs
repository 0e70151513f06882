//! Convenience result type alias for arsmachina.

use crate::error::AppError;

/// A specialized `Result` type for DAO and controller operations.
pub type AppResult<T> = Result<T, AppError>;
