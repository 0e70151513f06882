//! # arsmachina-core
//!
//! Core crate for arsmachina. Contains the data-access capability trait,
//! the controller contract, configuration schemas, pagination/sorting
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other arsmachina crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
