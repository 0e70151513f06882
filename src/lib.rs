//! # arsmachina
//!
//! Generic entity controllers over a pluggable data-access layer.
//!
//! Implement [`Dao`] for a persistence backend, then wrap it in an
//! [`EntityController`] to get uniform CRUD and lifecycle operations,
//! including [`EntityController::save_or_update`].

pub mod telemetry;

pub use arsmachina_controller::EntityController;
pub use arsmachina_core::config::AppConfig;
pub use arsmachina_core::error::{AppError, ErrorKind};
pub use arsmachina_core::result::AppResult;
pub use arsmachina_core::traits::{Controller, Dao};
pub use arsmachina_core::types::{PageRequest, SortDirection, SortField};
