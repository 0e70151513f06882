//! Core traits defined in `arsmachina-core` and implemented by other crates.

pub mod controller;
pub mod dao;

pub use controller::Controller;
pub use dao::Dao;
