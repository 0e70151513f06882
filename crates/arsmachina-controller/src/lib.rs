//! # arsmachina-controller
//!
//! [`EntityController`] mediates between application code and a
//! [`Dao`](arsmachina_core::traits::Dao). Every operation but
//! `save_or_update` is a single forwarding call.

pub mod entity;

pub use entity::EntityController;
