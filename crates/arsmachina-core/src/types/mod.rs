//! Query parameter types shared by DAOs and controllers.

pub mod pagination;
pub mod sorting;

pub use pagination::PageRequest;
pub use sorting::{SortDirection, SortField};
