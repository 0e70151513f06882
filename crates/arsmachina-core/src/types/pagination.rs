//! Pagination request for `find_all_paged`.

use serde::{Deserialize, Serialize};

use super::sorting::{SortDirection, SortField};

/// A window over the full entity listing, with optional ordering.
///
/// Values are carried exactly as given. Interpreting an out-of-range
/// window is up to the DAO.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based index of the first result.
    pub first_result: usize,
    /// Maximum number of results to return.
    pub max_results: usize,
    /// Optional ordering.
    #[serde(default)]
    pub sort: Option<SortField>,
}

impl PageRequest {
    /// Create an unsorted page request.
    pub fn new(first_result: usize, max_results: usize) -> Self {
        Self {
            first_result,
            max_results,
            sort: None,
        }
    }

    /// Create a page request ordered by `property`.
    pub fn sorted(
        first_result: usize,
        max_results: usize,
        property: impl Into<String>,
        ascending: bool,
    ) -> Self {
        Self {
            first_result,
            max_results,
            sort: Some(SortField::new(
                property,
                SortDirection::from_ascending(ascending),
            )),
        }
    }

    /// Replace the ordering of this request.
    pub fn with_sort(mut self, sort: SortField) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of results to skip.
    pub fn offset(&self) -> usize {
        self.first_result
    }

    /// Maximum number of results to return.
    pub fn limit(&self) -> usize {
        self.max_results
    }
}
