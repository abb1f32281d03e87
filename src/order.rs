//! Sort orders for rank-2 coordinate indices.
//!
//! A sort order is a permutation of the index dimensions: sorting
//! entries by the permuted index groups them by row (`ROW_MAJOR`) or by
//! column (`COL_MAJOR`).

use serde::{Deserialize, Serialize};

/// Dimension permutation for row-major ordering.
pub const ROW_MAJOR: [usize; 2] = [0, 1];

/// Dimension permutation for column-major ordering.
pub const COL_MAJOR: [usize; 2] = [1, 0];

/// Ordering of rank-2 coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Sort by row, then column.
    #[default]
    RowMajor,
    /// Sort by column, then row.
    ColMajor,
}

impl SortOrder {
    /// Returns the dimension permutation for this order.
    #[must_use]
    pub const fn permutation(self) -> [usize; 2] {
        match self {
            Self::RowMajor => ROW_MAJOR,
            Self::ColMajor => COL_MAJOR,
        }
    }

    /// Returns the key under which `index` sorts in this order.
    #[must_use]
    pub const fn sort_key(self, index: [usize; 2]) -> [usize; 2] {
        let perm = self.permutation();
        [index[perm[0]], index[perm[1]]]
    }
}
