//! Merge configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::none::IsNone;
use crate::order::SortOrder;
use crate::policy::{Destination, DuplicatePolicy};

/// Settings a merge routine reads before combining sparse entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparseConfig {
    /// How repeated coordinates are combined.
    pub duplicate_policy: DuplicatePolicy,
    /// Whether NaN counts as none in addition to zero.
    pub zero_nan: bool,
    /// Order in which entries are sorted before merging.
    pub sort_order: SortOrder,
}

impl Default for SparseConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Add,
            zero_nan: false,
            sort_order: SortOrder::RowMajor,
        }
    }
}

impl SparseConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` on malformed input.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Checks the configuration against the destination it will merge into.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DenseOnlyPolicy` if the duplicate policy
    /// cannot target `destination`.
    pub fn validate(&self, destination: Destination) -> Result<(), ValidationError> {
        self.duplicate_policy.check_destination(destination)
    }

    /// Applies the configured none-ness test to `value`.
    #[must_use]
    pub fn is_none<T: IsNone>(&self, value: T) -> bool {
        value.is_none_value(self.zero_nan)
    }
}
