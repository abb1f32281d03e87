//! Duplicate-entry policies.
//!
//! When two sparse entries share a coordinate, a merge routine combines
//! them according to a [`DuplicatePolicy`]. This module defines the
//! policies, their textual and ordinal encodings, and the per-entry
//! combining rule.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::none::IsNone;

/// What to do when duplicate entries are encountered.
///
/// - `Add` (default): sum them together.
/// - `LeaveAlone`: use the first value encountered.
/// - `Replace`: use the last value encountered.
/// - `ReplaceThenAdd`: dense destinations only. Add if the existing
///   value is not none, otherwise replace.
///
/// # Examples
///
/// ```
/// use spsparse::DuplicatePolicy;
///
/// let policy: DuplicatePolicy = "replace_then_add".parse().unwrap();
/// assert_eq!(policy, DuplicatePolicy::ReplaceThenAdd);
/// assert_eq!(policy.to_string(), "REPLACE_THEN_ADD");
/// assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Add);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplicatePolicy {
    /// Keep the first value.
    LeaveAlone,
    /// Sum all values.
    #[default]
    Add,
    /// Keep the last value.
    Replace,
    /// Add onto a non-none dense value, otherwise replace it.
    ReplaceThenAdd,
}

/// Kind of container a merge writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Coordinate-indexed storage holding only present entries.
    Sparse,
    /// Fully materialized array.
    Dense,
}

impl DuplicatePolicy {
    /// Every policy, in ordinal order.
    pub const ALL: [Self; 4] = [
        Self::LeaveAlone,
        Self::Add,
        Self::Replace,
        Self::ReplaceThenAdd,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeaveAlone => "LEAVE_ALONE",
            Self::Add => "ADD",
            Self::Replace => "REPLACE",
            Self::ReplaceThenAdd => "REPLACE_THEN_ADD",
        }
    }

    /// Returns the position of this policy in declaration order.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::LeaveAlone => 0,
            Self::Add => 1,
            Self::Replace => 2,
            Self::ReplaceThenAdd => 3,
        }
    }

    /// Returns true if the policy only makes sense for dense destinations.
    #[must_use]
    pub const fn requires_dense(self) -> bool {
        matches!(self, Self::ReplaceThenAdd)
    }

    /// Checks that this policy may be used when merging into `destination`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DenseOnlyPolicy` for `ReplaceThenAdd`
    /// with a sparse destination.
    pub fn check_destination(self, destination: Destination) -> Result<(), ValidationError> {
        if self.requires_dense() && destination != Destination::Dense {
            return Err(ValidationError::DenseOnlyPolicy {
                policy: self.name().to_string(),
            });
        }
        Ok(())
    }

    /// Combines the value already stored at a coordinate with an incoming
    /// duplicate.
    ///
    /// For `ReplaceThenAdd`, `existing` is tested with `zero_nan` set, so
    /// an uninitialized (NaN) dense slot is overwritten rather than
    /// poisoning the sum.
    #[inline]
    #[must_use]
    pub fn resolve<T>(self, existing: T, incoming: T) -> T
    where
        T: IsNone + Add<Output = T>,
    {
        match self {
            Self::LeaveAlone => existing,
            Self::Add => existing + incoming,
            Self::Replace => incoming,
            Self::ReplaceThenAdd => {
                if existing.is_none_value(true) {
                    incoming
                } else {
                    existing + incoming
                }
            }
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| ValidationError::UnknownPolicy {
                name: s.to_string(),
            })
    }
}

impl TryFrom<u8> for DuplicatePolicy {
    type Error = ValidationError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or(ValidationError::InvalidOrdinal { ordinal })
    }
}

impl From<DuplicatePolicy> for u8 {
    fn from(policy: DuplicatePolicy) -> Self {
        policy.ordinal()
    }
}
