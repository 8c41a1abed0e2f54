//! Shared types used across memsim crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AllocError;

/// A single wire group: `[key, item, ...]`.
///
/// The key is a partition capacity, or `0` for the unallocated bucket.
/// The items are process sizes, or the lone placeholder `0` when nothing
/// was assigned.
pub type Group = Vec<u64>;

/// Placement policy for fixed-partition allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Earliest partition (in caller order) with enough remaining capacity.
    #[serde(rename = "First-Fit")]
    FirstFit,
    /// Partition with the smallest sufficient remaining capacity.
    #[serde(rename = "Best-Fit")]
    BestFit,
    /// Partition with the largest sufficient remaining capacity.
    #[serde(rename = "Worst-Fit")]
    WorstFit,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::FirstFit, Algorithm::BestFit, Algorithm::WorstFit];

    /// Wire token, e.g. `"First-Fit"`.
    pub fn token(&self) -> &'static str {
        match self {
            Algorithm::FirstFit => "First-Fit",
            Algorithm::BestFit => "Best-Fit",
            Algorithm::WorstFit => "Worst-Fit",
        }
    }

    /// Whether placement scans partitions in ascending capacity order
    /// rather than caller order.
    pub fn sorts_partitions(&self) -> bool {
        matches!(self, Algorithm::BestFit | Algorithm::WorstFit)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Algorithm {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.token() == s)
            .ok_or_else(|| AllocError::UnknownAlgorithm(s.to_string()))
    }
}
