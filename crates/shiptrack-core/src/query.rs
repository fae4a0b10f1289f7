//! Query options for sorting shipments

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Map a "descending?" toggle onto a direction
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Order `a` against `b` with `compare`, swapping the operands when
    /// descending rather than reversing the result.
    pub fn apply<T: ?Sized, F>(&self, a: &T, b: &T, compare: F) -> Ordering
    where
        F: Fn(&T, &T) -> Ordering,
    {
        match self {
            Self::Ascending => compare(a, b),
            Self::Descending => compare(b, a),
        }
    }
}

impl From<bool> for SortDirection {
    fn from(descending: bool) -> Self {
        Self::from_descending(descending)
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}
