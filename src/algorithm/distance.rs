use std::fmt;

use serde::{Serialize, Serializer};

use crate::graph::Weight;

/// Distance from a source, with an explicit tag for "no path".
///
/// Every finite distance orders before [`Distance::Unreachable`]. Extending an unreachable
/// distance by an edge weight stays unreachable, so no sentinel arithmetic ever happens, and
/// finite sums go through [`Weight::checked_sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W> Distance<W>
where
    W: Weight,
{
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// The distance after following one more edge of weight `weight`.
    ///
    /// Returns `None` when the sum does not fit in `W`; unreachable stays unreachable.
    pub fn extend(&self, weight: W) -> Option<Self> {
        match *self {
            Distance::Finite(w) => w.checked_sum(weight).map(Distance::Finite),
            Distance::Unreachable => Some(Distance::Unreachable),
        }
    }

    /// Sum of two path lengths; unreachable if either part is, `None` on overflow
    pub fn join(&self, other: Self) -> Option<Self> {
        match other {
            Distance::Finite(w) => self.extend(w),
            Distance::Unreachable => Some(Distance::Unreachable),
        }
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Unreachable
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Unreachable,
        }
    }
}

impl<W> fmt::Display for Distance<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Unreachable => f.write_str("infinity"),
        }
    }
}

// Serialized as the plain number, or `null` when unreachable.
impl<W> Serialize for Distance<W>
where
    W: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Distance::Finite(w) => serializer.serialize_some(w),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}
