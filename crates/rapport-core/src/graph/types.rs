use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Opaque node identity.
///
/// Anything hashable and cloneable works; `Debug` is required so searches can
/// name their endpoints in tracing spans and fault reports.
pub trait NodeId: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> NodeId for T {}

/// Weight of a single edge or of an accumulated path.
///
/// Weights are non-negative by construction. Addition saturates, so a path
/// total never wraps around past `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub const fn new(value: u64) -> Self {
        Weight(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0.saturating_add(other.0))
    }
}

impl From<u64> for Weight {
    fn from(value: u64) -> Self {
        Weight(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Weight {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Weight)
            .map_err(|_| format!("'{}' is not a non-negative integer weight", s.trim()))
    }
}

/// Upper bound on acceptable path weight.
///
/// A route is admitted only when its total is strictly below the bound.
/// Relaxations that reach the bound are pruned during search rather than
/// filtered afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeightLimit(Option<Weight>);

impl WeightLimit {
    pub const UNLIMITED: WeightLimit = WeightLimit(None);

    /// Admit only totals strictly below `bound`. A bound of zero admits nothing
    /// except the trivial self path.
    pub const fn below(bound: Weight) -> Self {
        WeightLimit(Some(bound))
    }

    /// Interpret a configured setting, where 0 means unlimited.
    pub fn from_setting(value: u64) -> Self {
        if value == 0 {
            Self::UNLIMITED
        } else {
            Self::below(Weight(value))
        }
    }

    /// Inverse of [`WeightLimit::from_setting`]: unlimited reads back as 0.
    pub fn as_setting(&self) -> u64 {
        self.0.map_or(0, |bound| bound.value())
    }

    pub fn is_unlimited(&self) -> bool {
        self.0.is_none()
    }

    pub fn admits(&self, total: Weight) -> bool {
        self.0.is_none_or(|bound| total < bound)
    }
}

impl fmt::Display for WeightLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(bound) => write!(f, "{}", bound),
            None => f.write_str("unlimited"),
        }
    }
}

impl Serialize for WeightLimit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(bound) => serializer.serialize_u64(bound.value()),
            None => serializer.serialize_none(),
        }
    }
}

/// Which end of a bidirectional search a frontier grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Grows from the source
    Forward,
    /// Grows from the target
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }
}

/// A route through the graph together with its total weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedPath<N> {
    pub distance: Weight,
    pub nodes: Vec<N>,
}

impl<N> WeightedPath<N> {
    /// The zero-length path from a node to itself
    pub fn trivial(node: N) -> Self {
        WeightedPath {
            distance: Weight::ZERO,
            nodes: vec![node],
        }
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// First node accepted by a predicate-guided search, with the route to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch<N> {
    pub node: N,
    pub path: WeightedPath<N>,
}
