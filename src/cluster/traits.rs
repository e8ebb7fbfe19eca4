use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// A point that can be clustered.
///
/// The algorithm sees nothing of a point beyond these two operations, so geographic
/// coordinates, feature vectors or graph nodes can all take part as long as they can name
/// themselves and measure how far apart they are.
///
/// `distance` must be non-negative and should be symmetric. It is only ever evaluated as
/// `candidate.distance(center)`, and it does not need to satisfy the triangle inequality.
pub trait Clusterable {
    /// Identifier type; must be unique among the points of one run.
    type Id: Eq + Hash + Clone + Debug;

    /// Stable identifier of this point.
    fn id(&self) -> Self::Id;

    /// Distance from this point to `other`.
    fn distance(&self, other: &Self) -> f64;
}

/// Common interface for clusterers that label each input point.
pub trait Clustering<P: Clusterable> {
    /// Fit the model and return one label per input point, `None` for noise.
    fn fit_predict(&self, data: &[P]) -> Result<Vec<Option<usize>>>;
}
