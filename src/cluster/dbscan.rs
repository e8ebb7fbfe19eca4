//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighbourhood density. It:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters by itself
//! - Leaves sparse points out as noise
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbours.
//! - **MinPts**: Minimum number of points within ε, the point itself included, for a
//!   point to be "core".
//! - **Core point**: Has at least MinPts points (itself included) within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in input order:
//!    - Find its unclustered neighbours within ε over the whole input
//!    - If `|neighbours| + 1 < MinPts`, mark P as noise (may be promoted later)
//!    - Else P is core: start a new cluster and expand it over the neighbours
//!
//! 2. Expansion works on a fixed snapshot of P's neighbours:
//!    - Noise neighbours are promoted and appended
//!    - A neighbour that is core *within the snapshot* brings its unclustered snapshot
//!      neighbours along; one within ε of a known core point joins as a border point
//!    - Discoveries are never appended to the snapshot
//!
//! ## Reach of one expansion
//!
//! Expansion does not chase density-reachability past the seed's own neighbourhood.
//! A point two hops from the seed is left for a later seed of the outer loop, which
//! then starts a *separate* cluster. A chain `0, 1, 2, 3` with ε = 1 and MinPts = 2
//! therefore yields `{0, 1}` and `{2, 3}` rather than one cluster.
//!
//! Points are never taken from an earlier cluster, so every point ends up in at most
//! one cluster.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations; neighbourhoods are found by brute force.
//! - **Space**: O(n) for the visitation state.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use super::members::Cluster;
use super::state::{Classification, Visited};
use super::traits::{Clusterable, Clustering};
use super::util;
use crate::error::{Error, Result};

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighbourhood.
    epsilon: f64,
    /// Minimum points (the point itself included) for core point classification.
    min_pts: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbours.
    /// * `min_pts` - Minimum number of points to form a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by k-distance plot (k = min_pts - 1).
    /// - `min_pts`: 2 * dimension is a common heuristic for vector data.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighbourhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Cluster `points`, returning the clusters in order of discovery.
    ///
    /// Never fails: empty input yields no clusters, a negative epsilon makes every point
    /// isolated, and `min_pts <= 1` lets every point seed a cluster. Duplicate identifiers
    /// are not detected here; use [`Dbscan::fit`] for a checked run.
    pub fn clusterize<'a, P: Clusterable>(&self, points: &'a [P]) -> Vec<Cluster<'a, P>> {
        let pool: Vec<&'a P> = points.iter().collect();
        let mut visited = Visited::with_capacity(points.len());
        let mut clusters = Vec::new();

        for point in points {
            let id = point.id();
            if visited.is_visited(&id) {
                continue;
            }

            let neighbours = region_query(point, &pool, &visited, self.epsilon);

            // MinPts includes the point itself
            if neighbours.len() + 1 < self.min_pts {
                // Not enough neighbours: noise for now, a later cluster may still take it.
                visited.mark_noise(id);
                continue;
            }

            trace!(
                "seeding cluster {} at {:?} with {} neighbours",
                clusters.len(),
                id,
                neighbours.len()
            );
            visited.mark_clustered(id.clone());
            let cluster = self.expand_cluster(Cluster::singleton(point), &neighbours, &mut visited);

            if cluster.len() >= self.min_pts {
                clusters.push(cluster);
            } else {
                // Members stay marked clustered.
                trace!(
                    "discarding cluster seeded at {:?}: {} < min_pts {}",
                    id,
                    cluster.len(),
                    self.min_pts
                );
            }
        }

        debug!(
            "dbscan: {} points, {} clusters, {} clustered, {} noise (eps={}, min_pts={})",
            points.len(),
            clusters.len(),
            visited.count(Classification::Clustered),
            visited.count(Classification::Noise),
            self.epsilon,
            self.min_pts
        );
        clusters
    }

    /// Validate the input, cluster it, and label every point.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `min_pts` is zero or `epsilon` is NaN.
    /// - [`Error::DuplicateIdentifier`] if two points report the same identifier.
    pub fn fit<'a, P: Clusterable>(&self, points: &'a [P]) -> Result<DbscanFit<'a, P>> {
        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        if self.epsilon.is_nan() {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be a number",
            });
        }

        if let Some(id) = util::first_duplicate(points) {
            return Err(Error::DuplicateIdentifier(format!("{id:?}")));
        }

        let clusters = self.clusterize(points);

        let mut assigned: HashMap<P::Id, usize> = HashMap::new();
        for (label, cluster) in clusters.iter().enumerate() {
            for point in cluster.iter() {
                assigned.insert(point.id(), label);
            }
        }
        let labels = points
            .iter()
            .map(|p| assigned.get(&p.id()).copied())
            .collect();

        Ok(DbscanFit { clusters, labels })
    }

    /// Grow `cluster` over a fixed snapshot of `neighbours`.
    ///
    /// The members of `cluster` on entry are taken to be core points. For each snapshot
    /// point, by its classification at the time it is reached:
    ///
    /// - noise: promoted and appended;
    /// - unvisited, or clustered by this expansion and not yet examined: if core within
    ///   the snapshot (plus the entry members), merged together with its unclustered
    ///   snapshot neighbours; otherwise merged alone when within epsilon of a core point;
    /// - clustered by an earlier cluster: left alone.
    ///
    /// No size threshold is applied here.
    pub(crate) fn expand_cluster<'a, P: Clusterable>(
        &self,
        mut cluster: Cluster<'a, P>,
        neighbours: &[&'a P],
        visited: &mut Visited<P::Id>,
    ) -> Cluster<'a, P> {
        let seed: Vec<&'a P> = neighbours.to_vec();

        let mut cores: Vec<&'a P> = cluster.iter().collect();
        let mut density_pool = cores.clone();
        density_pool.extend(seed.iter().copied().filter(|p| !cluster.contains(&p.id())));

        let mut examined: HashSet<P::Id> = HashSet::with_capacity(seed.len());

        for &point in &seed {
            let id = point.id();
            match visited.classification(&id) {
                Some(Classification::Noise) => {
                    visited.mark_clustered(id);
                    cluster.push(point);
                }
                Some(Classification::Clustered) if !cluster.contains(&id) => {}
                _ => {
                    if !examined.insert(id.clone()) {
                        continue;
                    }

                    let density = density_pool
                        .iter()
                        .filter(|q| q.id() != id && q.distance(point) <= self.epsilon)
                        .count();

                    if density + 1 >= self.min_pts {
                        let mut incoming = vec![point];
                        incoming.extend(region_query(point, &seed, visited, self.epsilon));
                        cluster.merge(&incoming, visited);
                        cores.push(point);
                    } else if cores.iter().any(|c| point.distance(c) <= self.epsilon) {
                        cluster.merge(&[point], visited);
                    }
                }
            }
        }

        trace!(
            "expanded cluster to {} points over {} neighbours",
            cluster.len(),
            seed.len()
        );
        cluster
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl<P: Clusterable> Clustering<P> for Dbscan {
    fn fit_predict(&self, data: &[P]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(data)?.labels)
    }
}

/// Cluster `points` with DBSCAN.
///
/// Shorthand for `Dbscan::new(eps, min_pts).clusterize(points)`.
pub fn clusterize<P: Clusterable>(points: &[P], min_pts: usize, eps: f64) -> Vec<Cluster<'_, P>> {
    Dbscan::new(eps, min_pts).clusterize(points)
}

/// Unclustered points of `candidates` within `epsilon` of `point`, in candidate order.
///
/// `point` itself (by identifier) is never included. `visited` is only read.
pub(crate) fn region_query<'a, P: Clusterable>(
    point: &P,
    candidates: &[&'a P],
    visited: &Visited<P::Id>,
    epsilon: f64,
) -> Vec<&'a P> {
    let point_id = point.id();
    candidates
        .iter()
        .copied()
        .filter(|candidate| {
            let id = candidate.id();
            !visited.is_clustered(&id) && id != point_id && candidate.distance(point) <= epsilon
        })
        .collect()
}

/// Outcome of a checked [`Dbscan::fit`].
pub struct DbscanFit<'a, P: Clusterable> {
    clusters: Vec<Cluster<'a, P>>,
    labels: Vec<Option<usize>>,
}

impl<'a, P: Clusterable> DbscanFit<'a, P> {
    /// Clusters in order of discovery.
    pub fn clusters(&self) -> &[Cluster<'a, P>] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster<'a, P>> {
        self.clusters
    }

    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// One label per input point: the index of its cluster, or `None` for noise.
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Input indices of the points that belong to no cluster.
    pub fn noise(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }
}
