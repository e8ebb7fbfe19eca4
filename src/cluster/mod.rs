//! Density-based clustering of arbitrary points.
//!
//! ## Points
//!
//! Anything implementing [`Clusterable`] can be clustered: the algorithm only asks a point
//! for a stable identifier and for its distance to another point. The distance need not be
//! a metric (the triangle inequality is never used), but it must be non-negative and should
//! be symmetric.
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers clusters of arbitrary shape and leaves
//! outliers unassigned as noise. It does not need the number of clusters in advance;
//! instead it takes a radius `eps` and a density threshold `min_pts` (the point itself
//! included).
//!
//! Every run keeps its own [`Visited`] state, so concurrent runs over different inputs
//! share nothing.
//!
//! ## Usage
//!
//! ```rust
//! use clusterize::cluster::{clusterize, Clusterable, Dbscan};
//!
//! struct Reading {
//!     sensor: u32,
//!     value: f64,
//! }
//!
//! impl Clusterable for Reading {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.sensor
//!     }
//!
//!     fn distance(&self, other: &Self) -> f64 {
//!         (self.value - other.value).abs()
//!     }
//! }
//!
//! let data: Vec<Reading> = [0.0, 0.5, 1.0, 4.0, 4.5, 5.0, 20.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &value)| Reading { sensor: i as u32, value })
//!     .collect();
//!
//! // Clusters of borrowed points
//! let clusters = clusterize(&data, 2, 1.0);
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].ids(), vec![0, 1, 2]);
//!
//! // Checked run with per-point labels (noise as `None`)
//! let fit = Dbscan::new(1.0, 2).fit(&data).unwrap();
//! assert_eq!(fit.labels()[3], Some(1));
//! assert_eq!(fit.noise(), vec![6]);
//! ```

mod dbscan;
mod members;
mod state;
mod traits;
mod util;

pub use dbscan::{clusterize, Dbscan, DbscanFit};
pub use members::Cluster;
pub use state::{Classification, Visited};
pub use traits::{Clusterable, Clustering};
