//! Density-based clustering over arbitrary points.
//!
//! `clusterize` groups any collection of objects that can report a stable identifier and a
//! distance to one another. Distance computation and identity stay on the caller's type through
//! the [`Clusterable`] trait; the library only runs DBSCAN over them.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`clusterize()`]: the one-call entry point returning the discovered clusters
//! - [`Dbscan`]: the configurable clusterer, with a checked [`Dbscan::fit`] that also reports
//!   per-point labels and noise

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    clusterize, Classification, Cluster, Clusterable, Clustering, Dbscan, DbscanFit, Visited,
};
pub use error::{Error, Result};
