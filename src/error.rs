use thiserror::Error;

/// Errors returned by the checked clustering entry points in this crate.
///
/// [`crate::clusterize()`] itself never fails; only [`crate::Dbscan::fit`] and
/// [`crate::Clustering::fit_predict`] validate their input.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Two input points reported the same identifier.
    #[error("duplicate point identifier: {0}")]
    DuplicateIdentifier(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
