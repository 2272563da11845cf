use thiserror::Error;

/// Top-level error type for the Hullis kernel.
#[derive(Debug, Error)]
pub enum HullisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    PointFile(#[from] PointFileError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the half-edge mesh structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to hull construction.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("need at least {required} input points, got {actual}")]
    InsufficientInput { required: usize, actual: usize },

    #[error("no extreme vertex found across edge {origin} -> {end}")]
    NoExtremeVertex { origin: String, end: String },
}

/// Errors related to random point-set generation.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid bounds on {axis}: min {min} exceeds max {max}")]
    InvalidBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid sphere radius {0}")]
    InvalidRadius(f64),
}

/// Errors related to point-list files.
#[derive(Debug, Error)]
pub enum PointFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid point on line {line}: {content:?}")]
    InvalidPoint { line: usize, content: String },
}

/// Convenience type alias for results using [`HullisError`].
pub type Result<T> = std::result::Result<T, HullisError>;
