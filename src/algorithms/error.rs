use thiserror::Error;

/// Result type alias for niching operations.
pub type Result<T> = std::result::Result<T, NichingError>;

/// Errors raised by the niching core.
///
/// These are structural errors: retrying would re-derive the same invalid
/// inputs, so callers should abort the current merge/scatter pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NichingError {
    /// Vectors of unequal length passed to a distance or normalization call.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Zero-width bound range encountered while normalizing positions.
    #[error("degenerate domain: bounds [{lower}, {upper}] have zero width")]
    DegenerateDomain { lower: f64, upper: f64 },
}
