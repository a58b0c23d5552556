//! Error types for palette coordinate generation.

use thiserror::Error;

/// Errors raised while validating input or projecting points.
///
/// Validation happens before any computation and overflow is checked per
/// point, so a call either returns a complete palette or one of these.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("point collection is empty")]
    EmptyPoints,

    /// Fewer than two objectives per point.
    #[error("points need at least 2 dimensions, got {dimensions}")]
    DimensionTooSmall { dimensions: usize },

    #[error("point {index} has {actual} dimensions, expected {expected}")]
    RaggedPoint {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("point {index} has non-finite value {value} at dimension {dimension}")]
    NonFiniteCoordinate {
        index: usize,
        dimension: usize,
        value: f64,
    },

    #[error("layer {layer} references point {index}, but only {point_count} points exist")]
    LayerIndexOutOfRange {
        layer: usize,
        index: usize,
        point_count: usize,
    },

    #[error("column {column} is out of range for {dimensions}-dimensional points")]
    ColumnOutOfRange { column: usize, dimensions: usize },

    /// A negative base raised to a fractional exponent has no real value.
    #[error("cannot raise {value} (point {index}) to fractional power {factor}")]
    ScaleDomain {
        index: usize,
        value: f64,
        factor: f64,
    },

    /// Finite objective values too large to weight without leaving the
    /// double range.
    #[error("point {index} overflows the double range during projection")]
    NumericOverflow { index: usize },

    #[error("z gap must be finite, got {0}")]
    InvalidZGap(f64),

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
