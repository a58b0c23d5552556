/// Shared configuration for palette coordinate generation

/// Dimensionality above which the stronger scale exponents apply
pub const SCALE_DIMENSION_THRESHOLD: usize = 3;

/// Exponent applied by the normalized projection when m > 3
pub const NORMALIZED_SCALE_HIGH: f64 = 2.0;

/// Exponent applied by the normalized projection when m <= 3
pub const NORMALIZED_SCALE_LOW: f64 = 1.0;

/// Exponent applied by the reverse-polar projection when m > 3
pub const REVERSE_POLAR_SCALE_HIGH: f64 = 3.0;

/// Exponent applied by the reverse-polar projection when m <= 3
pub const REVERSE_POLAR_SCALE_LOW: f64 = 2.0;

/// Sharpness of the logistic remap around the 0.5 midpoint
pub const LOGISTIC_SHARPNESS: f64 = 15.0;

/// Default spacing between successive depth levels
pub const DEFAULT_Z_GAP: f64 = 1.0;

/// Decimal places written per output value
pub const OUTPUT_PRECISION: usize = 4;

/// Suffix appended to the data file stem to locate the layer file
pub const LAYER_FILE_SUFFIX: &str = "-layers.out";

/// Appended to the palette file name (minus extension) for the run summary
pub const SUMMARY_FILE_SUFFIX: &str = "-summary.json";

/// Points between progress bar refreshes while writing
pub const PROGRESS_REFRESH_INTERVAL: usize = 10_000;

/// Pick the scale exponent for a dimensionality from a (high, low) pair.
pub fn scale_exponent(dimensions: usize, high: f64, low: f64) -> f64 {
    if dimensions > SCALE_DIMENSION_THRESHOLD {
        high
    } else {
        low
    }
}
