/// Objective vector preprocessing applied before projection.
/// Every function returns a fresh collection and leaves its input untouched.
use crate::error::{PaletteError, Result};

/// Replace every coordinate `f` with `f^factor`.
///
/// A negative coordinate with a fractional exponent has no real value and is
/// rejected instead of silently turning into NaN.
pub fn scale(points: &[Vec<f64>], factor: f64) -> Result<Vec<Vec<f64>>> {
    let integral = factor.fract() == 0.0;

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            point
                .iter()
                .map(|&f| {
                    if f < 0.0 && !integral {
                        Err(PaletteError::ScaleDomain {
                            index,
                            value: f,
                            factor,
                        })
                    } else {
                        Ok(f.powf(factor))
                    }
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

/// Replace every coordinate `f` with `1 - f`, turning maximisation
/// objectives into minimisation ones. Values are expected in [0, 1] but
/// are not checked.
pub fn reverse_normalize(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    points
        .iter()
        .map(|point| point.iter().map(|&f| 1.0 - f).collect())
        .collect()
}

/// Logistic curve rescaled so that 0 and 1 stay fixed.
#[derive(Debug, Clone, Copy)]
pub struct LogisticRemap {
    sharpness: f64,
    low: f64,
    high: f64,
}

impl LogisticRemap {
    pub fn new(sharpness: f64) -> Self {
        Self {
            sharpness,
            low: 1.0 / (1.0 + (sharpness / 2.0).exp()),
            high: 1.0 / (1.0 + (-sharpness / 2.0).exp()),
        }
    }

    /// σ(-A/2)
    pub fn low(&self) -> f64 {
        self.low
    }

    /// σ(A/2)
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Map one value: `(σ(A·(v − 0.5)) − low) / (high − low)`.
    pub fn apply(&self, v: f64) -> f64 {
        let sigma = 1.0 / (1.0 + (-self.sharpness * (v - 0.5)).exp());
        (sigma - self.low) / (self.high - self.low)
    }
}

/// Stretch values near the 0.5 midpoint to reduce overlap in the plot.
pub fn logistic_map(points: &[Vec<f64>], sharpness: f64) -> Vec<Vec<f64>> {
    let remap = LogisticRemap::new(sharpness);
    points
        .iter()
        .map(|point| point.iter().map(|&v| remap.apply(v)).collect())
        .collect()
}

/// Exchange two objective columns in a copy of the points.
pub fn swap_columns(points: &[Vec<f64>], columns: (usize, usize)) -> Result<Vec<Vec<f64>>> {
    let (a, b) = columns;
    points
        .iter()
        .map(|point| {
            let dimensions = point.len();
            for column in [a, b] {
                if column >= dimensions {
                    return Err(PaletteError::ColumnOutOfRange { column, dimensions });
                }
            }
            let mut swapped = point.clone();
            swapped.swap(a, b);
            Ok(swapped)
        })
        .collect()
}
