//! RadViz projection of layered objective vectors onto palette coordinates.
//!
//! All three projections share one walk over the layers: preprocess the
//! points, weight each point against the unit-circle axes, then attach a
//! depth from [`DepthAssigner`]. They differ only in the preprocessing rule
//! and in whether the weighted sum is divided by the coordinate sum.

use crate::axes::axis_directions;
use crate::constants::{
    LOGISTIC_SHARPNESS, NORMALIZED_SCALE_HIGH, NORMALIZED_SCALE_LOW, REVERSE_POLAR_SCALE_HIGH,
    REVERSE_POLAR_SCALE_LOW, scale_exponent,
};
use crate::coordinates::{PaletteConfig, PaletteCoord, PaletteMap};
use crate::depth::DepthAssigner;
use crate::error::{PaletteError, Result};
use crate::preprocess::{logistic_map, reverse_normalize, scale};
use crate::summation::fsum;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Projection variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Projection {
    /// Classic RadViz: `f^p` weights divided by their sum.
    #[value(name = "default")]
    #[serde(rename = "default")]
    Normalized,
    /// `(1 - f)^p` weights without normalisation.
    #[value(name = "polar")]
    #[serde(rename = "polar")]
    ReversePolar,
    /// Logistic-stretched weights divided by their sum.
    #[value(name = "logistic")]
    #[serde(rename = "logistic")]
    Logistic,
}

impl Projection {
    pub const ALL: [Projection; 3] = [
        Projection::Normalized,
        Projection::ReversePolar,
        Projection::Logistic,
    ];

    /// Name used on the command line and in summaries.
    pub fn name(self) -> &'static str {
        match self {
            Projection::Normalized => "default",
            Projection::ReversePolar => "polar",
            Projection::Logistic => "logistic",
        }
    }

    /// Suffix of the palette file written for this variant.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Projection::Normalized => "-palette.out",
            Projection::ReversePolar => "-palette-polar.out",
            Projection::Logistic => "-palette-logistic.out",
        }
    }

    /// Whether weighted sums are divided by the coordinate sum.
    fn normalizes(self) -> bool {
        !matches!(self, Projection::ReversePolar)
    }

    /// Weights fed to the axis sum for each point.
    fn preprocess(self, points: &[Vec<f64>], dimensions: usize) -> Result<Vec<Vec<f64>>> {
        match self {
            Projection::Normalized => scale(
                points,
                scale_exponent(dimensions, NORMALIZED_SCALE_HIGH, NORMALIZED_SCALE_LOW),
            ),
            Projection::ReversePolar => scale(
                &reverse_normalize(points),
                scale_exponent(dimensions, REVERSE_POLAR_SCALE_HIGH, REVERSE_POLAR_SCALE_LOW),
            ),
            Projection::Logistic => Ok(logistic_map(points, LOGISTIC_SHARPNESS)),
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classic normalised RadViz with `p = 2` for m > 3, else `p = 1`.
pub fn palettize_normalized(
    points: &[Vec<f64>],
    layers: &[Vec<usize>],
    config: &PaletteConfig,
) -> Result<PaletteMap> {
    palettize(Projection::Normalized, points, layers, config)
}

/// Reverse RadViz on `(1 - f)^p` with `p = 3` for m > 3, else `p = 2`,
/// leaving the weighted sums unnormalised.
pub fn palettize_reverse_polar(
    points: &[Vec<f64>],
    layers: &[Vec<usize>],
    config: &PaletteConfig,
) -> Result<PaletteMap> {
    palettize(Projection::ReversePolar, points, layers, config)
}

/// Normalised RadViz on logistic-remapped values.
pub fn palettize_logistic(
    points: &[Vec<f64>],
    layers: &[Vec<usize>],
    config: &PaletteConfig,
) -> Result<PaletteMap> {
    palettize(Projection::Logistic, points, layers, config)
}

/// Project every layered point with the given variant.
///
/// An index listed in more than one layer keeps the coordinate from its last
/// occurrence; callers should pass disjoint layers.
pub fn palettize(
    projection: Projection,
    points: &[Vec<f64>],
    layers: &[Vec<usize>],
    config: &PaletteConfig,
) -> Result<PaletteMap> {
    let dimensions = validate_input(points, layers, config)?;

    let weights = projection.preprocess(points, dimensions)?;
    let axes = axis_directions(dimensions);
    let mut depth = DepthAssigner::new(layers.len(), config.n_layers, points.len(), config.z_gap);

    debug!(
        %projection,
        points = points.len(),
        dimensions,
        layers = layers.len(),
        n_layers = config.n_layers,
        z_gap = config.z_gap,
        track = ?depth.track(),
        points_per_layer = depth.points_per_layer(),
        "Projecting points"
    );

    let mut palette = PaletteMap::new();
    for layer in layers {
        for &index in layer {
            let (u, v) = weigh(index, &weights[index], &axes, projection.normalizes())?;
            palette.insert(index, PaletteCoord::new(u, v, depth.next_point()));
        }
        depth.finish_layer();
    }

    Ok(palette)
}

/// Axis-weighted sum of one point. A non-positive weight sum under
/// normalisation maps to the origin.
///
/// Fails when a weight or one of the sums leaves the double range, which
/// finite but huge objective values can cause.
fn weigh(index: usize, f: &[f64], axes: &[(f64, f64)], normalize: bool) -> Result<(f64, f64)> {
    if f.iter().any(|w| !w.is_finite()) {
        return Err(PaletteError::NumericOverflow { index });
    }

    let u = exact_sum(index, f.iter().zip(axes).map(|(&fi, &(c, _))| fi * c))?;
    let v = exact_sum(index, f.iter().zip(axes).map(|(&fi, &(_, s))| fi * s))?;
    if !normalize {
        return Ok((u, v));
    }

    let total = exact_sum(index, f.iter().copied())?;
    if total > 0.0 {
        Ok((u / total, v / total))
    } else {
        Ok((0.0, 0.0))
    }
}

fn exact_sum(index: usize, terms: impl IntoIterator<Item = f64>) -> Result<f64> {
    fsum(terms).ok_or(PaletteError::NumericOverflow { index })
}

/// Reject malformed input before any arithmetic; returns the dimensionality.
fn validate_input(
    points: &[Vec<f64>],
    layers: &[Vec<usize>],
    config: &PaletteConfig,
) -> Result<usize> {
    config.validate()?;

    let dimensions = points.first().ok_or(PaletteError::EmptyPoints)?.len();
    if dimensions < 2 {
        return Err(PaletteError::DimensionTooSmall { dimensions });
    }

    for (index, point) in points.iter().enumerate() {
        if point.len() != dimensions {
            return Err(PaletteError::RaggedPoint {
                index,
                expected: dimensions,
                actual: point.len(),
            });
        }
        if let Some((dimension, &value)) = point.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PaletteError::NonFiniteCoordinate {
                index,
                dimension,
                value,
            });
        }
    }

    let mut seen = HashSet::new();
    for (layer, members) in layers.iter().enumerate() {
        for &index in members {
            if index >= points.len() {
                return Err(PaletteError::LayerIndexOutOfRange {
                    layer,
                    index,
                    point_count: points.len(),
                });
            }
            if !seen.insert(index) {
                warn!(index, layer, "Point listed in more than one layer, last occurrence wins");
            }
        }
    }

    Ok(dimensions)
}
