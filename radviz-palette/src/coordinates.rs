/// Palette coordinate types and run configuration
use crate::constants::DEFAULT_Z_GAP;
use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planar RadViz position plus stacking depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteCoord {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl PaletteCoord {
    pub fn new(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.u, self.v, self.w]
    }
}

/// Palette keyed by point index; iteration is in ascending index order.
pub type PaletteMap = BTreeMap<usize, PaletteCoord>;

/// Depth layout parameters for one projection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of depth buckets requested; 0 keeps one level per natural layer.
    pub n_layers: usize,
    /// Spacing between successive depth levels.
    pub z_gap: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            n_layers: 0,
            z_gap: DEFAULT_Z_GAP,
        }
    }
}

impl PaletteConfig {
    pub fn new(n_layers: usize, z_gap: f64) -> Self {
        Self { n_layers, z_gap }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.z_gap.is_finite() {
            return Err(PaletteError::InvalidZGap(self.z_gap));
        }
        Ok(())
    }
}
