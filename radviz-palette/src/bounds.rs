/// Palette coordinate bounds tracking
use crate::coordinates::{PaletteCoord, PaletteMap};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteBounds {
    pub min_u: f64,
    pub max_u: f64,
    pub min_v: f64,
    pub max_v: f64,
    pub min_w: f64,
    pub max_w: f64,
}

impl Default for PaletteBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_u: f64::INFINITY,
            max_u: f64::NEG_INFINITY,
            min_v: f64::INFINITY,
            max_v: f64::NEG_INFINITY,
            min_w: f64::INFINITY,
            max_w: f64::NEG_INFINITY,
        }
    }

    /// Bounds of every coordinate in a palette
    pub fn from_palette(palette: &PaletteMap) -> Self {
        let mut bounds = Self::new();
        for coord in palette.values() {
            bounds.update(coord);
        }
        bounds
    }

    /// Update bounds with a new coordinate
    pub fn update(&mut self, coord: &PaletteCoord) {
        self.min_u = self.min_u.min(coord.u);
        self.max_u = self.max_u.max(coord.u);
        self.min_v = self.min_v.min(coord.v);
        self.max_v = self.max_v.max(coord.v);
        self.min_w = self.min_w.min(coord.w);
        self.max_w = self.max_w.max(coord.w);
    }

    pub fn is_empty(&self) -> bool {
        self.min_u > self.max_u
    }

    /// Extent along each axis
    pub fn dimensions(&self) -> (f64, f64, f64) {
        (
            self.max_u - self.min_u,
            self.max_v - self.min_v,
            self.max_w - self.min_w,
        )
    }
}
