/// Run summary written alongside palette files.
use crate::bounds::PaletteBounds;
use crate::coordinates::{PaletteConfig, PaletteMap};
use crate::depth::{DepthAssigner, DepthTrack};
use crate::projection::Projection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Description of one projection run.
#[derive(Debug, Serialize, Deserialize)]
pub struct PaletteSummary {
    pub projection: Projection,
    pub config: PaletteConfig,
    /// Points in the input collection.
    pub point_count: usize,
    /// Points that received a coordinate.
    pub palette_points: usize,
    pub dimensions: usize,
    pub natural_layers: usize,
    pub depth_track: DepthTrack,
    /// Points per depth bucket on the count track.
    pub points_per_layer: Option<f64>,
    /// Distinct depth values present in the palette.
    pub depth_levels: usize,
    /// Absent when no point was layered.
    pub bounds: Option<PaletteBounds>,
    /// Width of the palette along u, v and w.
    pub extent: Option<(f64, f64, f64)>,
    /// Palette file the summary describes.
    pub palette_file: String,
}

impl PaletteSummary {
    pub fn new(
        projection: Projection,
        config: PaletteConfig,
        points: &[Vec<f64>],
        layers: &[Vec<usize>],
        palette: &PaletteMap,
        palette_file: &Path,
    ) -> Self {
        let bounds = PaletteBounds::from_palette(palette);
        let bounds = (!bounds.is_empty()).then_some(bounds);
        let depth = DepthAssigner::new(layers.len(), config.n_layers, points.len(), config.z_gap);
        let depth_levels = palette
            .values()
            .map(|coord| coord.w.to_bits())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            projection,
            config,
            point_count: points.len(),
            palette_points: palette.len(),
            dimensions: points.first().map_or(0, Vec::len),
            natural_layers: layers.len(),
            depth_track: depth.track(),
            points_per_layer: (depth.track() == DepthTrack::Count)
                .then(|| depth.points_per_layer()),
            depth_levels,
            extent: bounds.as_ref().map(PaletteBounds::dimensions),
            bounds,
            palette_file: palette_file.display().to_string(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
