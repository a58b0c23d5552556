/// File-level palette conversion: load points and layers, project, write.
use crate::constants::{PROGRESS_REFRESH_INTERVAL, SUMMARY_FILE_SUFFIX};
use crate::coordinates::{PaletteConfig, PaletteMap};
use crate::loader::{layer_file_for, load_layers, load_points, output_stem, with_suffix};
use crate::manifest::PaletteSummary;
use crate::preprocess::swap_columns;
use crate::projection::{Projection, palettize};
use crate::writer::{save_palette, write_palette};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Converts one objective data file (plus its layer file) into palette files.
pub struct PaletteConverter {
    /// Objective vectors, one point per line.
    data_path: PathBuf,
    /// Layer assignments, one layer per line.
    layer_path: PathBuf,
    /// Prefix shared by every generated file.
    output_stem: PathBuf,
    config: PaletteConfig,
    write_summary: bool,
    points: Vec<Vec<f64>>,
    layers: Vec<Vec<usize>>,
}

impl PaletteConverter {
    /// Load the data file and the layer file that sits next to it.
    pub fn new(
        data_path: &Path,
        config: PaletteConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_layer_file(data_path, &layer_file_for(data_path), config)
    }

    /// Load the data file with an explicit layer file.
    pub fn with_layer_file(
        data_path: &Path,
        layer_path: &Path,
        config: PaletteConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if !data_path.exists() {
            return Err(format!("Data file does not exist: {}", data_path.display()).into());
        }
        if !layer_path.exists() {
            return Err(format!("Layer file does not exist: {}", layer_path.display()).into());
        }

        let points = load_points(data_path)?;
        let layers = load_layers(layer_path)?;
        info!(
            points = points.len(),
            layers = layers.len(),
            data = %data_path.display(),
            layer_file = %layer_path.display(),
            "Loaded input"
        );

        Ok(Self {
            data_path: data_path.to_path_buf(),
            layer_path: layer_path.to_path_buf(),
            output_stem: output_stem(data_path),
            config,
            write_summary: false,
            points,
            layers,
        })
    }

    /// Write generated files under a different prefix.
    pub fn with_output_stem(mut self, stem: &Path) -> Self {
        self.output_stem = stem.to_path_buf();
        self
    }

    /// Exchange two objective columns before projecting, changing which
    /// axis each objective is anchored to.
    pub fn with_swapped_columns(
        mut self,
        columns: (usize, usize),
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.points = swap_columns(&self.points, columns)?;
        info!(first = columns.0, second = columns.1, "Swapped objective columns");
        Ok(self)
    }

    /// Also write a JSON summary per palette file.
    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.write_summary = enabled;
        self
    }

    pub fn layer_path(&self) -> &Path {
        &self.layer_path
    }

    /// Palette file written for a projection.
    pub fn palette_path(&self, projection: Projection) -> PathBuf {
        with_suffix(&self.output_stem, projection.file_suffix())
    }

    /// Project with one variant and write its palette file.
    pub fn convert(&self, projection: Projection) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let palette = palettize(projection, &self.points, &self.layers, &self.config)?;
        let path = self.palette_path(projection);

        info!(%projection, path = %path.display(), "Saving palette coordinates");
        self.write_with_progress(&path, &palette)?;
        self.finish(projection, &path, &palette)?;

        Ok(path)
    }

    /// Project with every variant concurrently; each run owns its output file.
    pub fn convert_all(&self) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let results: Vec<Result<PathBuf, String>> = Projection::ALL
            .par_iter()
            .map(|&projection| {
                self.convert_quiet(projection)
                    .map_err(|e| format!("{projection}: {e}"))
            })
            .collect();

        results.into_iter().map(|r| r.map_err(Into::into)).collect()
    }

    /// Same as [`Self::convert`] without a progress bar.
    fn convert_quiet(&self, projection: Projection) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let palette = palettize(projection, &self.points, &self.layers, &self.config)?;
        let path = self.palette_path(projection);

        save_palette(&path, &palette)?;
        info!(%projection, path = %path.display(), "Saved palette coordinates");
        self.finish(projection, &path, &palette)?;

        Ok(path)
    }

    fn write_with_progress(
        &self,
        path: &Path,
        palette: &PaletteMap,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let pb = ProgressBar::new(palette.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}")?
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Writing palette");

        let out = BufWriter::new(File::create(path)?);
        write_palette(out, palette, |written| {
            if written % PROGRESS_REFRESH_INTERVAL == 0 {
                pb.set_position(written as u64);
            }
        })?;

        pb.finish_with_message("Palette written");
        Ok(())
    }

    fn finish(
        &self,
        projection: Projection,
        path: &Path,
        palette: &PaletteMap,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let summary = PaletteSummary::new(
            projection,
            self.config,
            &self.points,
            &self.layers,
            palette,
            path,
        );
        info!(
            %projection,
            data = %self.data_path.display(),
            points = summary.palette_points,
            depth_levels = summary.depth_levels,
            track = ?summary.depth_track,
            extent = ?summary.extent,
            "Projection complete"
        );

        if self.write_summary {
            let summary_path = with_suffix(&path.with_extension(""), SUMMARY_FILE_SUFFIX);
            summary.save(&summary_path)?;
            info!(path = %summary_path.display(), "Saved run summary");
        }
        Ok(())
    }
}
