/// Text readers for objective vectors and layer assignments.
/// Rows are whitespace separated; blank lines and `#` comments are skipped.
use crate::constants::LAYER_FILE_SUFFIX;
use crate::error::{PaletteError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Parse one numeric row per non-empty line.
fn parse_rows<T, R>(reader: R, source: &str) -> Result<Vec<Vec<T>>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
{
    let mut rows = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = trimmed
            .split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|e| PaletteError::Parse {
                    path: source.to_string(),
                    line: line_idx + 1,
                    message: format!("invalid value '{}': {}", token, e),
                })
            })
            .collect::<Result<Vec<T>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parse objective vectors, one point per line.
pub fn parse_points<R: BufRead>(reader: R, source: &str) -> Result<Vec<Vec<f64>>> {
    parse_rows(reader, source)
}

/// Parse layers, one line of point indices per layer.
pub fn parse_layers<R: BufRead>(reader: R, source: &str) -> Result<Vec<Vec<usize>>> {
    parse_rows(reader, source)
}

/// Open a text file for buffered reading.
fn create_reader(file_path: &Path) -> Result<BufReader<File>> {
    let file = File::open(file_path)?;
    Ok(BufReader::new(file))
}

pub fn load_points(file_path: &Path) -> Result<Vec<Vec<f64>>> {
    parse_points(create_reader(file_path)?, &file_path.display().to_string())
}

pub fn load_layers(file_path: &Path) -> Result<Vec<Vec<usize>>> {
    parse_layers(create_reader(file_path)?, &file_path.display().to_string())
}

/// Data file path with everything from the first `.` of its file name removed.
pub fn output_stem(data_path: &Path) -> PathBuf {
    let name = data_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let stem = name.split('.').next().unwrap_or_default();
    data_path.with_file_name(stem)
}

/// Append a suffix to a stem path, e.g. `run/zdt1` + `-layers.out`.
pub fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Layer file expected next to a data file: `<stem>-layers.out`.
pub fn layer_file_for(data_path: &Path) -> PathBuf {
    with_suffix(&output_stem(data_path), LAYER_FILE_SUFFIX)
}

/// Every point of the grid `levels^dimensions`, last coordinate varying fastest.
pub fn lattice_points(levels: &[f64], dimensions: usize) -> Vec<Vec<f64>> {
    let mut points = vec![Vec::with_capacity(dimensions)];
    for _ in 0..dimensions {
        points = points
            .into_iter()
            .flat_map(|prefix| {
                levels.iter().map(move |&level| {
                    let mut point = prefix.clone();
                    point.push(level);
                    point
                })
            })
            .collect();
    }
    points
}
