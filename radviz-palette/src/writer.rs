use crate::constants::OUTPUT_PRECISION;
use crate::coordinates::{PaletteCoord, PaletteMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tab-separated `u v w` with fixed precision.
pub fn format_coord(coord: &PaletteCoord) -> String {
    coord
        .to_array()
        .iter()
        .map(|value| format!("{:.*}", OUTPUT_PRECISION, value))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Write one line per point in ascending index order.
/// `on_line` is called after every line so callers can report progress.
pub fn write_palette<W: Write>(
    mut out: W,
    palette: &PaletteMap,
    mut on_line: impl FnMut(usize),
) -> std::io::Result<()> {
    for (written, coord) in palette.values().enumerate() {
        writeln!(out, "{}", format_coord(coord))?;
        on_line(written + 1);
    }
    out.flush()
}

pub fn save_palette(path: &Path, palette: &PaletteMap) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    write_palette(BufWriter::new(file), palette, |_| {})?;
    Ok(())
}
