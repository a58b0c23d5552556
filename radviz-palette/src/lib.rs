//! RadViz palette coordinates for layered multi-objective data.
//!
//! Points are projected onto the plane against unit-circle axes and stacked
//! along a depth axis by layer. See [`palettize`] for the shared pipeline and
//! [`palettize_normalized`], [`palettize_reverse_polar`] and
//! [`palettize_logistic`] for the three variants.

pub mod axes;
pub mod bounds;
pub mod constants;
pub mod converter;
pub mod coordinates;
pub mod depth;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod preprocess;
pub mod projection;
pub mod summation;
pub mod writer;

pub use bounds::PaletteBounds;
pub use converter::PaletteConverter;
pub use coordinates::{PaletteConfig, PaletteCoord, PaletteMap};
pub use depth::{DepthAssigner, DepthTrack};
pub use error::{PaletteError, Result};
pub use projection::{
    Projection, palettize, palettize_logistic, palettize_normalized, palettize_reverse_polar,
};
