/// RadViz palette generator entry point
use clap::{Parser, ValueEnum};
use radviz_palette::constants::DEFAULT_Z_GAP;
use radviz_palette::loader::lattice_points;
use radviz_palette::writer::write_palette;
use radviz_palette::{PaletteConfig, PaletteConverter, Projection, palettize};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Normalised RadViz
    Default,
    /// Reverse RadViz without normalisation
    Polar,
    /// Normalised RadViz on logistic-stretched values
    Logistic,
    /// All three projections in parallel
    All,
}

impl Mode {
    fn projection(self) -> Option<Projection> {
        match self {
            Mode::Default => Some(Projection::Normalized),
            Mode::Polar => Some(Projection::ReversePolar),
            Mode::Logistic => Some(Projection::Logistic),
            Mode::All => None,
        }
    }

    /// The lattice demo prints one palette to stdout, so it needs one variant.
    fn lattice_projection(self) -> Result<Projection, String> {
        self.projection()
            .ok_or_else(|| "--demo-lattice needs a single mode, not `all`".to_string())
    }
}

/// Compute layered RadViz palette coordinates for multi-objective data.
#[derive(Parser, Debug)]
#[command(name = "radviz-palette")]
struct Args {
    /// Objective vectors, one point per line. Layers are read from
    /// `<stem>-layers.out` unless --layers is given.
    #[arg(required_unless_present = "demo_lattice")]
    data_file: Option<PathBuf>,

    /// Depth buckets to produce; 0 keeps one level per layer.
    #[arg(default_value_t = 0)]
    n_layers: usize,

    #[arg(value_enum, default_value_t = Mode::Default)]
    mode: Mode,

    /// Spacing between depth levels.
    #[arg(long, default_value_t = DEFAULT_Z_GAP, allow_negative_numbers = true)]
    z_gap: f64,

    /// Layer file to use instead of the derived one.
    #[arg(long)]
    layers: Option<PathBuf>,

    /// Prefix for generated files (defaults to the data file stem).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Swap two objective columns (0-based) before projecting.
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    swap_columns: Option<Vec<usize>>,

    /// Write a JSON run summary next to each palette file.
    #[arg(long)]
    summary: bool,

    /// Print the {0, 0.5, 1}^3 lattice as one layer to stdout and exit.
    #[arg(long)]
    demo_lattice: bool,

    /// Increase log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose > 0 { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.demo_lattice {
        return print_lattice(args.mode.lattice_projection()?);
    }

    let Some(data_file) = args.data_file else {
        return Err("missing data file".into());
    };
    let config = PaletteConfig::new(args.n_layers, args.z_gap);

    let mut converter = match &args.layers {
        Some(layer_file) => PaletteConverter::with_layer_file(&data_file, layer_file, config)?,
        None => PaletteConverter::new(&data_file, config)?,
    };
    if let Some(stem) = &args.output {
        converter = converter.with_output_stem(stem);
    }
    if let Some(columns) = &args.swap_columns {
        converter = converter.with_swapped_columns((columns[0], columns[1]))?;
    }
    let converter = converter.with_summary(args.summary);

    match args.mode.projection() {
        Some(projection) => {
            converter.convert(projection)?;
        }
        None => {
            let written = converter.convert_all()?;
            info!(files = written.len(), "All projections complete");
        }
    }

    Ok(())
}

/// Project the unit lattice onto a single flat layer.
fn print_lattice(projection: Projection) -> Result<(), Box<dyn std::error::Error>> {
    let points = lattice_points(&[0.0, 0.5, 1.0], 3);
    let layers = vec![(0..points.len()).collect::<Vec<_>>()];
    let palette = palettize(projection, &points, &layers, &PaletteConfig::new(0, 0.0))?;

    let stdout = std::io::stdout();
    write_palette(BufWriter::new(stdout.lock()), &palette, |_| {})?;
    Ok(())
}
