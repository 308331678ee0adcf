use anyhow::{Context, Result};
use clap::Parser;
use kle2matrix::{convert_kle_to_netlist, kle_core::PinMap, BoardConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Keyboard layout to key matrix netlist converter",
    long_about = None
)]
struct Args {
    /// Input layout JSON (keyboard-layout-editor raw data)
    input: PathBuf,

    /// Output netlist path (defaults to input with .netlist.json extension)
    output: Option<PathBuf>,

    /// Board config TOML with [matrix] and optional [controller] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Matrix name, overrides the config
    #[arg(short, long)]
    name: Option<String>,

    /// Comma-separated row pins, overrides the config
    #[arg(long, value_delimiter = ',')]
    rows: Option<Vec<String>>,

    /// Comma-separated column pins, overrides the config
    #[arg(long, value_delimiter = ',')]
    cols: Option<Vec<String>>,

    /// Insert a diode per key
    #[arg(short, long)]
    diodes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut board = match &args.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("Failed to load board config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(name) = args.name {
        board.matrix.name = name;
    }
    if let Some(rows) = args.rows {
        board.matrix.rows = PinMap::from(rows);
    }
    if let Some(cols) = args.cols {
        board.matrix.cols = PinMap::from(cols);
    }
    if args.diodes {
        board.matrix.diodes = true;
    }

    // Determine output path
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("netlist.json");
        path
    });

    log::info!("Converting {} to {}", args.input.display(), output_path.display());

    let netlist = convert_kle_to_netlist(&args.input, &output_path, &board)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if args.verbose {
        println!(
            "Wrote {} keys, {} traces, {} components to {}",
            netlist.keys.len(),
            netlist.traces.len(),
            netlist.components.len(),
            output_path.display()
        );
    }

    Ok(())
}
