use anyhow::{Context, Result};
use kle2matrix::kle_core::{parse_layout, Bounds, RawLayout, KEY_UNIT};
use kle2matrix::read_source;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <layout.json>", args[0]);
        std::process::exit(1);
    }

    let input = read_source(Path::new(&args[1]))?;
    let layout = RawLayout::from_json(&input)
        .with_context(|| format!("Failed to parse {}", args[1]))?;
    let keys = parse_layout(&layout);

    println!("Rows: {}", layout.rows.len());
    println!("Keys: {}", keys.len());
    if let Ok(bounds) = Bounds::of(&keys) {
        println!(
            "Size: {:.2} x {:.2} mm ({:.2} x {:.2} u)",
            bounds.width(),
            bounds.height(),
            bounds.width() / KEY_UNIT,
            bounds.height() / KEY_UNIT
        );
    }

    println!("\n=== KEYS ===");
    println!(
        "{:<8} {:>3} {:>3} {:>9} {:>9} {:>7} {:>7} {:>6}  label",
        "name", "row", "col", "x", "y", "w", "h", "rot"
    );
    for key in &keys {
        println!(
            "{:<8} {:>3} {:>3} {:>9.3} {:>9.3} {:>7.2} {:>7.2} {:>6.1}  {:?}",
            key.name,
            key.row,
            key.col,
            key.x,
            key.y,
            key.width,
            key.height,
            key.rotation,
            key.label
        );
    }

    Ok(())
}
