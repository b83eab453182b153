//! # Layout Demo
//!
//! Generates a layout on a synthetic island and prints a summary.
//!
//! Run with: cargo run --bin layout_demo -- --seed 42 --save out/map.toml
//!
//! Pipeline progress is logged at `info`; set `RUST_LOG=debug` to see skips.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use tidewater::procedural::Heightmap;
use tidewater::{generate_layout, MapConfig};

/// Command line options.
#[derive(Parser, Debug)]
#[command(name = "layout_demo")]
#[command(about = "Generate a Tidewater island layout and print a summary")]
struct Args {
    /// Map config to load (defaults are used if the file is missing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed override
    #[arg(short, long)]
    seed: Option<u64>,

    /// Island side length in grid cells
    #[arg(long, default_value = "256")]
    size: usize,

    /// Write the config with the seed used to this path
    #[arg(long)]
    save: Option<PathBuf>,
}

/// Round island with a ridge, sloping into deep water.
#[allow(clippy::cast_precision_loss)]
fn synthetic_island(size: usize) -> Heightmap {
    let centre = size as f64 / 2.0;
    let scale = size as f64 / 256.0;
    Heightmap::from_fn(size, size, |c| {
        let dx = (c.x as f64 - centre) / scale;
        let dz = (c.z as f64 - centre) / scale;
        let distance = (dx * dx + dz * dz).sqrt();
        let ridge = (dx * 0.05).sin() * (dz * 0.07).cos() * 12.0;
        90.0 - distance * 1.1 + ridge
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    println!("═══════════════════════════════════════════════════════════════════");
    println!("                    TIDEWATER LAYOUT DEMO");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    let mut config = match &args.config {
        Some(path) => match MapConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("  Config:   {err}");
                std::process::exit(1);
            }
        },
        None => MapConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let layout = match generate_layout(synthetic_island(args.size), &config) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("  Generation failed: {err}");
            std::process::exit(1);
        }
    };

    println!("  Map:      {0}x{0}", args.size);
    println!("  Seed:     {}", layout.seed);
    println!("  Objects:  {}", layout.records.len());
    if let Some(anchor) = layout.anchor() {
        println!(
            "  Anchor:   {} at {} facing {:.1}°",
            anchor.object_type,
            anchor.grid_coord(),
            anchor.rotation
        );
    }
    println!();

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &layout.records {
        *by_type.entry(record.object_type.as_str()).or_default() += 1;
    }
    for (object_type, count) in &by_type {
        println!("  {object_type:<20} {count:>4}");
    }
    println!();

    for route in &layout.patrol_routes {
        println!(
            "  Route {}: {} points, {} flyers assigned",
            route.name,
            route.points.len(),
            route.assigned.len()
        );
    }

    if let Some(path) = &args.save {
        match layout.config.save(path) {
            Ok(()) => println!("  Config saved to {}", path.display()),
            Err(err) => {
                eprintln!("  Could not save config: {err}");
                std::process::exit(1);
            }
        }
    }
}
