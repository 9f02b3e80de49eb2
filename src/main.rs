// src/main.rs

// Declare modules
pub mod codec;
pub mod config;
pub mod generate;
pub mod grid;
pub mod pattern;
pub mod render;
pub mod storage;

use anyhow::Context;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::CONFIG;

/// Main entry point for the `gridcode` tool.
///
/// Modes: `encode` generates a random grid and writes its encoded stream;
/// `decode` reads the stream back and writes a PNG raster of the decoded
/// grid; with no argument both run in sequence.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    match std::env::args().nth(1).as_deref() {
        Some("encode") => encode_to_file()?,
        Some("decode") => decode_to_image()?,
        None => {
            encode_to_file()?;
            decode_to_image()?;
        }
        Some(other) => {
            anyhow::bail!("unknown mode '{}'; expected 'encode' or 'decode'", other)
        }
    }
    Ok(())
}

/// Generates a grid, encodes it, and writes the stream to disk.
fn encode_to_file() -> anyhow::Result<()> {
    let config = &*CONFIG;

    let mut rng = match config.generator.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = generate::generate_grid(&mut rng, config.generator.density);
    info!(
        "generated grid: {} active cells at density {}",
        grid.population_count(),
        config.generator.density
    );

    let stream = codec::encode(&grid);
    storage::write_stream(&config.files.encoded_path, &stream).with_context(|| {
        format!(
            "failed to write encoded stream to {}",
            config.files.encoded_path.display()
        )
    })?;
    info!(
        "wrote {} bytes to {}",
        stream.len(),
        config.files.encoded_path.display()
    );
    Ok(())
}

/// Reads an encoded stream, decodes it, and writes the PNG raster.
fn decode_to_image() -> anyhow::Result<()> {
    let config = &*CONFIG;

    let stream = storage::read_stream(&config.files.encoded_path).with_context(|| {
        format!(
            "failed to read encoded stream from {}",
            config.files.encoded_path.display()
        )
    })?;
    let grid = codec::decode(&stream);
    info!("decoded grid: {} active cells", grid.population_count());

    render::save_png(&grid, &config.files.image_path, config.render.scale).with_context(|| {
        format!(
            "failed to write raster to {}",
            config.files.image_path.display()
        )
    })?;
    info!("wrote raster to {}", config.files.image_path.display());
    Ok(())
}
