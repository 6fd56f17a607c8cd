use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use deep_mandelbrot::{Viewport, render_viewport, write_raw_rgb};
use log::info;

/// Render the Mandelbrot set at extended precision into a raw RGB file
/// (`width * height * 3` bytes, row-major, no header).
#[derive(Debug, Parser)]
#[command(name = "deep-mandelbrot", version)]
struct Args {
    #[arg(long, default_value_t = Viewport::default().width())]
    width: u32,

    #[arg(long, default_value_t = Viewport::default().height())]
    height: u32,

    #[arg(long, default_value_t = Viewport::default().max_iterations())]
    max_iterations: u32,

    #[arg(long, allow_negative_numbers = true, default_value_t = Viewport::default().center_real())]
    center_real: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = Viewport::default().center_imag())]
    center_imag: f64,

    #[arg(long, default_value_t = Viewport::default().zoom())]
    zoom: f64,

    #[arg(long, short, default_value = "output/mandelbrot.rgb")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let viewport = Viewport::new(
        args.width,
        args.height,
        args.max_iterations,
        args.center_real,
        args.center_imag,
        args.zoom,
    )?;

    info!("Rendering Mandelbrot set...");
    info!("Image size: {}x{}", viewport.width(), viewport.height());
    info!("Max iterations: {}", viewport.max_iterations());
    info!(
        "Center: ({}, {}), zoom: {}",
        viewport.center_real(),
        viewport.center_imag(),
        viewport.zoom()
    );
    info!("Threads: {}", rayon::current_num_threads());

    let start = Instant::now();
    let pixel_buffer = render_viewport(viewport)?;
    info!("Duration:   {:?}", start.elapsed());

    write_raw_rgb(&pixel_buffer, &args.output)?;
    info!("Saved to {}", args.output.display());

    Ok(())
}
