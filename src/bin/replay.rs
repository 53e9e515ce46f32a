//! Replays a capture of `WOG` lines (or simulated data) through the chart
//! pipeline and prints both polylines as a character grid, standing in for
//! a GUI renderer.
//!
//! Usage: `wogplot-replay [CAPTURE|--sim] [CONFIG.json]`

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use wogplot::{
    spawn_reader, ChartConfig, LineSource, ProjectedFrame, SampleSource, SharedSampleBuffer,
    SimulatedSource,
};

const GRID_WIDTH: usize = 80;
const GRID_HEIGHT: usize = 20;
const SIM_FRAMES: usize = 250;

fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "--sim".to_owned());
    let config = match args.next() {
        Some(path) => load_config(&path)?,
        None => ChartConfig::default(),
    };
    let buffer = SharedSampleBuffer::new(config.capacity)
        .context("invalid chart configuration")?;

    if input == "--sim" {
        let mut source = SimulatedSource::new(2.0);
        for _ in 0..SIM_FRAMES {
            if let Some(frame) = source.next_sample()? {
                buffer.append(frame.x, frame.y);
            }
        }
        println!("simulated {SIM_FRAMES} frames");
    } else {
        let file =
            File::open(&input).with_context(|| format!("failed to open capture {input}"))?;
        let source = LineSource::new(BufReader::new(file));
        let ingested = spawn_reader(source, buffer.clone())
            .join()
            .map_err(|_| anyhow::anyhow!("reader thread panicked"))?
            .context("capture replay failed")?;
        println!("replayed {ingested} frames from {input}");
    }

    let frame = buffer.project(GRID_WIDTH as f64, GRID_HEIGHT as f64);
    print!("{}", render_grid(&frame));
    println!("scale: {:.3}", buffer.scale());
    Ok(())
}

fn load_config(path: &str) -> Result<ChartConfig> {
    let file = File::open(path).with_context(|| format!("failed to open config {path}"))?;
    serde_json::from_reader(file).with_context(|| format!("failed to parse config {path}"))
}

/// Rasterizes the two polylines onto a text grid, channel A as `x` and
/// channel B as `y`, with A drawn last where they overlap.
fn render_grid(frame: &ProjectedFrame) -> String {
    let mut grid = vec![[' '; GRID_WIDTH]; GRID_HEIGHT];
    let mut plot = |points: &[[f64; 2]], glyph: char| {
        for point in points {
            let col = point[0] as usize;
            let row = point[1] as usize;
            if row < GRID_HEIGHT && col < GRID_WIDTH {
                grid[row][col] = glyph;
            }
        }
    };
    plot(&frame.channel_b, 'y');
    plot(&frame.channel_a, 'x');
    let mut out = String::with_capacity(GRID_HEIGHT * (GRID_WIDTH + 1));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
