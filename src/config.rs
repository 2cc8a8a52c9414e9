// Command line + fixed window geometry.

use crate::noise::{NoiseSource, UniformNoise, ValueNoise};
use clap::{Parser, ValueEnum};
use std::time::Duration;

pub const WIDTH: usize = 1600;      // window width in pixels
pub const HEIGHT: usize = 1200;     // window height in pixels
pub const BLOCK_SIZE: usize = 10;   // pixels per cell side
pub const DEFAULT_SCALE: f64 = 50.0;
pub const TITLE: &str = "Block Terrain";

/// Height-field terrain drawn as coloured blocks.
///
/// Keys: Enter starts, P pauses/resumes, Space or R regenerates, Esc quits.
#[derive(Parser, Debug)]
#[command(name = "block-terrain")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)] // `-4` is a scale for parse_scale to reject, not a flag
pub struct Cli {
    /// Noise scale (positive). Invalid values fall back to 50.0 with a warning.
    pub scale: Option<String>,

    /// Random seed for reproducible terrain. Drawn at random when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Noise source. `value` is coherent noise and changes the look of the terrain.
    #[arg(long, value_enum, default_value_t = NoiseKind::Uniform)]
    pub noise: NoiseKind,

    /// Start paused; press Enter to begin drawing.
    #[arg(long)]
    pub paused: bool,

    /// Delay between frames in milliseconds.
    #[arg(long, default_value = "16")]
    pub frame_ms: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NoiseKind {
    /// Uniform random per sample, ignores position.
    Uniform,
    /// Smooth lattice value noise.
    Value,
}

impl NoiseKind {
    pub fn build(self, seed: u64) -> Box<dyn NoiseSource> {
        match self {
            NoiseKind::Uniform => Box::new(UniformNoise::new(seed)),
            NoiseKind::Value => Box::new(ValueNoise::new(seed)),
        }
    }
}

/// Everything the loop needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub scale: f64,
    pub seed: u64,
    pub noise: NoiseKind,
    pub start_paused: bool,
    pub frame_delay: Duration,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let scale = match cli.scale.as_deref() {
            None => DEFAULT_SCALE,
            Some(raw) => parse_scale(raw).unwrap_or_else(|| {
                eprintln!("warning: invalid scale {raw:?}, using {DEFAULT_SCALE}");
                DEFAULT_SCALE
            }),
        };

        Self {
            scale,
            seed: cli.seed.unwrap_or_else(rand::random),
            noise: cli.noise,
            start_paused: cli.paused,
            frame_delay: Duration::from_millis(cli.frame_ms),
        }
    }

    /// Grid size in cells for the fixed window.
    pub fn grid_size(&self) -> (usize, usize) {
        (WIDTH / BLOCK_SIZE, HEIGHT / BLOCK_SIZE)
    }
}

/// A usable scale: parses as a float, finite, strictly positive.
pub fn parse_scale(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s > 0.0)
}
