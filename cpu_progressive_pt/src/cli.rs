use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use progressive_common::parameters::{SamplingParameters, MAX_BOUNCES, SPP};
use progressive_common::scene::SceneParameters;
use progressive_common::Result;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Progressive CPU path tracer: renders a random sphere field under a sky
/// and accumulates frames into one converged image.
#[derive(Parser, Debug)]
#[command(name = "cpu_progressive_pt")]
pub struct Args {
    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 540)]
    pub height: u32,

    /// Frames to accumulate (one sample per pixel each)
    #[arg(long, short = 'f', default_value_t = SPP)]
    pub frames: u32,

    /// Maximum path segments per sample
    #[arg(long, short = 'b', default_value_t = MAX_BOUNCES)]
    pub max_bounces: u32,

    /// Seed for scene placement and per-frame noise
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Sphere placement attempts; overlapping candidates are dropped
    #[arg(long, default_value_t = 100)]
    pub spheres: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub vfov: f32,

    /// Disable sub-pixel jitter between accumulated frames
    #[arg(long)]
    pub no_jitter: bool,

    /// Output file (.png for 8-bit sRGB, .exr for linear HDR)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}

impl Args {
    pub fn sampling_parameters(&self) -> Result<SamplingParameters> {
        SamplingParameters::new(self.frames, self.max_bounces, !self.no_jitter)
    }

    pub fn scene_parameters(&self) -> SceneParameters {
        SceneParameters { spheres_max: self.spheres, ..Default::default() }
    }
}
