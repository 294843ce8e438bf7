use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line.
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

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Render two diffuse spheres under a sky with a CPU ray tracer")]
pub struct Args {
    /// Output image (.ppm writes plain-text PPM, anything else goes through the image crate)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// JSON file with render settings; command line flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub vfov: f64,

    /// Seed for the random generator; renders with the same seed are identical
    #[arg(long)]
    pub seed: Option<u64>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        assert_eq!(args.output, PathBuf::from("image.ppm"));
        assert!(args.config.is_none());
        assert!(args.width.is_none() && args.seed.is_none());
        assert_eq!(args.vfov, 90.0);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lumen", "-o", "out.png", "--width", "200", "-s", "8", "--seed", "3",
            "--log-level", "debug",
        ]);
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.width, Some(200));
        assert_eq!(args.samples_per_pixel, Some(8));
        assert_eq!(args.seed, Some(3));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
