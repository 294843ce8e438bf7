use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lumen_renderer::{
    render, Camera, ImageSink, PpmSink, RenderConfig, Scene, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::path::Path;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let config = load_config(&args)?;
    let camera = Camera::new(config.aspect_ratio(), args.vfov);
    let world = build_scene();
    info!("Scene has {} objects", world.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if is_ppm(&args.output) {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create {}", args.output.display()))?;
        let mut sink = PpmSink::new(file);
        render(&camera, &world, &config, &mut sink, &mut rng)?;
        sink.into_inner()?;
    } else {
        let mut sink = ImageSink::new();
        render(&camera, &world, &config, &mut sink, &mut rng)?;
        sink.save(&args.output)
            .with_context(|| format!("Failed to save {}", args.output.display()))?;
    }

    info!("Saved to {}", args.output.display());
    Ok(())
}

/// Render settings from the optional JSON file, then command line overrides.
fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        // Keep the aspect ratio unless a height is given too
        let aspect = config.aspect_ratio();
        config = RenderConfig {
            image_width: width,
            image_height: (width as f64 / aspect) as u32,
            ..config
        };
    }
    if let Some(height) = args.height {
        config.image_height = height;
    }
    if let Some(samples) = args.samples_per_pixel {
        config.samples_per_pixel = samples;
    }
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }

    config.validate()?;
    Ok(config)
}

/// A small sphere resting on a huge ground sphere.
fn build_scene() -> Scene {
    let mut world = Scene::new();
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0)));
    world
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_override_keeps_aspect() {
        let args = Args::parse_from(["lumen", "--width", "800"]);
        let config = load_config(&args).unwrap();
        assert_eq!((config.image_width, config.image_height), (800, 450));
        assert_eq!(config.samples_per_pixel, 100);
    }

    #[test]
    fn test_explicit_overrides() {
        let args = Args::parse_from([
            "lumen", "--width", "64", "--height", "64", "-s", "4", "--max-depth", "3",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(
            config,
            RenderConfig {
                image_width: 64,
                image_height: 64,
                samples_per_pixel: 4,
                max_depth: 3,
            }
        );
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args::parse_from(["lumen", "-s", "0"]);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::parse_from(["lumen", "--config", "does/not/exist.json"]);
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_is_ppm() {
        assert!(is_ppm(Path::new("image.ppm")));
        assert!(is_ppm(Path::new("out/IMAGE.PPM")));
        assert!(!is_ppm(Path::new("image.png")));
        assert!(!is_ppm(Path::new("image")));
    }

    #[test]
    fn test_build_scene() {
        assert_eq!(build_scene().len(), 2);
    }
}
