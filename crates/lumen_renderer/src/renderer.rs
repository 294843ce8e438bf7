//! Core render loop.
//!
//! Implements the per-pixel sampling pipeline:
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit quantization
//! - Fixed scan order hand-off to a [`PixelSink`]

use crate::error::{RenderError, RenderResult};
use crate::tracer::ray_color;
use crate::{Camera, Color, Hittable, PixelSink};
use log::{debug, info};
use lumen_math::random::gen_f64;
use lumen_math::Interval;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Largest channel value before quantizing, so `256 * x` stays below 256.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Image height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

impl RenderConfig {
    /// Default quality settings at `width` pixels wide, with the height
    /// derived from `aspect_ratio` (width over height) and rounded down.
    pub fn from_aspect(width: u32, aspect_ratio: f64) -> Self {
        Self {
            image_width: width,
            image_height: (width as f64 / aspect_ratio) as u32,
            ..Self::default()
        }
    }

    /// Image width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }

    /// Reject settings the sampling loop cannot work with.
    ///
    /// Viewport coordinates divide by `width - 1` and `height - 1`, so both
    /// dimensions need at least two pixels.
    pub fn validate(&self) -> RenderResult<()> {
        if self.image_width < 2 || self.image_height < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidConfig(
                "max_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` counts from the lower-left corner of the image. Each sample is
/// jittered within the pixel and the result is the average over all samples.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let u_scale = (config.image_width - 1) as f64;
    let v_scale = (config.image_height - 1) as f64;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f64 + gen_f64(rng)) / u_scale;
        let v = (j as f64 + gen_f64(rng)) / v_scale;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Render the entire scene into `sink`.
///
/// Rows go from the top of the image (`j = height - 1`) down to `j = 0`,
/// pixels within a row left to right.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    sink: &mut dyn PixelSink,
    rng: &mut dyn RngCore,
) -> RenderResult<()> {
    config.validate()?;

    info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.image_width, config.image_height, config.samples_per_pixel, config.max_depth
    );
    let start = Instant::now();

    sink.begin(config.image_width, config.image_height)?;

    for j in (0..config.image_height).rev() {
        for i in 0..config.image_width {
            let color = render_pixel(camera, world, i, j, config, rng);
            sink.write_pixel(color_to_rgb(color))?;
        }
        debug!("Scanlines remaining: {}", j);
    }

    sink.finish()?;
    info!("Done in {:?}", start.elapsed());

    Ok(())
}
