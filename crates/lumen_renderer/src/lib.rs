//! Lumen renderer - CPU ray tracing
//!
//! A Monte Carlo ray tracer for static scenes of spheres. Each pixel averages
//! many jittered camera rays; each ray bounces diffusely off surfaces until
//! it escapes to the sky or runs out of depth.
//!
//! Randomness is always passed in as a `rand::RngCore`, so a seeded
//! generator gives byte-identical renders.

mod camera;
mod error;
mod hittable;
mod output;
mod renderer;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, Scene};
pub use output::{ImageSink, PixelSink, PpmSink};
pub use renderer::{color_to_rgb, linear_to_gamma, render, render_pixel, RenderConfig};
pub use sphere::Sphere;
pub use tracer::{ray_color, sky_color, ALBEDO, T_MIN};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Ray, Vec3};
