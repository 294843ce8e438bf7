//! Shading: the color carried back along a single camera ray.
//!
//! One implicit material and one implicit light:
//! - every surface scatters diffusely and keeps half the incoming light
//! - rays that escape the scene pick up a white-to-blue sky gradient

use crate::{Color, Hittable, Ray};
use lumen_math::random::random_unit_vector;
use lumen_math::{Interval, Vec3Ext};
use rand::RngCore;

/// Fraction of light kept at each bounce.
pub const ALBEDO: f64 = 0.5;

/// Minimum hit distance. Keeps scattered rays from re-hitting the surface
/// they start on due to floating point error (shadow acne).
pub const T_MIN: f64 = 0.001;

const SKY_HORIZON: Color = Color::new(1.0, 1.0, 1.0);
const SKY_ZENITH: Color = Color::new(0.5, 0.7, 1.0);

/// Compute the color seen by a ray.
///
/// Follows the path for at most `depth` bounces; a path still bouncing when
/// the budget runs out contributes black. Equivalent to the recursive
/// formulation `0.5 * ray_color(scattered, depth - 1)` but runs in a loop
/// with the attenuation accumulated up front.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut attenuation: f64 = 1.0;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::new(T_MIN, f64::INFINITY)) else {
            return attenuation * sky_color(&ray);
        };

        // Aim at a random point on the unit sphere tangent to the hit point
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }

        ray = Ray::new(rec.p, scatter_direction);
        attenuation *= ALBEDO;
    }

    Color::ZERO
}

/// Sky gradient: white at the horizon blending to blue at the zenith.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction().unit();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * SKY_HORIZON + a * SKY_ZENITH
}
