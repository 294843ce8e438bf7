//! Camera for ray generation.

use crate::Ray;
use lumen_math::Vec3;

/// Distance from the camera origin to the viewport plane.
const FOCAL_LENGTH: f64 = 1.0;

/// Pinhole camera looking down -Z with +Y up.
///
/// Viewport geometry is derived once at construction and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Camera at the world origin.
    ///
    /// - `aspect_ratio`: viewport width over height
    /// - `vfov`: vertical field of view in degrees
    pub fn new(aspect_ratio: f64, vfov: f64) -> Self {
        Self::with_origin(Vec3::ZERO, aspect_ratio, vfov)
    }

    /// Same camera model translated to `origin`.
    pub fn with_origin(origin: Vec3, aspect_ratio: f64, vfov: f64) -> Self {
        let theta = vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = aspect_ratio * viewport_height;

        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, FOCAL_LENGTH);

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Ray from the camera origin through viewport coordinate `(u, v)`.
    ///
    /// `(0, 0)` is the lower-left corner and `(1, 1)` the upper-right. Values
    /// outside [0, 1] extrapolate past the viewport edge.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

impl Default for Camera {
    /// 16:9 viewport two units tall (90 degree vertical field of view).
    fn default() -> Self {
        Self::new(16.0 / 9.0, 90.0)
    }
}
