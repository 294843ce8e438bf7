//! Lumen math - vectors, rays, intervals and random sampling.
//!
//! Vectors are glam's double precision `DVec3`; the geometric helpers glam
//! does not ship (reflection, refraction, degeneracy checks) live on the
//! [`Vec3Ext`] trait.

// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

/// Point, direction or color in 3D space.
pub type Vec3 = DVec3;

/// RGB color with r=x, g=y, b=z (linear, nominally 0-1).
pub type Color = Vec3;

mod interval;
pub mod random;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::Vec3Ext;
