//! Hittable trait and HitRecord for ray-object intersection.

use crate::Ray;
use lumen_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Produced per query and consumed immediately by the tracer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// The world: every surface in a render, searched linearly.
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for object in &self.objects {
            // Only accept hits nearer than the best so far
            let search = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(ray, search) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    fn search() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    #[test]
    fn test_empty_scene_never_hits() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.hit(&forward(), search()).is_none());
        assert!(scene.hit(&forward(), Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_scene_returns_nearest_hit() {
        // Near sphere front face at t=1.5, far sphere front face at t=4.0
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5);
        let far = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);

        let mut far_first = Scene::new();
        far_first.add(Box::new(far));
        far_first.add(Box::new(near));

        let mut near_first = Scene::new();
        near_first.add(Box::new(near));
        near_first.add(Box::new(far));

        for scene in [&far_first, &near_first] {
            let rec = scene.hit(&forward(), search()).expect("ray should hit");
            assert!((rec.t - 1.5).abs() < 1e-12);
            assert!((rec.p - Vec3::new(0.0, 0.0, -1.5)).length() < 1e-12);
            assert!((rec.normal - Vec3::Z).length() < 1e-12);
        }
        assert_eq!(far_first.len(), 2);
    }

    #[test]
    fn test_scene_respects_interval() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5)));

        assert!(scene.hit(&forward(), Interval::new(0.001, 1.0)).is_none());
        // Past the front face, the back face at t=2.5 is the nearest hit
        let rec = scene.hit(&forward(), Interval::new(2.0, f64::INFINITY)).unwrap();
        assert!((rec.t - 2.5).abs() < 1e-12);
    }
}
