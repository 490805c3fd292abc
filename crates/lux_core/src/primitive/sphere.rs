//! Sphere primitive.

use lux_math::{Ray, Vec3};

use super::Hittable;
use crate::Material;

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    /// Solves `t^2 + b t + c = 0` for a unit-length direction.
    ///
    /// Only front faces count: if the surviving root is where the ray leaves
    /// the sphere (origin inside), the hit is rejected.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let diff = ray.origin() - self.center;
        let b = 2.0 * diff.dot(ray.direction());
        let c = diff.dot(diff) - self.radius * self.radius;

        let delta = b * b - 4.0 * c;
        if delta < 0.0 {
            return None;
        }

        let t = if delta == 0.0 {
            -b / 2.0
        } else {
            let sqrt_delta = delta.sqrt();
            let near = (-b - sqrt_delta) / 2.0;
            let far = (-b + sqrt_delta) / 2.0;

            // Roots at or behind the origin don't count
            if near > 0.0 {
                near
            } else {
                far
            }
        };

        if !(t > 0.0 && t.is_finite()) {
            return None;
        }

        // Zero-radius spheres have no defined normal
        let normal = self.normal_at(ray.at(t));
        if normal == Vec3::ZERO || normal.dot(ray.direction()) > 0.0 {
            return None;
        }

        Some(t)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
