//! Infinite two-sided plane.

use lux_math::{Ray, Vec3};

use super::Hittable;
use crate::error::{GeometryError, GeometryResult};
use crate::Material;

/// Below this, a ray is treated as parallel to the plane.
pub(crate) const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `point` with a unit `normal`.
///
/// Both faces can be hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane; `normal` is normalized and must be non-zero.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> GeometryResult<Self> {
        let normal = normal
            .try_normalize()
            .ok_or(GeometryError::ZeroNormal(normal))?;

        Ok(Self {
            point,
            normal,
            material,
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denominator = self.normal.dot(-ray.direction());
        if denominator.abs() <= PARALLEL_EPSILON {
            return None;
        }

        // Signed height of the origin above the plane over the approach rate
        let t = (ray.origin() - self.point).dot(self.normal) / denominator;
        if t > 0.0 && t.is_finite() {
            Some(t)
        } else {
            None
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
