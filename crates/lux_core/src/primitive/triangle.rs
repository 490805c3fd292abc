//! Triangle primitive.
//!
//! A triangle is its supporting plane plus an inside test: the plane
//! intersection culls parallel rays, then the hit point is checked against
//! each edge with the sign of `n . (edge x (p - v))`.

use lux_math::{Ray, Vec3};

use super::{Hittable, Plane};
use crate::error::{GeometryError, GeometryResult};
use crate::Material;

/// Slack on the edge tests, so points exactly on an edge count as inside.
const EDGE_BIAS: f32 = -1e-6;

/// A triangle primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
    /// Plane through the first vertex with the face normal
    plane: Plane,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal is `normalize((v1 - v0) x (v2 - v0))`; triangles with
    /// zero area have none and are rejected.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> GeometryResult<Self> {
        let normal = (v1 - v0)
            .cross(v2 - v0)
            .try_normalize()
            .ok_or(GeometryError::DegenerateTriangle(v0, v1, v2))?;

        Ok(Self {
            vertices: [v0, v1, v2],
            plane: Plane::new(v0, normal, material)?,
        })
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    /// Unit face normal.
    pub fn normal(&self) -> Vec3 {
        self.plane.normal()
    }

    /// True if `point` (assumed to lie in the triangle's plane) is inside or on
    /// an edge.
    fn contains(&self, point: Vec3) -> bool {
        let normal = self.plane.normal();

        (0..3).all(|i| {
            let v = self.vertices[i];
            let edge = self.vertices[(i + 1) % 3] - v;
            normal.dot(edge.cross(point - v)) > EDGE_BIAS
        })
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = self.plane.intersect(ray)?;

        if self.contains(ray.at(t)) {
            Some(t)
        } else {
            None
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.plane.normal_at(point)
    }

    fn material(&self) -> &Material {
        self.plane.material()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Material::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_hit() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), -Vec3::Z);

        assert_eq!(tri.intersect(&ray), Some(1.0));
        assert_eq!(tri.normal_at(ray.at(1.0)), Vec3::Z);
    }

    #[test]
    fn test_triangle_miss_outside() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.9, 0.9, 1.0), -Vec3::Z);

        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_hit_from_behind() {
        // The supporting plane is two-sided, so the triangle is too
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, -2.0), Vec3::Z);

        assert_eq!(tri.intersect(&ray), Some(2.0));
    }

    #[test]
    fn test_triangle_edge_counts_as_inside() {
        let tri = unit_triangle();

        // On the hypotenuse x + y = 1
        let ray = Ray::new(Vec3::new(0.5, 0.5, 1.0), -Vec3::Z);
        assert!(tri.intersect(&ray).is_some());

        // On a vertex
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), -Vec3::Z);
        assert!(tri.intersect(&ray).is_some());
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(-1.0, 0.25, 0.0), Vec3::X);

        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_winding_flips_normal() {
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Material::default(),
        )
        .unwrap();
        assert_eq!(tri.normal(), -Vec3::Z);

        // Containment is winding independent
        let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), -Vec3::Z);
        assert_eq!(tri.intersect(&ray), Some(1.0));
    }

    #[test]
    fn test_degenerate_triangle_rejected() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        let c = Vec3::new(2.0, 0.0, 0.0);

        let err = Triangle::new(a, b, c, Material::default()).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateTriangle(a, b, c));
    }
}
