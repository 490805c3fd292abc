//! Renderable primitives and ray intersection.
//!
//! Every shape answers two questions: where along a ray does it get hit, and
//! which way does its surface face at a given point. [`Primitive`] is the
//! closed set of shapes a [`Scene`](crate::Scene) stores; [`Hittable`] is the
//! shared capability, implemented by each shape and by `Primitive` itself.

mod plane;
mod sphere;
mod triangle;

pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

use lux_math::{Ray, Vec3};

use crate::Material;

/// Objects a ray can strike.
pub trait Hittable: Send + Sync {
    /// Distance along `ray` to the surface, or `None` on a miss.
    ///
    /// A returned distance is always finite and strictly positive; hits at or
    /// behind the ray origin are misses. `ray` must have a unit direction.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit surface normal at `point`.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Surface material.
    fn material(&self) -> &Material;
}

/// Closed set of renderable shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Primitive {
    /// Anchor point of the shape: sphere center, plane point or first
    /// triangle vertex.
    pub fn position(&self) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.center(),
            Primitive::Plane(p) => p.point(),
            Primitive::Triangle(t) => t.vertices()[0],
        }
    }

    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
            Primitive::Triangle(_) => "triangle",
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray),
            Primitive::Plane(p) => p.intersect(ray),
            Primitive::Triangle(t) => t.intersect(ray),
        }
    }

    #[inline]
    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.normal_at(point),
            Primitive::Plane(p) => p.normal_at(point),
            Primitive::Triangle(t) => t.normal_at(point),
        }
    }

    #[inline]
    fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(),
            Primitive::Triangle(t) => t.material(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

/// Record of the nearest surface along a ray.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// Distance along the ray
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Unit surface normal at `point`
    pub normal: Vec3,
    /// Index of the primitive in the scene
    pub index: usize,
    /// The primitive that was struck
    pub primitive: &'a Primitive,
}

impl<'a> Hit<'a> {
    /// Build a hit record for `primitive` at distance `t` along `ray`.
    pub fn new(ray: &Ray, t: f32, index: usize, primitive: &'a Primitive) -> Self {
        let point = ray.at(t);
        Self {
            t,
            point,
            normal: primitive.normal_at(point),
            index,
            primitive,
        }
    }

    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}
