use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// The intersection routines assume `direction` has unit length, so the
/// constructor normalizes whatever it is given. Use [`Ray::try_new`] when the
/// direction may be zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// `direction` must be non-zero.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.length_squared() > 0.0,
            "ray direction must be non-zero"
        );
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray, or `None` if `direction` cannot be normalized.
    #[inline]
    pub fn try_new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction
            .try_normalize()
            .map(|direction| Self { origin, direction })
    }

    /// Ray from `origin` heading toward `target`.
    ///
    /// Returns `None` when the two points coincide.
    #[inline]
    pub fn towards(origin: Vec3, target: Vec3) -> Option<Self> {
        Self::try_new(origin, target - origin)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
