//! Fixed-orientation pinhole camera.

use std::f32::consts::PI;

use lux_math::{Ray, Vec3};

use crate::error::{GeometryError, GeometryResult};

/// Camera looking down -Z with +Y up.
///
/// There is no view transform: only the eye position moves. The image plane
/// sits `focal_length` in front of the eye and its extent follows from the
/// field of view and aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    /// Vertical field of view in radians
    fov: f32,
    focal_length: f32,
    /// width / height
    aspect_ratio: f32,
}

impl Camera {
    /// Create a camera, validating its lens parameters.
    pub fn new(
        position: Vec3,
        fov: f32,
        focal_length: f32,
        aspect_ratio: f32,
    ) -> GeometryResult<Self> {
        if !(fov > 0.0 && fov < PI) {
            return Err(GeometryError::FieldOfView(fov));
        }
        if !(focal_length > 0.0 && focal_length.is_finite()) {
            return Err(GeometryError::FocalLength(focal_length));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(GeometryError::AspectRatio(aspect_ratio));
        }

        Ok(Self {
            position,
            fov,
            focal_length,
            aspect_ratio,
        })
    }

    /// Same as [`Camera::new`] with the field of view given in degrees.
    pub fn from_degrees(
        position: Vec3,
        fov_degrees: f32,
        focal_length: f32,
        aspect_ratio: f32,
    ) -> GeometryResult<Self> {
        Self::new(position, fov_degrees.to_radians(), focal_length, aspect_ratio)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Height of the image plane in world units: `2 f tan(fov / 2)`.
    pub fn viewport_height(&self) -> f32 {
        2.0 * self.focal_length * (self.fov / 2.0).tan()
    }

    /// Width of the image plane in world units.
    pub fn viewport_width(&self) -> f32 {
        self.aspect_ratio * self.viewport_height()
    }

    /// Primary ray through the center of pixel (x, y) of a `width x height`
    /// raster. Row 0 is the top of the image.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let u = ((x as f32 + 0.5) / width as f32 - 0.5) * self.viewport_width();
        let v = (0.5 - (y as f32 + 0.5) / height as f32) * self.viewport_height();

        // focal_length > 0, so the direction is never zero
        Ray::new(self.position, Vec3::new(u, v, -self.focal_length))
    }
}
