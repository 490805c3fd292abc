//! Errors raised while constructing scene objects.

use lux_math::Vec3;
use thiserror::Error;

/// Invalid geometry or camera parameters, caught at construction time so the
/// intersection routines never see them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Field of view must be in (0, pi) radians, got {0}")]
    FieldOfView(f32),

    #[error("Focal length must be positive, got {0}")]
    FocalLength(f32),

    #[error("Aspect ratio must be positive, got {0}")]
    AspectRatio(f32),

    #[error("Plane normal must be non-zero, got {0}")]
    ZeroNormal(Vec3),

    #[error("Shininess must be non-negative, got {0}")]
    Shininess(f32),

    #[error("Triangle {0}, {1}, {2} has zero area")]
    DegenerateTriangle(Vec3, Vec3, Vec3),
}

/// Result type for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;
