//! Lux math - vectors, rays and color helpers.
//!
//! Vector arithmetic comes straight from `glam`; this crate adds the few
//! ray-casting specific pieces on top of it.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod interval;
mod ray;

pub use color::{clamp_color, reflect, Color, MAX_CHANNEL};
pub use interval::Interval;
pub use ray::Ray;
