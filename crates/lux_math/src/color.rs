//! Color type and the reflection helper used by the specular term.

use crate::{Interval, Vec3};

/// Linear RGB color.
///
/// Material and light colors are nominally in `[0, 1]`; finished pixels are
/// scaled to `[0, MAX_CHANNEL]`.
pub type Color = Vec3;

/// Largest value a finished pixel channel may hold.
pub const MAX_CHANNEL: f32 = 255.0;

/// Mirror the incoming direction `d` about the unit normal `n`.
///
/// `d - 2 (n . d) n`
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * n.dot(d) * n
}

/// Saturate every channel of `color` into `[0, MAX_CHANNEL]`.
///
/// Out of range values clamp to the nearest bound; NaN channels map to 0 so a
/// bad sample can never leak into the output raster.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        clamp_channel(color.x),
        clamp_channel(color.y),
        clamp_channel(color.z),
    )
}

#[inline]
fn clamp_channel(c: f32) -> f32 {
    if c.is_nan() {
        0.0
    } else {
        Interval::new(0.0, MAX_CHANNEL).clamp(c)
    }
}
