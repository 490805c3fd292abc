//! Lux Renderer - CPU Phong ray casting.
//!
//! Casts one ray per pixel into a [`lux_core::Scene`], shades the nearest
//! hit with the Phong model and a hard shadow ray per light, and writes the
//! result to an [`ImageBuffer`]. Buckets of pixels are rendered in parallel
//! with rayon.

mod bucket;
mod output;
mod renderer;
mod stats;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use output::{color_to_rgb, ImageBuffer};
pub use renderer::{
    render, render_pixel, render_serial, render_with_stats, shade, trace, RenderConfig,
    ShadowBound, DEFAULT_SHADOW_BIAS,
};
pub use stats::RenderStats;
