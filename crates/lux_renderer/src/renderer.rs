//! Core Phong ray casting renderer.
//!
//! Implements a single-bounce Whitted-style caster with:
//! - One primary ray per pixel, no multi-sampling
//! - Nearest-hit search by linear scan over the scene
//! - One shadow ray per light (hard shadows)
//! - Ambient + diffuse + specular (Phong) shading

use std::time::Instant;

use lux_core::{Camera, Hit, Scene};
use lux_math::{clamp_color, reflect, Color, Interval, Ray, MAX_CHANNEL};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, Bucket, DEFAULT_BUCKET_SIZE};
use crate::output::ImageBuffer;
use crate::stats::RenderStats;

/// Default offset of shadow ray origins along the surface normal.
pub const DEFAULT_SHADOW_BIAS: f32 = 1e-3;

/// Which hits along a shadow ray count as occluders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShadowBound {
    /// Any hit blocks the light, even one beyond the light itself.
    #[default]
    Unbounded,
    /// Only hits between the surface and the light block it.
    LightDistance,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Linear color for rays that hit nothing
    pub background: Color,
    /// Distance shadow rays start above the surface
    pub shadow_bias: f32,
    pub shadow_bound: ShadowBound,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: Color::ZERO,
            shadow_bias: DEFAULT_SHADOW_BIAS,
            shadow_bound: ShadowBound::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Configuration whose width follows the camera's aspect ratio.
    pub fn for_camera(camera: &Camera, height: u32) -> Self {
        let height = height.max(1);
        let width = ((camera.aspect_ratio() * height as f32).round() as u32).max(1);
        Self::default().with_resolution(width, height)
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_shadow_bias(mut self, bias: f32) -> Self {
        self.shadow_bias = bias;
        self
    }

    pub fn with_shadow_bound(mut self, bound: ShadowBound) -> Self {
        self.shadow_bound = bound;
        self
    }

    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }
}

/// Phong shading of a surface hit, in linear color.
///
/// Ambient is added once; every light that reaches the point adds its
/// diffuse and specular terms.
pub fn shade(
    scene: &Scene,
    ray: &Ray,
    hit: &Hit,
    config: &RenderConfig,
    stats: &mut RenderStats,
) -> Color {
    let material = hit.material();
    let mut color = material.ambient;

    let shadow_origin = hit.point + hit.normal * config.shadow_bias;
    let to_viewer = -ray.direction();

    for light in scene.lights() {
        // A light sitting exactly on the surface has no direction
        let Some(shadow_ray) = Ray::towards(shadow_origin, light.position) else {
            continue;
        };
        stats.shadow_rays += 1;

        let range = match config.shadow_bound {
            ShadowBound::Unbounded => Interval::POSITIVE,
            ShadowBound::LightDistance => Interval::up_to(shadow_origin.distance(light.position)),
        };
        if scene.is_occluded(&shadow_ray, range) {
            stats.occluded_shadow_rays += 1;
            continue;
        }

        let light_dir = shadow_ray.direction();
        let lambert = hit.normal.dot(light_dir).max(0.0);
        let highlight = reflect(-light_dir, hit.normal)
            .dot(to_viewer)
            .max(0.0)
            .powf(material.shininess.max(0.0));

        color += light.diffuse * material.diffuse * lambert;
        color += light.specular * material.specular * highlight;
    }

    color
}

/// Linear color seen along `ray`.
pub fn trace(scene: &Scene, ray: &Ray, config: &RenderConfig, stats: &mut RenderStats) -> Color {
    stats.primary_rays += 1;

    match scene.nearest_hit(ray) {
        Some(hit) => {
            stats.hits += 1;
            shade(scene, ray, &hit, config, stats)
        }
        None => config.background,
    }
}

/// Final pixel color, scaled to `[0, 255]` and clamped.
pub fn render_pixel(scene: &Scene, config: &RenderConfig, x: u32, y: u32) -> Color {
    render_pixel_with_stats(scene, config, x, y, &mut RenderStats::default())
}

pub(crate) fn render_pixel_with_stats(
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
    stats: &mut RenderStats,
) -> Color {
    let ray = scene.camera().primary_ray(x, y, config.width, config.height);
    clamp_color(trace(scene, &ray, config, stats) * MAX_CHANNEL)
}

/// Render the entire scene, buckets in parallel on the rayon pool.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    render_with_stats(scene, config).0
}

/// [`render`], also returning ray counts.
pub fn render_with_stats(scene: &Scene, config: &RenderConfig) -> (ImageBuffer, RenderStats) {
    let start = Instant::now();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets ({} primitives, {} lights)",
        config.width,
        config.height,
        buckets.len(),
        scene.primitive_count(),
        scene.light_count()
    );

    let results: Vec<_> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    let mut stats = RenderStats::default();
    for result in &results {
        image.write_bucket(result);
        stats += result.stats;
    }

    log::info!("Rendered in {:?}: {}", start.elapsed(), stats);
    (image, stats)
}

/// Render the entire scene on the calling thread.
///
/// Produces the same raster as [`render`].
pub fn render_serial(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let whole = Bucket::new(0, 0, config.width, config.height, 0);
    let result = render_bucket(&whole, scene, config);

    let mut image = ImageBuffer::new(config.width, config.height);
    image.write_bucket(&result);
    image
}
