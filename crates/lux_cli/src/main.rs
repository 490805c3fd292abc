//! Lux CLI - render a scene description to an image file.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lux_core::{load_scene, Scene};
use lux_renderer::{
    render, render_serial, RenderConfig, ShadowBound, DEFAULT_BUCKET_SIZE, DEFAULT_SHADOW_BIAS,
};

#[derive(Parser)]
#[command(name = "lux")]
#[command(about = "CPU Phong ray caster", long_about = None)]
struct Cli {
    /// Scene description file
    scene: PathBuf,

    /// Output image (format determined by extension: .png, .ppm, .bmp, ...)
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Image width in pixels (default: height times the camera aspect ratio)
    #[arg(long)]
    width: Option<u32>,

    /// Which hits along a shadow ray block the light
    #[arg(long, value_enum, default_value_t = Bound::Unbounded)]
    shadow_bound: Bound,

    /// Offset of shadow ray origins along the surface normal
    #[arg(long, default_value_t = DEFAULT_SHADOW_BIAS)]
    bias: f32,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Render on a single thread
    #[arg(long)]
    serial: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Bound {
    /// Any hit along the ray occludes
    Unbounded,
    /// Only hits closer than the light occlude
    Light,
}

impl From<Bound> for ShadowBound {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Unbounded => ShadowBound::Unbounded,
            Bound::Light => ShadowBound::LightDistance,
        }
    }
}

impl Cli {
    fn render_config(&self, scene: &Scene) -> RenderConfig {
        let mut config = RenderConfig::for_camera(scene.camera(), self.height);
        if let Some(width) = self.width {
            config.width = width.max(1);
        }

        config
            .with_shadow_bound(self.shadow_bound.into())
            .with_shadow_bias(self.bias)
            .with_bucket_size(self.bucket_size)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let scene = load_scene(&cli.scene)
        .with_context(|| format!("Failed to load scene {}", cli.scene.display()))?;
    if scene.is_empty() {
        log::warn!("Scene {} has no primitives", cli.scene.display());
    }

    let config = cli.render_config(&scene);

    let image = if cli.serial {
        let start = Instant::now();
        let image = render_serial(&scene, &config);
        log::info!("Serial render finished in {:?}", start.elapsed());
        image
    } else {
        render(&scene, &config)
    };

    image
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
