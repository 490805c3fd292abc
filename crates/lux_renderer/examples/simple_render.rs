//! Simple ray casting example.
//!
//! Builds a small scene in code and saves it as `simple_render.png`.

use lux_core::{Camera, Light, Material, Plane, Scene, Sphere, Triangle};
use lux_math::{Color, Vec3};
use lux_renderer::{render_with_stats, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let camera = Camera::from_degrees(Vec3::new(0.0, 1.0, 6.0), 50.0, 1.0, 16.0 / 9.0)?;
    let mut scene = Scene::new(camera);

    let floor = Material::diffuse(Color::splat(0.8)).with_ambient(Color::splat(0.05));
    scene.add_primitive(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, floor)?);

    let red = Material::diffuse(Color::new(0.9, 0.1, 0.1))
        .with_ambient(Color::new(0.1, 0.0, 0.0))
        .with_specular(Color::ONE, 32.0);
    scene.add_primitive(Sphere::new(Vec3::new(-1.2, 0.0, 0.0), 1.0, red));

    let blue = Material::diffuse(Color::new(0.1, 0.2, 0.9)).with_specular(Color::splat(0.5), 8.0);
    scene.add_primitive(Sphere::new(Vec3::new(1.4, -0.4, 0.8), 0.6, blue));

    let green = Material::diffuse(Color::new(0.1, 0.8, 0.2));
    scene.add_primitive(Triangle::new(
        Vec3::new(-3.0, -1.0, -2.0),
        Vec3::new(3.0, -1.0, -2.0),
        Vec3::new(0.0, 2.5, -3.0),
        green,
    )?);

    scene.add_light(Light::white(Vec3::new(4.0, 6.0, 5.0)));
    scene.add_light(Light::new(
        Vec3::new(-5.0, 3.0, 2.0),
        Color::new(0.2, 0.2, 0.4),
        Color::ZERO,
    ));

    let config = RenderConfig::for_camera(scene.camera(), 450);
    let (image, stats) = render_with_stats(&scene, &config);
    println!("{}", stats);

    image.save("simple_render.png")?;
    Ok(())
}
