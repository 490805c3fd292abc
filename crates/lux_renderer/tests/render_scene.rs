//! End-to-end renders of parsed scene descriptions.

use lux_core::load_scene_from_str;
use lux_math::Color;
use lux_renderer::{render, render_serial, render_with_stats, RenderConfig, ShadowBound};

const RED_SPHERE: &str = "\
camera pos: 0 0 5 fov: 60 f: 1 a: 1
light pos: 0 0 5 dif: 1 1 1 spe: 1 1 1
sphere pos: 0 0 0 rad: 1 dif: 1 0 0
";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn red_sphere_center_and_corners() {
    init_logging();

    let scene = load_scene_from_str(RED_SPHERE, "").unwrap();
    let config = RenderConfig::for_camera(scene.camera(), 11);
    assert_eq!((config.width, config.height), (11, 11));

    let image = render(&scene, &config);

    // Normal and light direction coincide at the center
    assert!(image.get(5, 5).abs_diff_eq(Color::new(255.0, 0.0, 0.0), 1e-3));

    for (x, y) in [(0, 0), (10, 0), (0, 10), (10, 10)] {
        assert_eq!(image.get(x, y), Color::ZERO, "corner ({x}, {y})");
    }

    let bytes = image.to_rgb8();
    let center = (5 * 11 + 5) * 3;
    assert_eq!(&bytes[center..center + 3], &[255, 0, 0]);
}

#[test]
fn red_sphere_darkens_toward_rim() {
    let scene = load_scene_from_str(RED_SPHERE, "").unwrap();
    let config = RenderConfig::for_camera(scene.camera(), 41);
    let image = render(&scene, &config);

    let center = image.get(20, 20).x;
    let off_center = image.get(23, 20).x;
    assert!(off_center > 0.0);
    assert!(off_center < center);
    assert_eq!(image.get(23, 20).y, 0.0);
}

#[test]
fn sphere_shadows_floor() {
    init_logging();

    let description = "\
camera pos: 0 0 8 fov: 60 f: 1 a: 1
light pos: 0 10 0 dif: 1 1 1 spe: 0 0 0
plane pos: 0 -1 0 nor: 0 1 0 dif: 1 1 1
sphere pos: 0 3 0 rad: 1 amb: 0.1 0.1 0.1 dif: 0 0 1
";
    let scene = load_scene_from_str(description, "").unwrap();
    let config = RenderConfig::default().with_resolution(64, 64).with_bucket_size(16);
    let (image, stats) = render_with_stats(&scene, &config);

    assert_eq!(stats.primary_rays, 64 * 64);
    assert!(stats.occluded_shadow_rays > 0);

    // Floor directly under the sphere sits in its shadow
    let under_sphere: Vec<u32> = (0..64)
        .filter(|&y| {
            let ray = scene.camera().primary_ray(32, y, 64, 64);
            scene
                .nearest_hit(&ray)
                .is_some_and(|hit| hit.index == 0 && hit.point.z.abs() < 0.5)
        })
        .collect();

    assert!(!under_sphere.is_empty());
    for y in under_sphere {
        assert_eq!(image.get(32, y), Color::ZERO);
    }

    // Floor near the camera is lit
    assert!(image.get(32, 63).x > 0.0);
}

#[test]
fn shadow_bound_changes_image() {
    // Ceiling sits beyond the light
    let description = "\
camera pos: 0 0 8 fov: 60 f: 1 a: 1
light pos: 0 1 0 dif: 1 1 1
plane pos: 0 -1 0 nor: 0 1 0 dif: 1 1 1
plane pos: 0 5 0 nor: 0 -1 0
";
    let scene = load_scene_from_str(description, "").unwrap();
    let base = RenderConfig::default().with_resolution(16, 16);

    let unbounded = render(&scene, &base);
    let bounded = render(&scene, &base.clone().with_shadow_bound(ShadowBound::LightDistance));

    assert_eq!(unbounded.get(8, 15), Color::ZERO);
    assert!(bounded.get(8, 15).x > 0.0);
}

#[test]
fn parallel_and_serial_agree() {
    let description = "\
camera pos: 0 1 6 fov: 50 f: 1 a: 1.5
light pos: 4 6 5 dif: 1 1 1 spe: 1 1 1
light pos: -5 3 2 dif: 0.2 0.2 0.4
plane pos: 0 -1 0 nor: 0 1 0 amb: 0.05 0.05 0.05 dif: 0.8 0.8 0.8
sphere pos: -1 0 0 rad: 1 dif: 0.9 0.1 0.1 spe: 1 1 1 shi: 32
sphere pos: 1.5 -0.4 1 rad: 0.6 dif: 0.1 0.2 0.9
";
    let scene = load_scene_from_str(description, "").unwrap();
    let config = RenderConfig::for_camera(scene.camera(), 30).with_bucket_size(7);

    assert_eq!(render(&scene, &config), render_serial(&scene, &config));
}
