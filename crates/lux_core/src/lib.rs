//! Lux Core - scene model and primitives for the Lux ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Light`, `Material`
//! - **Primitives**: `Sphere`, `Plane`, `Triangle` and their ray intersection
//! - **Scene descriptions**: text parsing and OBJ mesh import
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! let hit = scene.nearest_hit(&scene.camera().primary_ray(320, 240, 640, 480));
//! ```

pub mod camera;
pub mod description;
pub mod error;
pub mod light;
pub mod material;
pub mod mesh;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use description::{load_scene, load_scene_from_str, parse_scene, LoadError, ParseError};
pub use error::{GeometryError, GeometryResult};
pub use light::Light;
pub use material::Material;
pub use mesh::{Mesh, MeshError};
pub use primitive::{Hit, Hittable, Plane, Primitive, Sphere, Triangle};
pub use scene::Scene;
