//! Scene description files.
//!
//! Parsing ([`parse_scene`]) turns text into a [`SceneDescription`] without
//! touching the filesystem; loading ([`load_scene`]) additionally reads the
//! OBJ files referenced by `mesh` entries and assembles a [`Scene`](crate::Scene).
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.txt")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//! ```

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
