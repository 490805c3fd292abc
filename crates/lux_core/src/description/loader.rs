//! Scene loading: parse a description and resolve its meshes.

use std::path::Path;

use thiserror::Error;

use super::parser::{parse_scene, ParseError, SceneDescription, SceneItem};
use crate::mesh::{Mesh, MeshError};
use crate::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Mesh at line {line}: {source}")]
    Mesh {
        line: usize,
        #[source]
        source: MeshError,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description file.
///
/// Relative `mesh` paths are resolved against the file's directory.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let scene = load_scene_from_str(&content, base_dir)?;
    log::info!(
        "Loaded {}: {} primitives, {} lights",
        path.display(),
        scene.primitive_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Load a scene from description text, resolving mesh paths against
/// `base_dir`.
pub fn load_scene_from_str(content: &str, base_dir: impl AsRef<Path>) -> LoadResult<Scene> {
    let description = parse_scene(content)?;
    build_scene(description, base_dir.as_ref())
}

/// Assemble a scene, expanding each mesh into triangles in place.
pub fn build_scene(description: SceneDescription, base_dir: &Path) -> LoadResult<Scene> {
    let mut scene = Scene::new(description.camera);

    for light in description.lights {
        scene.add_light(light);
    }

    for item in description.items {
        match item {
            SceneItem::Primitive(primitive) => {
                let kind = primitive.kind();
                let index = scene.add_primitive(primitive);
                log::debug!("Primitive {}: {}", index, kind);
            }
            SceneItem::Mesh(mesh_ref) => {
                let path = base_dir.join(&mesh_ref.file);
                let mesh = Mesh::from_obj(&path).map_err(|source| LoadError::Mesh {
                    line: mesh_ref.line,
                    source,
                })?;

                let triangles = mesh.triangles(mesh_ref.material);
                log::debug!("Mesh {}: {} triangles", path.display(), triangles.len());
                scene.extend_primitives(triangles);
            }
        }
    }

    Ok(scene)
}
