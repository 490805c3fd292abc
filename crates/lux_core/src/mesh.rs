//! Triangle mesh import.
//!
//! Meshes are only a loading convenience: every face becomes an independent
//! [`Triangle`] in the scene, all sharing one material.

use std::path::{Path, PathBuf};

use lux_math::Vec3;
use thiserror::Error;

use crate::{Material, Triangle};

/// Errors that can occur while importing a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Failed to load OBJ {}: {source}", .path.display())]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("OBJ {} contains no geometry", .0.display())]
    Empty(PathBuf),
}

/// Vertex positions and triangle indices (every 3 indices form a triangle).
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Load every model of an OBJ file into one mesh.
    ///
    /// Faces are triangulated on load.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                single_index: true,
                triangulate: true,
                ..Default::default()
            },
        )
        .map_err(|source| MeshError::Obj {
            path: path.to_path_buf(),
            source,
        })?;

        let mut mesh = Mesh::default();
        for model in &models {
            let base = mesh.positions.len() as u32;
            mesh.positions.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(Vec3::from_slice),
            );
            mesh.indices.extend(model.mesh.indices.iter().map(|i| base + i));
        }

        if mesh.indices.is_empty() {
            return Err(MeshError::Empty(path.to_path_buf()));
        }

        log::debug!(
            "Loaded {}: {} models, {} vertices, {} triangles",
            path.display(),
            models.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Build scene triangles sharing `material`.
    ///
    /// Faces with out-of-range indices or zero area are skipped and logged.
    pub fn triangles(&self, material: Material) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(self.triangle_count());
        let mut skipped = 0usize;

        for face in self.indices.chunks_exact(3) {
            let vertex = |i: u32| self.positions.get(i as usize).copied();

            let (Some(v0), Some(v1), Some(v2)) =
                (vertex(face[0]), vertex(face[1]), vertex(face[2]))
            else {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    face[0],
                    face[1],
                    face[2],
                    self.positions.len()
                );
                skipped += 1;
                continue;
            };

            match Triangle::new(v0, v1, v2, material) {
                Ok(triangle) => triangles.push(triangle),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {} degenerate or invalid mesh faces", skipped);
        }

        triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;
    use lux_math::Color;

    fn quad() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 1, 3, 2],
        )
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_triangles_share_material() {
        let material = Material::diffuse(Color::new(0.2, 0.4, 0.6));
        let triangles = quad().triangles(material);

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1].vertices(), [Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y]);
        assert!(triangles.iter().all(|t| *t.material() == material));
    }

    #[test]
    fn test_bad_faces_skipped() {
        let mut mesh = quad();
        // Collinear face, then an out-of-range index
        mesh.positions.push(Vec3::new(2.0, 0.0, 0.0));
        mesh.indices.extend_from_slice(&[0, 1, 4, 0, 1, 99]);

        assert_eq!(mesh.triangles(Material::default()).len(), 2);
    }

    #[test]
    fn test_missing_obj_is_error() {
        let err = Mesh::from_obj("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, MeshError::Obj { .. }));
    }
}
