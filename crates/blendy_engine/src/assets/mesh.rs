//! Coloured triangle meshes and the shared mesh arena

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use crate::foundation::math::{Vec2, Vec3};

new_key_type! {
    /// Stable key of a mesh stored in a [`MeshArena`]
    pub struct MeshHandle;
}

/// Errors found when validating mesh index data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// An index names a vertex that does not exist
    #[error("Vertex index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index
        index: u16,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
    /// The index list does not split into whole triangles
    #[error("Index count {index_count} is not a multiple of 3")]
    IncompleteTriangle {
        /// Number of indices in the mesh
        index_count: usize,
    },
}

/// Vertex of an untextured, vertex-coloured mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    /// Local-space position (z is ignored by collision)
    pub position: Vec3,
    /// Linear RGB colour
    pub color: Vec3,
}

impl ColoredVertex {
    /// Create a vertex
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Immutable triangle mesh in local space
///
/// Local coordinates are normalized to roughly -0.5..0.5 so that an entity's
/// `scale` sets its world size.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Size of the mesh before normalization, in asset units
    pub original_size: Vec2,
    /// Vertex buffer
    pub vertices: Vec<ColoredVertex>,
    /// Index buffer, one triangle per run of three
    pub vertex_indices: Vec<u16>,
}

impl Mesh {
    /// Create a mesh from vertices and triangle indices
    pub fn new(vertices: Vec<ColoredVertex>, vertex_indices: Vec<u16>) -> Self {
        Self {
            original_size: Vec2::new(1.0, 1.0),
            vertices,
            vertex_indices,
        }
    }

    /// Axis-aligned square spanning -0.5..0.5, split into two triangles
    pub fn unit_square() -> Self {
        let white = Vec3::new(1.0, 1.0, 1.0);
        let vertices = vec![
            ColoredVertex::new(Vec3::new(-0.5, -0.5, 0.0), white),
            ColoredVertex::new(Vec3::new(0.5, -0.5, 0.0), white),
            ColoredVertex::new(Vec3::new(0.5, 0.5, 0.0), white),
            ColoredVertex::new(Vec3::new(-0.5, 0.5, 0.0), white),
        ];
        Self::new(vertices, vec![0, 1, 2, 0, 2, 3])
    }

    /// Number of complete index runs
    pub fn triangle_count(&self) -> usize {
        self.vertex_indices.len() / 3
    }

    /// Local-space xy corners of every well-formed triangle
    ///
    /// Runs that reference a missing vertex, and a trailing partial run, are
    /// skipped.
    pub fn local_triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.vertex_indices.chunks_exact(3).filter_map(move |run| {
            let a = self.vertices.get(usize::from(run[0]))?;
            let b = self.vertices.get(usize::from(run[1]))?;
            let c = self.vertices.get(usize::from(run[2]))?;
            Some([a.position.xy(), b.position.xy(), c.position.xy()])
        })
    }

    /// Check that every index names a vertex and the index list is whole triangles
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertex_indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                index_count: self.vertex_indices.len(),
            });
        }
        if let Some(&index) = self
            .vertex_indices
            .iter()
            .find(|&&index| usize::from(index) >= self.vertices.len())
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            });
        }
        Ok(())
    }
}

/// Arena of shared meshes, keyed by [`MeshHandle`]
#[derive(Debug, Default)]
pub struct MeshArena {
    meshes: SlotMap<MeshHandle, Mesh>,
}

impl MeshArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a mesh and return its handle
    pub fn insert(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.insert(mesh)
    }

    /// Look up a mesh
    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle)
    }

    /// Remove a mesh. Entities still holding the handle stop resolving it.
    pub fn remove(&mut self, handle: MeshHandle) -> Option<Mesh> {
        self.meshes.remove(handle)
    }

    /// Number of stored meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh(indices: Vec<u16>) -> Mesh {
        let white = Vec3::new(1.0, 1.0, 1.0);
        let vertices = vec![
            ColoredVertex::new(Vec3::new(0.0, 0.0, 0.0), white),
            ColoredVertex::new(Vec3::new(1.0, 0.0, 0.0), white),
            ColoredVertex::new(Vec3::new(0.0, 1.0, 0.0), white),
        ];
        Mesh::new(vertices, indices)
    }

    #[test]
    fn test_unit_square_is_valid() {
        let square = Mesh::unit_square();
        assert!(square.validate().is_ok());
        assert_eq!(square.triangle_count(), 2);
        assert_eq!(square.local_triangles().count(), 2);
    }

    #[test]
    fn test_malformed_triangle_is_skipped() {
        let mesh = triangle_mesh(vec![0, 1, 2, 0, 1, 9]);
        let triangles: Vec<_> = mesh.local_triangles().collect();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0][1], Vec2::new(1.0, 0.0));
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange { index: 9, vertex_count: 3 })
        );
    }

    #[test]
    fn test_partial_run_is_ignored() {
        let mesh = triangle_mesh(vec![0, 1, 2, 0]);
        assert_eq!(mesh.local_triangles().count(), 1);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IncompleteTriangle { index_count: 4 })
        );
    }

    #[test]
    fn test_arena_handles_go_stale_on_remove() {
        let mut arena = MeshArena::new();
        let handle = arena.insert(Mesh::unit_square());
        assert!(arena.get(handle).is_some());
        arena.remove(handle);
        assert!(arena.get(handle).is_none());
        assert!(arena.is_empty());
    }
}
