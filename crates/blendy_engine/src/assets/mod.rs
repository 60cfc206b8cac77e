//! Asset module
//!
//! Meshes are loaded once, validated, and stored in a [`MeshArena`]. Entities
//! refer to a shared mesh through a [`MeshHandle`]; nothing downstream of the
//! loader ever mutates a mesh.

pub mod mesh;
pub mod obj_loader;

pub use mesh::{ColoredVertex, Mesh, MeshArena, MeshError, MeshHandle};
pub use obj_loader::{ObjError, ObjLoader};
