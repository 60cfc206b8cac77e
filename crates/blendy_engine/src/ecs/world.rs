//! ECS World implementation

use super::components::{CollidableKind, Motion};
use super::{ComponentStore, Entity};
use crate::assets::{Mesh, MeshArena, MeshHandle};

/// Entities, the component stores the collision core reads, and the shared
/// mesh arena
///
/// Stores are public so producers (movement, AI, spawning) can write to them
/// directly. Iteration order of `motions` is the order collision pairs are
/// enumerated in.
#[derive(Debug, Default)]
pub struct World {
    next_entity_id: u32,
    entities: Vec<Entity>,

    /// Position, angle, scale and velocity
    pub motions: ComponentStore<Motion>,
    /// Collision eligibility and kind
    pub collidables: ComponentStore<CollidableKind>,
    /// Collision mesh of polygon-collidable entities
    pub mesh_refs: ComponentStore<MeshHandle>,
    /// Shared meshes
    pub meshes: MeshArena,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with no components
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Create an entity that moves but never collides (UI, lights, backgrounds)
    pub fn spawn_decoration(&mut self, motion: Motion) -> Entity {
        let entity = self.create_entity();
        self.motions.insert(entity, motion);
        entity
    }

    /// Create a collidable entity without a mesh
    pub fn spawn_collidable(&mut self, motion: Motion, kind: CollidableKind) -> Entity {
        let entity = self.spawn_decoration(motion);
        self.collidables.insert(entity, kind);
        entity
    }

    /// Create a collidable entity that uses `mesh` for the narrow phase
    pub fn spawn_with_mesh(&mut self, motion: Motion, kind: CollidableKind, mesh: MeshHandle) -> Entity {
        let entity = self.spawn_collidable(motion, kind);
        self.mesh_refs.insert(entity, mesh);
        entity
    }

    /// Store a shared mesh
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.insert(mesh)
    }

    /// Collidable kind of an entity, `None` if it never collides
    pub fn kind_of(&self, entity: Entity) -> Option<CollidableKind> {
        self.collidables.get(entity).copied()
    }

    /// Resolve the mesh of an entity. `None` if it has no handle or the
    /// handle no longer resolves.
    pub fn mesh_of(&self, entity: Entity) -> Option<&Mesh> {
        self.mesh_refs
            .get(entity)
            .and_then(|&handle| self.meshes.get(handle))
    }

    /// Remove an entity and all of its components
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        let Some(position) = self.entities.iter().position(|&e| e == entity) else {
            return false;
        };
        self.entities.remove(position);
        self.motions.remove(entity);
        self.collidables.remove(entity);
        self.mesh_refs.remove(entity);
        true
    }

    /// Whether the entity exists
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Get an iterator over all entities
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Remove every entity; meshes are kept
    pub fn clear(&mut self) {
        self.entities.clear();
        self.motions.clear();
        self.collidables.clear();
        self.mesh_refs.clear();
    }
}
