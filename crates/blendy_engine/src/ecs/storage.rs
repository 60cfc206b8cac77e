//! Insertion-ordered component storage
//!
//! Components are kept densely packed next to the entity that owns them, so
//! iteration order is the order in which components currently exist. Removal
//! swaps the last element into the hole, which is the only operation that
//! reorders the store.

use std::collections::HashMap;

use super::{Component, Entity};

/// Dense storage for one component type
#[derive(Debug, Clone)]
pub struct ComponentStore<T: Component> {
    components: Vec<T>,
    entities: Vec<Entity>,
    index: HashMap<Entity, usize>,
}

impl<T: Component> ComponentStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            entities: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace the component of `entity`
    pub fn insert(&mut self, entity: Entity, component: T) -> &mut T {
        if let Some(&slot) = self.index.get(&entity) {
            self.components[slot] = component;
            return &mut self.components[slot];
        }
        let slot = self.components.len();
        self.components.push(component);
        self.entities.push(entity);
        self.index.insert(entity, slot);
        &mut self.components[slot]
    }

    /// Check whether `entity` has a component in this store
    pub fn has(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity)
    }

    /// Get the component of `entity`
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.index.get(&entity).map(|&slot| &self.components[slot])
    }

    /// Get the component of `entity` mutably
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.index.get(&entity).map(|&slot| &mut self.components[slot])
    }

    /// Remove the component of `entity`
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.index.remove(&entity)?;
        let last = self.components.len() - 1;
        if slot != last {
            let moved = self.entities[last];
            self.index.insert(moved, slot);
        }
        self.entities.swap_remove(slot);
        Some(self.components.swap_remove(slot))
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Remove every component
    pub fn clear(&mut self) {
        self.components.clear();
        self.entities.clear();
        self.index.clear();
    }

    /// Entities in storage order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Components in storage order
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Iterate `(entity, component)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.components.iter())
    }

    /// Iterate `(entity, component)` pairs mutably in storage order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.components.iter_mut())
    }
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::CollidableKind;

    fn entity(id: u32) -> Entity {
        Entity::new(id)
    }

    #[test]
    fn test_insertion_order_is_iteration_order() {
        let mut store = ComponentStore::new();
        store.insert(entity(7), CollidableKind::Enemy);
        store.insert(entity(2), CollidableKind::Player);
        store.insert(entity(5), CollidableKind::PowerUp);

        let order: Vec<u32> = store.iter().map(|(e, _)| e.id()).collect();
        assert_eq!(order, vec![7, 2, 5]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut store = ComponentStore::new();
        store.insert(entity(1), CollidableKind::Enemy);
        store.insert(entity(2), CollidableKind::Enemy);
        store.insert(entity(1), CollidableKind::Player);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(entity(1)), Some(&CollidableKind::Player));
        assert_eq!(store.entities()[0], entity(1));
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut store = ComponentStore::new();
        for id in 0..4 {
            store.insert(entity(id), CollidableKind::Enemy);
        }
        store.insert(entity(4), CollidableKind::Player);

        assert_eq!(store.remove(entity(1)), Some(CollidableKind::Enemy));
        assert!(!store.has(entity(1)));
        assert_eq!(store.get(entity(4)), Some(&CollidableKind::Player));
        assert_eq!(store.len(), 4);
        assert_eq!(store.remove(entity(1)), None);

        store.remove(entity(4));
        store.remove(entity(3));
        assert_eq!(store.entities(), &[entity(0), entity(2)]);
    }

    #[test]
    fn test_get_mut_follows_swap_remove() {
        let mut store = ComponentStore::new();
        for id in 0..3 {
            store.insert(entity(id), CollidableKind::Enemy);
        }
        store.remove(entity(0));

        *store.get_mut(entity(2)).unwrap() = CollidableKind::PowerUp;
        assert_eq!(store.get(entity(2)), Some(&CollidableKind::PowerUp));
        assert_eq!(store.get(entity(1)), Some(&CollidableKind::Enemy));
        assert!(store.get_mut(entity(0)).is_none());
    }
}
