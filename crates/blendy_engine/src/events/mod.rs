//! Per-tick collision event stream
//!
//! The collision pass writes here and gameplay resolution drains it. Events
//! always arrive in symmetric pairs, and one entity may be the subject of any
//! number of events in a tick (a player hit by three bullets gets three).

use crate::ecs::Entity;

/// One side of a detected collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    /// Entity the event is delivered to
    pub subject: Entity,
    /// Entity it collided with
    pub other: Entity,
}

impl CollisionEvent {
    /// Create an event
    pub fn new(subject: Entity, other: Entity) -> Self {
        Self { subject, other }
    }

    /// The same collision seen from the other entity
    pub fn reversed(&self) -> Self {
        Self::new(self.other, self.subject)
    }
}

/// Multi-map of collision events keyed by subject, in insertion order
#[derive(Debug, Clone, Default)]
pub struct CollisionEvents {
    events: Vec<CollisionEvent>,
}

impl CollisionEvents {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event even if `subject` already has one
    pub fn emplace_with_duplicates(&mut self, subject: Entity, other: Entity) {
        self.events.push(CollisionEvent::new(subject, other));
    }

    /// Record a collision between `a` and `b` as `(a, b)` followed by `(b, a)`
    pub fn record_pair(&mut self, a: Entity, b: Entity) {
        self.emplace_with_duplicates(a, b);
        self.emplace_with_duplicates(b, a);
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are stored
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate events in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CollisionEvent> {
        self.events.iter()
    }

    /// Events delivered to `subject`
    pub fn for_subject(&self, subject: Entity) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter().filter(move |event| event.subject == subject)
    }

    /// Whether `(subject, other)` was recorded
    pub fn contains(&self, subject: Entity, other: Entity) -> bool {
        self.events.contains(&CollisionEvent::new(subject, other))
    }

    /// Take every event, leaving the store empty
    pub fn drain(&mut self) -> std::vec::Drain<'_, CollisionEvent> {
        self.events.drain(..)
    }

    /// Drop every event
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<'a> IntoIterator for &'a CollisionEvents {
    type Item = &'a CollisionEvent;
    type IntoIter = std::slice::Iter<'a, CollisionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities() -> (Entity, Entity, Entity) {
        (Entity::new(1), Entity::new(2), Entity::new(3))
    }

    #[test]
    fn test_record_pair_is_symmetric() {
        let (a, b, _) = entities();
        let mut events = CollisionEvents::new();
        events.record_pair(a, b);

        let recorded: Vec<_> = events.iter().copied().collect();
        assert_eq!(recorded, vec![CollisionEvent::new(a, b), CollisionEvent::new(b, a)]);
        assert_eq!(recorded[0].reversed(), recorded[1]);
    }

    #[test]
    fn test_duplicate_subjects_are_kept() {
        let (player, bullet_1, bullet_2) = entities();
        let mut events = CollisionEvents::new();
        events.record_pair(player, bullet_1);
        events.record_pair(player, bullet_2);

        let hits: Vec<_> = events.for_subject(player).map(|event| event.other).collect();
        assert_eq!(hits, vec![bullet_1, bullet_2]);
        assert_eq!(events.len(), 4);

        // Even the exact same record may appear twice
        events.emplace_with_duplicates(player, bullet_1);
        assert_eq!(events.for_subject(player).count(), 3);
    }

    #[test]
    fn test_drain_empties_store() {
        let (a, b, c) = entities();
        let mut events = CollisionEvents::new();
        events.record_pair(a, b);
        assert!(events.contains(b, a));
        assert!(!events.contains(a, c));

        let drained: Vec<_> = events.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(events.is_empty());
    }
}
