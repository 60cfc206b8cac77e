//! Entity-Component-System implementation
//!
//! A deliberately small ECS: entities are plain ids and every component type
//! lives in its own insertion-ordered [`ComponentStore`]. The collision core
//! only reads from it.

pub mod world;
pub mod entity;
pub mod component;
pub mod storage;
pub mod components;

pub use world::World;
pub use entity::Entity;
pub use component::Component;
pub use storage::ComponentStore;
