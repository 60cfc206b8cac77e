//! Component trait and implementations

/// Marker trait for components
pub trait Component: 'static + Send + Sync {}

impl Component for crate::ecs::components::Motion {}
impl Component for crate::ecs::components::CollidableKind {}
impl Component for crate::assets::MeshHandle {}
