//! Motion integration

use crate::ecs::World;

/// Advance every entity by its velocity over `elapsed_ms` milliseconds
///
/// Velocities are in world units per second.
pub fn integrate_motions(world: &mut World, elapsed_ms: f32) {
    let step_seconds = elapsed_ms / 1000.0;
    for (_, motion) in world.motions.iter_mut() {
        motion.position += motion.velocity * step_seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Motion;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_motions() {
        let mut world = World::new();
        let moving = world.spawn_decoration(Motion::default().with_velocity(Vec2::new(100.0, -50.0)));
        let still = world.spawn_decoration(Motion::new(Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0)));

        integrate_motions(&mut world, 20.0);

        assert_relative_eq!(world.motions.get(moving).unwrap().position, Vec2::new(2.0, -1.0), epsilon = 1e-5);
        assert_relative_eq!(world.motions.get(still).unwrap().position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_zero_elapsed_time() {
        let mut world = World::new();
        let entity = world.spawn_decoration(Motion::default().with_velocity(Vec2::new(5.0, 5.0)));
        integrate_motions(&mut world, 0.0);
        assert_relative_eq!(world.motions.get(entity).unwrap().position, Vec2::zeros());
    }
}
