use crate::bodies::Ball;
use crate::math::Vector3;

/// The pre-step state of one ball, copied out before any ball is updated.
///
/// Every collision query of a tick reads from these copies rather than the
/// live bodies, which makes the outcome independent of the order the balls
/// are visited in.
#[derive(Debug, Clone, Copy)]
pub struct BallState {
    pub position: Vector3,
    pub velocity: Vector3,
    pub angular_velocity: Vector3,
    pub speed: f32,
    pub radius: f32,
    pub mass: f32,
    pub inertia: f32,
    pub elasticity: f32,
    pub surface_friction: f32,
}

impl BallState {
    /// Copies the collision-relevant state out of a ball
    pub fn capture(ball: &Ball) -> Self {
        Self {
            position: ball.get_position(),
            velocity: ball.get_velocity(),
            angular_velocity: ball.get_angular_velocity(),
            speed: ball.get_velocity().length(),
            radius: ball.get_radius(),
            mass: ball.get_mass(),
            inertia: ball.inertia(),
            elasticity: ball.get_elasticity(),
            surface_friction: ball.get_surface_friction(),
        }
    }
}
