use crate::bodies::BallFlags;
use crate::colliders::SurfaceMaterial;
use crate::core::{BallState, SimulationConfig};
use crate::error::PhysicsError;
use crate::math::{Quaternion, Vector3};
use crate::Result;

use std::f32::consts::PI;

/// Spawn parameters for a ball, supplied by the external launcher
#[derive(Debug, Clone, Copy)]
pub struct BallParams {
    /// Initial world position
    pub position: Vector3,

    /// Initial orientation
    pub rotation: Quaternion,

    /// Initial linear velocity
    pub velocity: Vector3,

    /// Initial angular velocity as an axis-angle rate vector, rad/s
    pub angular_velocity: Vector3,

    /// Sphere radius, must be positive
    pub radius: f32,

    /// Body mass, must be positive
    pub mass: f32,

    /// Coefficient of restitution, 0-1
    pub elasticity: f32,

    /// Coefficient of surface friction, 0-1
    pub surface_friction: f32,

    /// Translational drag coefficient (0.47 for a smooth sphere)
    pub air_drag: f32,

    /// Rotational drag coefficient
    pub air_drag_rotational: f32,

    /// Magnus lift constant
    pub magnus_lift: f32,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Quaternion::identity(),
            velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            radius: 0.5,
            mass: 1.0,
            elasticity: 0.7,
            surface_friction: 1.0,
            air_drag: 0.47,
            air_drag_rotational: 1.0,
            magnus_lift: 0.4,
        }
    }
}

impl BallParams {
    /// Derives the mass from a material density and the sphere volume,
    /// the way the launcher sizes its projectiles
    pub fn mass_from_density(mut self, density: f32) -> Self {
        self.mass = density * (4.0 / 3.0) * PI * self.radius.powi(3);
        self
    }
}

/// A dynamic rigid sphere
#[derive(Debug, Clone)]
pub struct Ball {
    /// World position of the center
    position: Vector3,

    /// Orientation, kept normalized after every rotation update
    rotation: Quaternion,

    /// Linear velocity
    velocity: Vector3,

    /// Angular velocity as an axis-angle rate vector, rad/s
    angular_velocity: Vector3,

    radius: f32,
    mass: f32,
    elasticity: f32,
    surface_friction: f32,
    air_drag: f32,
    air_drag_rotational: f32,
    magnus_lift: f32,

    flags: BallFlags,

    /// Time accumulated while the ball stayed within the sleep thresholds
    sleep_timer: f32,

    /// Anchor pose the sleep drift is measured against
    sleep_anchor_pos: Vector3,
    sleep_anchor_rot: Quaternion,
}

impl Ball {
    /// Creates a new ball from spawn parameters, validating the physical
    /// invariants
    pub fn new(params: BallParams) -> Result<Self> {
        if params.radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball radius must be positive, got {}",
                params.radius
            )));
        }
        if params.mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball mass must be positive, got {}",
                params.mass
            )));
        }
        if !(0.0..=1.0).contains(&params.elasticity) {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball elasticity must be in [0, 1], got {}",
                params.elasticity
            )));
        }
        if !(0.0..=1.0).contains(&params.surface_friction) {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball surface friction must be in [0, 1], got {}",
                params.surface_friction
            )));
        }

        Ok(Self {
            position: params.position,
            rotation: params.rotation.normalize(),
            velocity: params.velocity,
            angular_velocity: params.angular_velocity,
            radius: params.radius,
            mass: params.mass,
            elasticity: params.elasticity,
            surface_friction: params.surface_friction,
            air_drag: params.air_drag,
            air_drag_rotational: params.air_drag_rotational,
            magnus_lift: params.magnus_lift,
            flags: BallFlags::CAN_SLEEP,
            sleep_timer: 0.0,
            sleep_anchor_pos: params.position,
            sleep_anchor_rot: params.rotation.normalize(),
        })
    }

    /// Returns the ball's position
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Sets the ball's position
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Returns the ball's orientation
    pub fn get_rotation(&self) -> Quaternion {
        self.rotation
    }

    /// Returns the ball's linear velocity
    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Sets the ball's linear velocity and wakes it
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
        self.wake();
    }

    /// Returns the ball's angular velocity, rad/s
    pub fn get_angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    /// Sets the ball's angular velocity and wakes it
    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) {
        self.angular_velocity = angular_velocity;
        self.wake();
    }

    /// Returns the ball's radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the ball's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Returns the ball's elasticity
    pub fn get_elasticity(&self) -> f32 {
        self.elasticity
    }

    /// Returns the ball's surface friction
    pub fn get_surface_friction(&self) -> f32 {
        self.surface_friction
    }

    /// Returns the sphere volume
    pub fn volume(&self) -> f32 {
        (4.0 / 3.0) * PI * self.radius.powi(3)
    }

    /// Returns the moment of inertia, using the hollow-sphere model
    pub fn inertia(&self) -> f32 {
        (2.0 / 3.0) * self.mass * self.radius * self.radius
    }

    /// Returns the cross-sectional area facing the airflow
    pub fn cross_section_area(&self) -> f32 {
        self.radius * self.radius * PI
    }

    /// Returns whether the ball is sleeping
    pub fn is_sleeping(&self) -> bool {
        self.flags.contains(BallFlags::SLEEPING)
    }

    /// Wakes the ball and resets its still-timer
    pub fn wake(&mut self) {
        self.flags.remove(BallFlags::SLEEPING);
        self.sleep_timer = 0.0;
    }

    /// Puts the ball to sleep immediately, zeroing both velocities
    pub fn put_to_sleep(&mut self) {
        self.flags.insert(BallFlags::SLEEPING);
        self.velocity = Vector3::zero();
        self.angular_velocity = Vector3::zero();
    }

    /// Returns whether the ball is allowed to fall asleep
    pub fn can_sleep(&self) -> bool {
        self.flags.contains(BallFlags::CAN_SLEEP)
    }

    /// Sets whether the ball is allowed to fall asleep
    pub fn set_can_sleep(&mut self, can_sleep: bool) {
        if can_sleep {
            self.flags.insert(BallFlags::CAN_SLEEP);
        } else {
            self.flags.remove(BallFlags::CAN_SLEEP);
            self.wake();
        }
    }

    /// Returns the accumulated still-time
    pub fn get_sleep_timer(&self) -> f32 {
        self.sleep_timer
    }

    /// Integrates one tick of free motion: translation/rotation, air drag,
    /// Magnus lift, gravity, and sleep bookkeeping. Called by the manager
    /// when no collision was found for this ball this tick.
    pub fn update_motion(&mut self, config: &SimulationConfig, dt: f32) {
        let cross_section_area = self.cross_section_area();
        let speed_sqr = self.velocity.length_squared();
        let speed = speed_sqr.sqrt();
        let angular_speed_sqr = self.angular_velocity.length_squared();
        let angular_speed = angular_speed_sqr.sqrt();

        // move and rotate
        self.position += self.velocity * dt;
        self.rotation =
            (Quaternion::from_scaled_rate(self.angular_velocity, dt) * self.rotation).normalize();

        // translational air drag, clamped so it never reverses the motion
        let lin_drag_coeff = config.lin_drag_curve.evaluate(speed);
        let drag_accel = 0.5 * self.air_drag * lin_drag_coeff * config.air_density * speed_sqr
            * cross_section_area
            / self.mass;
        let speed_delta = (drag_accel * dt).clamp(-speed, speed);
        self.velocity -= self.velocity.normalize() * speed_delta;

        // rotational air drag, a crude approximation with a constant
        // rotational drag coefficient
        let rot_drag_coeff = config.rot_drag_curve.evaluate(angular_speed);
        let rot_drag_moment =
            self.air_drag_rotational * rot_drag_coeff * angular_speed_sqr * self.radius.powi(5);
        let rot_drag_accel = rot_drag_moment / self.inertia();
        let rot_speed_delta = (rot_drag_accel * dt).clamp(-angular_speed, angular_speed);
        self.angular_velocity -= self.angular_velocity.normalize() * rot_speed_delta;

        // magnus effect: lift from spinning
        if speed > 0.001 {
            let slip_factor = self.radius * self.angular_velocity.length() / speed;
            let lift_coefficient = slip_factor * self.magnus_lift;
            let force_magnus = 0.5 * lift_coefficient * config.air_density * cross_section_area
                * speed_sqr;
            let dir_magnus = self.angular_velocity.cross(&self.velocity).normalize();
            self.velocity += dir_magnus * (force_magnus * dt / self.mass);
        }

        // gravity
        self.velocity.y -= config.gravity * dt;

        // sleep bookkeeping
        if config.allow_sleeping && self.can_sleep() {
            let drifted = (self.position - self.sleep_anchor_pos).length_squared()
                > config.sleep_radius * config.sleep_radius
                || self.rotation.angle_to(&self.sleep_anchor_rot) > config.sleep_angle;

            if drifted {
                self.flags.remove(BallFlags::SLEEPING);
                self.sleep_timer = 0.0;
                self.sleep_anchor_pos = self.position;
                self.sleep_anchor_rot = self.rotation;
            } else {
                self.sleep_timer += dt;
                if self.sleep_timer > config.fall_asleep_duration {
                    self.flags.insert(BallFlags::SLEEPING);
                    self.velocity = Vector3::zero();
                    self.angular_velocity = Vector3::zero();
                }
            }
        }
    }

    /// Resolves a bounce against an immovable surface. The ball must already
    /// have been advanced to the contact instant.
    pub fn bounce_off_surface(
        &mut self,
        surface: &SurfaceMaterial,
        contact_point: Vector3,
        contact_normal: Vector3,
    ) {
        let combined_elasticity = self.elasticity.max(surface.elasticity);
        let combined_friction = self.surface_friction.min(surface.surface_friction) * 0.5;

        // linear impulse transfer against infinite mass
        let lin_impact_speed = self.velocity.dot(&contact_normal);
        let effective_mass = (1.0 + combined_elasticity) * self.mass;
        let impulse = contact_normal * (lin_impact_speed * effective_mass);
        self.velocity -= impulse / self.mass;

        // angular momentum transfer from contact-point slip
        let contact_vec = contact_point - self.position;
        let contact_vel_from_rot = self.angular_velocity.cross(&contact_vec);
        let delta_contact_vel = self.velocity + contact_vel_from_rot;
        let rot_impulse_normal = -delta_contact_vel.normalize();

        let contact_cross = contact_vec.cross(&rot_impulse_normal);
        let rot_impact_speed = self.velocity.dot(&rot_impulse_normal)
            + self.angular_velocity.dot(&contact_cross);

        let denom = 1.0 / self.mass + contact_cross.dot(&contact_cross) / self.inertia();
        if crate::math::approx_zero(denom) {
            return;
        }

        let effective_rot_mass = (1.0 + combined_elasticity) / denom;
        let rot_impulse =
            rot_impulse_normal * (rot_impact_speed * effective_rot_mass * combined_friction);
        self.angular_velocity += rot_impulse.cross(&contact_vec) / self.inertia();
    }

    /// Resolves a bounce against another ball, read from the pre-step
    /// snapshot. Only this ball's velocities change; the other ball applies
    /// its own half of the exchange when its own response runs within the
    /// same tick.
    pub fn bounce_off_ball(
        &mut self,
        other: &BallState,
        contact_point: Vector3,
        contact_normal: Vector3,
        time_till_coll: f32,
    ) {
        let combined_elasticity = self.elasticity.max(other.elasticity);
        let combined_friction = self.surface_friction.min(other.surface_friction) * 0.5;

        let pos_other = other.position + other.velocity * time_till_coll;

        // linear impulse transfer
        let delta_vel = self.velocity - other.velocity;
        let lin_impact_speed = delta_vel.dot(&contact_normal);

        let lin_denom = 1.0 / self.mass + 1.0 / other.mass;
        if crate::math::approx_zero(lin_denom) {
            return;
        }

        let effective_mass = (1.0 + combined_elasticity) / lin_denom;
        let impulse = contact_normal * (lin_impact_speed * effective_mass);
        self.velocity -= impulse / self.mass;

        // angular momentum transfer
        let contact_vec_me = contact_point - self.position;
        let contact_vec_other = contact_point - pos_other;

        let contact_vel_from_rot_me = self.angular_velocity.cross(&contact_vec_me);
        let contact_vel_from_rot_other = other.angular_velocity.cross(&contact_vec_other);

        let delta_contact_vel = delta_vel + (contact_vel_from_rot_me - contact_vel_from_rot_other);
        let rot_impulse_normal = -delta_contact_vel.normalize();

        let contact_cross_me = contact_vec_me.cross(&rot_impulse_normal);
        let contact_cross_other = contact_vec_other.cross(&rot_impulse_normal);

        let rot_impact_speed = delta_vel.dot(&rot_impulse_normal)
            + (self.angular_velocity.dot(&contact_cross_me)
                - other.angular_velocity.dot(&contact_cross_other));

        let rot_denom = 1.0 / self.mass
            + 1.0 / other.mass
            + contact_cross_me.dot(&contact_cross_me) / self.inertia()
            + contact_cross_other.dot(&contact_cross_other) / other.inertia;
        if crate::math::approx_zero(rot_denom) {
            return;
        }

        let effective_rot_mass = (1.0 + combined_elasticity) / rot_denom;
        let rot_impulse =
            rot_impulse_normal * (rot_impact_speed * effective_rot_mass * combined_friction);

        self.angular_velocity += rot_impulse.cross(&contact_vec_me) / self.inertia();
    }
}
