use crate::bodies::Ball;
use crate::colliders::StaticCollider;
use crate::collision::sweep_spheres;
use crate::core::events::{BallEvent, BallEventType, CollisionEvent, ContactKind, EventQueue};
use crate::core::snapshot::BallState;
use crate::core::storage::{BallSet, ColliderSet, Storage};
use crate::core::timing::{StepTimings, Stopwatch};
use crate::core::{BallHandle, ColliderHandle, SimulationConfig};
use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::Result;

/// What the earliest contact of a ball's sweep was against
#[derive(Debug, Clone, Copy)]
enum Struck {
    /// A static collider, by handle
    Collider(ColliderHandle),

    /// Another ball, by snapshot index
    Ball(usize),
}

/// The simulation manager: owns the ball and collider registries and
/// advances the whole scene by fixed time steps.
///
/// Each step snapshots every ball's state, then updates the balls in
/// registration order in two phases. All collision queries read from the
/// snapshot, so the outcome of a tick does not depend on that order.
pub struct PhysicsWorld {
    /// All balls, in registration order
    balls: BallSet<Ball>,

    /// All static colliders
    colliders: ColliderSet<StaticCollider>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Queue of simulation events, refilled every step
    events: EventQueue,

    /// The total elapsed simulation time
    time: f32,

    /// Pre-step state of every ball; grown on demand, reused across steps
    snapshot: Vec<BallState>,

    /// Indices of balls woken during the first phase that still need their
    /// own update this tick
    second_phase: Vec<usize>,

    stopwatch_total: Stopwatch,
    stopwatch_mesh: Stopwatch,
    stopwatch_sphere: Stopwatch,

    /// Number of sleeping balls at the start of the last step
    sleeping_ball_count: usize,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            balls: BallSet::new(),
            colliders: ColliderSet::new(),
            config,
            events: EventQueue::new(),
            time: 0.0,
            snapshot: Vec::new(),
            second_phase: Vec::new(),
            stopwatch_total: Stopwatch::new(),
            stopwatch_mesh: Stopwatch::new(),
            stopwatch_sphere: Stopwatch::new(),
            sleeping_ball_count: 0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Adds a ball to the world and returns its handle
    pub fn add_ball(&mut self, ball: Ball) -> BallHandle {
        let handle = self.balls.add(ball);

        self.events.add_ball_event(BallEvent {
            event_type: BallEventType::Added,
            ball: handle,
        });

        handle
    }

    /// Removes a ball from the world
    pub fn remove_ball(&mut self, handle: BallHandle) -> Result<Ball> {
        let ball = self.balls.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("ball with handle {:?} not found", handle))
        })?;

        self.events.add_ball_event(BallEvent {
            event_type: BallEventType::Removed,
            ball: handle,
        });

        Ok(ball)
    }

    /// Gets a reference to a ball by its handle
    pub fn get_ball(&self, handle: BallHandle) -> Result<&Ball> {
        self.balls.get_ball(handle)
    }

    /// Gets a mutable reference to a ball by its handle
    pub fn get_ball_mut(&mut self, handle: BallHandle) -> Result<&mut Ball> {
        self.balls.get_ball_mut(handle)
    }

    /// Iterates all live balls in registration order
    pub fn iter_balls(&self) -> impl Iterator<Item = (BallHandle, &Ball)> {
        self.balls.iter()
    }

    /// Adds a static collider to the world and returns its handle
    pub fn add_collider(&mut self, collider: StaticCollider) -> ColliderHandle {
        self.colliders.add(collider)
    }

    /// Gets a reference to a collider by its handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Result<&StaticCollider> {
        self.colliders.get_collider(handle)
    }

    /// Returns the number of live balls
    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    /// Returns the number of balls that were asleep at the start of the
    /// last step
    pub fn sleeping_ball_count(&self) -> usize {
        self.sleeping_ball_count
    }

    /// Returns the number of registered colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Returns the timing samples of the most recent step
    pub fn timings(&self) -> StepTimings {
        StepTimings {
            total: self.stopwatch_total.elapsed(),
            mesh_collision: self.stopwatch_mesh.elapsed(),
            sphere_collision: self.stopwatch_sphere.elapsed(),
        }
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Removes all balls and colliders and resets the clock
    pub fn clear(&mut self) {
        self.balls.clear();
        self.colliders.clear();
        self.events.clear();
        self.snapshot.clear();
        self.second_phase.clear();
        self.time = 0.0;
        self.sleeping_ball_count = 0;
    }

    /// Advances the simulation by one fixed time step
    pub fn step(&mut self, dt: f32) {
        self.events.clear();

        self.stopwatch_total.restart();
        self.stopwatch_mesh.reset();
        self.stopwatch_sphere.reset();

        // copy every ball's state into the snapshot before any updates run;
        // all collision queries of this tick read from these copies
        self.snapshot.clear();
        self.snapshot
            .extend(self.balls.iter().map(|(_, ball)| BallState::capture(ball)));

        self.sleeping_ball_count = self
            .balls
            .iter()
            .filter(|(_, ball)| ball.is_sleeping())
            .count();

        // first phase: every ball, in registration order
        let mut second_phase = std::mem::take(&mut self.second_phase);
        second_phase.clear();

        for index in 0..self.snapshot.len() {
            self.update_ball(index, dt, Some(&mut second_phase));
        }

        // second phase: balls woken after their first-phase slot had passed
        for k in 0..second_phase.len() {
            self.update_ball(second_phase[k], dt, None);
        }
        self.second_phase = second_phase;

        self.remove_out_of_bounds();

        self.stopwatch_total.stop();
        self.time += dt;
    }

    /// Searches the earliest collision of one ball within the tick and
    /// either resolves it or integrates free motion for the full step.
    fn update_ball(&mut self, index: usize, dt: f32, second_phase: Option<&mut Vec<usize>>) {
        match self.balls.get_at(index) {
            Some(ball) if !ball.is_sleeping() => {}
            _ => return,
        }

        let Some(ball_handle) = self.balls.handle_at(index) else {
            return;
        };

        let state = self.snapshot[index];

        let mut time_till_coll = f32::MAX;
        let mut contact_point = Vector3::zero();
        let mut contact_normal = Vector3::zero();
        let mut struck: Option<Struck> = None;

        // brute-force sweep against every static collider in the scene
        self.stopwatch_mesh.start();

        let travel = state.speed * dt;
        for (collider_handle, collider) in self.colliders.iter() {
            if let Some(contact) =
                collider.sphere_sweep(state.position, state.radius, state.velocity, travel)
            {
                if contact.time >= 0.0 && contact.time <= dt && contact.time < time_till_coll {
                    time_till_coll = contact.time;
                    contact_point = contact.point;
                    contact_normal = contact.normal;
                    struck = Some(Struck::Collider(collider_handle));
                }
            }
        }

        self.stopwatch_mesh.stop();

        // brute-force sweep against every other ball, via the snapshot
        self.stopwatch_sphere.start();

        for (j, other) in self.snapshot.iter().enumerate() {
            if j == index {
                continue;
            }

            if let Some(contact) = sweep_spheres(
                state.position,
                state.velocity,
                state.radius,
                other.position,
                other.velocity,
                other.radius,
            ) {
                if contact.time >= 0.0 && contact.time <= dt && contact.time < time_till_coll {
                    time_till_coll = contact.time;
                    contact_point = contact.point;
                    contact_normal = contact.normal;
                    struck = Some(Struck::Ball(j));
                }
            }
        }

        self.stopwatch_sphere.stop();

        match struck {
            Some(Struck::Collider(collider_handle)) => {
                let Ok(collider) = self.colliders.get_collider(collider_handle) else {
                    return;
                };
                let material = *collider.material();

                if let Some(ball) = self.balls.get_at_mut(index) {
                    // move normally until the moment of contact
                    ball.set_position(ball.get_position() + state.velocity * time_till_coll);
                    ball.bounce_off_surface(&material, contact_point, contact_normal);
                }

                self.events.add_collision_event(CollisionEvent {
                    ball: ball_handle,
                    other: ContactKind::Collider(collider_handle),
                    point: contact_point,
                    normal: contact_normal,
                    time_of_impact: time_till_coll,
                });
            }
            Some(Struck::Ball(j)) => {
                let other_state = self.snapshot[j];

                if let Some(ball) = self.balls.get_at_mut(index) {
                    // move normally until the moment of contact
                    ball.set_position(ball.get_position() + state.velocity * time_till_coll);
                    ball.bounce_off_ball(&other_state, contact_point, contact_normal, time_till_coll);
                }

                // wake the struck ball; if its first-phase slot already
                // passed it still needs an update this tick, so schedule it
                // into the second phase
                let other_handle = self.balls.handle_at(j);
                if let Some(other) = self.balls.get_at_mut(j) {
                    if other.is_sleeping() {
                        other.wake();

                        if let Some(handle) = other_handle {
                            self.events.add_ball_event(BallEvent {
                                event_type: BallEventType::Woken,
                                ball: handle,
                            });
                        }

                        if let Some(second_phase) = second_phase {
                            if j < index {
                                second_phase.push(j);
                            }
                        }
                    }
                }

                if let Some(handle) = other_handle {
                    self.events.add_collision_event(CollisionEvent {
                        ball: ball_handle,
                        other: ContactKind::Ball(handle),
                        point: contact_point,
                        normal: contact_normal,
                        time_of_impact: time_till_coll,
                    });
                }
            }
            None => {
                // no collision: integrate free motion for the full step
                if let Some(ball) = self.balls.get_at_mut(index) {
                    ball.update_motion(&self.config, dt);

                    if ball.is_sleeping() {
                        self.events.add_ball_event(BallEvent {
                            event_type: BallEventType::Slept,
                            ball: ball_handle,
                        });
                    }
                }
            }
        }
    }

    /// Removes balls that left the world bounds or fell below the floor,
    /// and evicts the oldest balls while the population exceeds the cap
    fn remove_out_of_bounds(&mut self) {
        let bounds_sq = self.config.bounds_radius * self.config.bounds_radius;

        let mut index = 0;
        while index < self.balls.len() {
            let over_cap = self.balls.len() > self.config.max_ball_count;

            let out_of_bounds = match self.balls.get_at(index) {
                Some(ball) => {
                    let position = ball.get_position();
                    position.y < self.config.floor_limit
                        || position.length_squared() > bounds_sq
                }
                None => false,
            };

            if over_cap || out_of_bounds {
                let (handle, _) = self.balls.remove_at(index);
                self.events.add_ball_event(BallEvent {
                    event_type: BallEventType::Removed,
                    ball: handle,
                });
            } else {
                index += 1;
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
