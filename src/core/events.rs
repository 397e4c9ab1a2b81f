use crate::core::{BallHandle, ColliderHandle};
use crate::math::Vector3;
use std::collections::VecDeque;

/// Types of ball lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEventType {
    /// A ball has been added to the world
    Added,

    /// A ball has been removed from the world
    Removed,

    /// A ball has fallen asleep
    Slept,

    /// A ball has been woken
    Woken,
}

/// An event related to a single ball
#[derive(Debug, Clone, Copy)]
pub struct BallEvent {
    /// The type of ball event
    pub event_type: BallEventType,

    /// The ball the event refers to
    pub ball: BallHandle,
}

/// The entity a ball collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Another ball
    Ball(BallHandle),

    /// A static collider
    Collider(ColliderHandle),
}

/// A collision resolved during a step
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    /// The ball whose response ran
    pub ball: BallHandle,

    /// What the ball struck
    pub other: ContactKind,

    /// World contact point
    pub point: Vector3,

    /// Unit contact normal
    pub normal: Vector3,

    /// Time into the step at which contact occurred
    pub time_of_impact: f32,
}

/// A queue of simulation events, cleared at the start of every step
#[derive(Debug, Default)]
pub struct EventQueue {
    ball_events: VecDeque<BallEvent>,
    collision_events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            ball_events: VecDeque::new(),
            collision_events: VecDeque::new(),
        }
    }

    /// Adds a ball event to the queue
    pub fn add_ball_event(&mut self, event: BallEvent) {
        self.ball_events.push_back(event);
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Gets the next ball event from the queue
    pub fn next_ball_event(&mut self) -> Option<BallEvent> {
        self.ball_events.pop_front()
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Returns whether there are any ball events in the queue
    pub fn has_ball_events(&self) -> bool {
        !self.ball_events.is_empty()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        !self.collision_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.ball_events.is_empty() && self.collision_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.ball_events.clear();
        self.collision_events.clear();
    }

    /// Iterates the queued ball events without draining them
    pub fn ball_events(&self) -> impl Iterator<Item = &BallEvent> {
        self.ball_events.iter()
    }

    /// Iterates the queued collision events without draining them
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Gets all ball events of a specific type
    pub fn get_ball_events_of_type(&self, event_type: BallEventType) -> Vec<&BallEvent> {
        self.ball_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all collision events involving a specific ball
    pub fn get_collision_events_for_ball(&self, ball: BallHandle) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.ball == ball || e.other == ContactKind::Ball(ball))
            .collect()
    }
}
