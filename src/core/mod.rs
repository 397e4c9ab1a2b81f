pub mod config;
pub mod curve;
pub mod events;
pub mod snapshot;
pub mod storage;
pub mod timing;
pub mod world;

pub use self::config::SimulationConfig;
pub use self::curve::CoefficientCurve;
pub use self::events::{BallEvent, BallEventType, CollisionEvent, ContactKind, EventQueue};
pub use self::snapshot::BallState;
pub use self::storage::{BallSet, ColliderSet, Storage};
pub use self::timing::{StepTimings, Stopwatch};
pub use self::world::PhysicsWorld;

/// A unique identifier for a ball in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallHandle(pub(crate) u32);

/// A unique identifier for a static collider in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub(crate) u32);
