pub mod math;
pub mod geometry;
pub mod collision;
pub mod colliders;
pub mod bodies;
pub mod core;

/// Re-export common types for easier usage
pub use crate::bodies::{Ball, BallParams};
pub use crate::colliders::{StaticCollider, StaticMeshCollider, SurfaceMaterial};
pub use crate::core::{BallHandle, ColliderHandle, PhysicsWorld, SimulationConfig};
pub use crate::math::Vector3;

/// Error types for the simulation
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
