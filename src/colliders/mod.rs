mod mesh;

pub use mesh::StaticMeshCollider;

use crate::collision::SweptContact;
use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Surface properties of a static collider
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SurfaceMaterial {
    /// Coefficient of restitution, 0-1
    pub elasticity: f32,

    /// Coefficient of surface friction, 0-1
    pub surface_friction: f32,
}

impl SurfaceMaterial {
    /// Creates a new surface material, clamping both coefficients to [0, 1]
    pub fn new(elasticity: f32, surface_friction: f32) -> Self {
        Self {
            elasticity: elasticity.clamp(0.0, 1.0),
            surface_friction: surface_friction.clamp(0.0, 1.0),
        }
    }
}

impl Default for SurfaceMaterial {
    fn default() -> Self {
        Self {
            elasticity: 0.7,
            surface_friction: 1.0,
        }
    }
}

/// An immovable collider that moving spheres are swept against. Modeled as a
/// tagged variant so additional collider kinds (plane, box) can share the
/// same query surface later.
#[derive(Debug, Clone)]
pub enum StaticCollider {
    /// A world-space triangle mesh
    Mesh(StaticMeshCollider),
}

impl StaticCollider {
    /// Sweeps a moving sphere against this collider
    pub fn sphere_sweep(
        &self,
        center: Vector3,
        radius: f32,
        velocity: Vector3,
        travel_dist: f32,
    ) -> Option<SweptContact> {
        match self {
            Self::Mesh(mesh) => mesh.sphere_sweep(center, radius, velocity, travel_dist),
        }
    }

    /// Returns the collider's surface material
    pub fn material(&self) -> &SurfaceMaterial {
        match self {
            Self::Mesh(mesh) => mesh.material(),
        }
    }
}

impl From<StaticMeshCollider> for StaticCollider {
    fn from(mesh: StaticMeshCollider) -> Self {
        Self::Mesh(mesh)
    }
}
