pub mod sphere_sphere;
pub mod sphere_triangle;

pub use sphere_sphere::{sweep_spheres, SphereContact};
pub use sphere_triangle::{sweep_sphere_triangle, TriangleHit};

use crate::math::Vector3;

/// A contact reported by a collider swept-sphere query, with the travel
/// distance already converted to a time within the step
#[derive(Debug, Clone, Copy)]
pub struct SweptContact {
    /// Time until contact, in seconds
    pub time: f32,

    /// World contact point on the sphere surface
    pub point: Vector3,

    /// Unit contact normal
    pub normal: Vector3,
}
