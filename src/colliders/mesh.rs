use crate::collision::{sweep_sphere_triangle, SweptContact, TriangleHit};
use crate::colliders::SurfaceMaterial;
use crate::error::PhysicsError;
use crate::geometry::{Aabb, Triangle};
use crate::math::Vector3;
use crate::Result;

/// Tolerance added to the broad-phase sweep reach
const BROAD_PHASE_MARGIN: f32 = 1.0e-3;

/// An immovable triangulated surface. Geometry is fixed in world space at
/// construction time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct StaticMeshCollider {
    /// World-space triangles, normals pointing away from the solid side
    triangles: Vec<Triangle>,

    /// Bounding box around all triangles, for broad-phase rejection
    bounds: Aabb,

    /// The collider's surface properties
    material: SurfaceMaterial,
}

impl StaticMeshCollider {
    /// Creates a collider from world-space triangles. Degenerate (zero-area)
    /// triangles are skipped; at least one usable triangle is required.
    pub fn from_triangles(
        triangles: impl IntoIterator<Item = Triangle>,
        material: SurfaceMaterial,
    ) -> Result<Self> {
        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .filter(|tri| !tri.is_degenerate())
            .collect();

        if triangles.is_empty() {
            return Err(PhysicsError::InvalidParameter(
                "mesh collider requires at least one non-degenerate triangle".to_string(),
            ));
        }

        let mut bounds = Aabb::new(triangles[0].p1, triangles[0].p1);
        for tri in &triangles {
            bounds.expand_to_include_point(tri.p1);
            bounds.expand_to_include_point(tri.p2);
            bounds.expand_to_include_point(tri.p3);
        }

        Ok(Self {
            triangles,
            bounds,
            material,
        })
    }

    /// Creates a collider from a vertex buffer and a flat index list, three
    /// indices per triangle
    pub fn from_vertices_indices(
        vertices: &[Vector3],
        indices: &[u32],
        material: SurfaceMaterial,
    ) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(PhysicsError::InvalidParameter(
                "index count must be a multiple of 3".to_string(),
            ));
        }

        if indices.iter().any(|&i| i as usize >= vertices.len()) {
            return Err(PhysicsError::InvalidParameter(
                "triangle index out of range".to_string(),
            ));
        }

        let triangles = indices.chunks_exact(3).map(|chunk| {
            Triangle::new(
                vertices[chunk[0] as usize],
                vertices[chunk[1] as usize],
                vertices[chunk[2] as usize],
            )
        });

        Self::from_triangles(triangles, material)
    }

    /// Returns the stored triangles
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the number of stored triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the bounding box of the collider
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns the collider's surface material
    pub fn material(&self) -> &SurfaceMaterial {
        &self.material
    }

    /// Sweeps a moving sphere against this collider.
    ///
    /// `travel_dist` is how far the sphere moves this step; it bounds the
    /// broad-phase reach. Returns the earliest contact with the travel
    /// distance converted to a time, or `None` when nothing is hit or the
    /// sphere is not moving.
    pub fn sphere_sweep(
        &self,
        center: Vector3,
        radius: f32,
        velocity: Vector3,
        travel_dist: f32,
    ) -> Option<SweptContact> {
        let reach = radius + travel_dist + BROAD_PHASE_MARGIN;
        if self.bounds.squared_distance_to_point(center) > reach * reach {
            return None;
        }

        let mut best: Option<TriangleHit> = None;
        for tri in &self.triangles {
            if let Some(hit) = sweep_sphere_triangle(center, radius, velocity, tri) {
                if best.map_or(true, |b| hit.distance < b.distance) {
                    best = Some(hit);
                }
            }
        }

        let hit = best?;

        let speed = velocity.length();
        if crate::math::approx_zero(speed) {
            return None;
        }

        let dir = velocity / speed;
        let point = center + dir * hit.distance - hit.normal * radius;

        Some(SweptContact {
            time: hit.distance / speed,
            point,
            normal: hit.normal,
        })
    }
}
