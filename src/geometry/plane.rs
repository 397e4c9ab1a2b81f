use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Default epsilon for the point-on-plane test
pub const ON_PLANE_THRESHOLD: f32 = 1.0e-3;

/// An infinite plane stored as a unit normal and an offset, such that the
/// signed distance of a point `p` is `normal · p + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The unit normal of the plane
    pub normal: Vector3,

    /// The plane offset along the normal
    pub offset: f32,
}

impl Plane {
    /// Creates a plane from a normal and offset
    #[inline]
    pub fn new(normal: Vector3, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// Creates a plane passing through three points
    pub fn from_points(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        let v0 = p0 - p1;
        let v1 = p2 - p1;
        let normal = v1.cross(&v0).normalize();

        Self {
            normal,
            offset: -p0.dot(&normal),
        }
    }

    /// Creates a plane passing through a point with the given normal
    pub fn from_point_normal(point: Vector3, normal: Vector3) -> Self {
        let normal = normal.normalize();

        Self {
            normal,
            offset: -point.dot(&normal),
        }
    }

    /// Returns the dot product of the plane normal with a direction
    #[inline]
    pub fn dot(&self, direction: &Vector3) -> f32 {
        self.normal.dot(direction)
    }

    /// Returns the signed distance of a point to the plane
    #[inline]
    pub fn distance(&self, point: Vector3) -> f32 {
        self.normal.dot(&point) + self.offset
    }

    /// Reflects a point about the plane
    pub fn reflect(&self, point: Vector3) -> Vector3 {
        let d = self.distance(point);
        point + (-self.normal) * (2.0 * d)
    }

    /// Projects a point onto the plane
    pub fn project(&self, point: Vector3) -> Vector3 {
        let h = self.distance(point);
        point - self.normal * h
    }

    /// Returns true if the point lies on the plane within the default epsilon
    #[inline]
    pub fn is_on_plane(&self, point: Vector3) -> bool {
        self.is_on_plane_with(point, ON_PLANE_THRESHOLD)
    }

    /// Returns true if the point lies on the plane within the given epsilon
    pub fn is_on_plane_with(&self, point: Vector3, threshold: f32) -> bool {
        let d = self.distance(point);
        d < threshold && d > -threshold
    }

    /// Calculates the intersection parameter `t` between this plane and the
    /// line through `p0` and `p1`. Returns `None` when the line is parallel
    /// to the plane.
    pub fn intersect_line(&self, p0: Vector3, p1: Vector3) -> Option<f32> {
        let dir = p1 - p0;
        let div = self.dot(&dir);
        if crate::math::approx_zero(div) {
            return None;
        }

        Some(-self.distance(p0) / div)
    }
}
