use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A triangle in world space with a precomputed outward unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Triangle {
    pub p1: Vector3,
    pub p2: Vector3,
    pub p3: Vector3,

    /// The unit normal, computed once from the winding of the vertices
    pub normal: Vector3,
}

impl Triangle {
    /// Creates a new triangle. The normal is the normalized cross product of
    /// the first two edges; a zero-area triangle yields a zero normal, which
    /// callers may use to reject it.
    pub fn new(p1: Vector3, p2: Vector3, p3: Vector3) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1)).normalize();

        Self { p1, p2, p3, normal }
    }

    /// Returns the vertex with the given index (0, 1, or 2)
    #[inline]
    pub fn point(&self, index: usize) -> Vector3 {
        match index {
            0 => self.p1,
            1 => self.p2,
            _ => self.p3,
        }
    }

    /// Returns true if the triangle has (approximately) zero area
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal.is_zero()
    }

    /// Returns the area of the triangle
    pub fn area(&self) -> f32 {
        (self.p2 - self.p1).cross(&(self.p3 - self.p1)).length() * 0.5
    }

    /// Returns the centroid of the triangle
    pub fn center(&self) -> Vector3 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }
}
