use crate::geometry::{Plane, Triangle};
use crate::math::{Vector2, Vector3};

/// Result of a swept sphere-vs-triangle test
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    /// Distance traveled along the sweep direction until contact
    pub distance: f32,

    /// Unit contact normal at the hit
    pub normal: Vector3,
}

/// Sweep directions less opposed to the triangle normal than this are
/// treated as moving away or parallel
const OPPOSING_EPSILON: f32 = 1.0e-3;

/// Sweeps a moving sphere against a static triangle and returns the travel
/// distance until contact, testing the face, the three vertices, and the
/// three edges independently and keeping the smallest valid distance.
pub fn sweep_sphere_triangle(
    center: Vector3,
    radius: f32,
    velocity: Vector3,
    tri: &Triangle,
) -> Option<TriangleHit> {
    let nvelo = velocity.normalize();

    if tri.normal.dot(&nvelo) > -OPPOSING_EPSILON {
        return None;
    }

    let mut dist_travel = f32::MAX;
    let mut coll_normal = Vector3::zero();
    let mut hit = false;

    // pass 1: sphere vs the triangle's plane
    let plane = Plane::from_point_normal(tri.p1, tri.normal);

    let mut h = plane.distance(center);
    if h < -radius {
        return None;
    }

    if h > radius {
        h -= radius;
        let dot = tri.normal.dot(&nvelo);
        if dot != 0.0 {
            let t = -h / dot;
            let on_plane = center + nvelo * t;
            if point_inside_triangle(tri.p1, tri.p2, tri.p3, on_plane) && t < dist_travel {
                dist_travel = t;
                coll_normal = tri.normal;
                hit = true;
            }
        }
    }

    // pass 2: sphere vs the triangle's vertices
    for i in 0..3 {
        let seg_pt0 = tri.point(i);
        let seg_pt1 = seg_pt0 - nvelo;
        let v = seg_pt1 - seg_pt0;

        let Some((inter1, inter2)) = intersect_sphere_line(center, radius, seg_pt0, seg_pt1)
        else {
            continue;
        };

        let t = inter1.min(inter2);
        if t < 0.0 {
            continue;
        }

        if t < dist_travel {
            dist_travel = t;
            let on_sphere = seg_pt0 + v * t;
            coll_normal = center - on_sphere;
            hit = true;
        }
    }

    // pass 3: sphere vs the triangle's edges
    for i in 0..3 {
        let edge0 = tri.point(i);
        let edge1 = tri.point((i + 1) % 3);

        // the plane containing the edge, swept along the travel direction
        let plane = Plane::from_points(edge0, edge1, edge1 - nvelo);

        let d = plane.distance(center);
        if d > radius || d < -radius {
            continue;
        }

        // radius of the circle where that plane slices the sphere
        let r = (radius * radius - d * d).sqrt();

        let pt0 = plane.project(center);

        let (_, on_line) = distance_point_to_line(pt0, edge0, edge1);
        let v = (on_line - pt0).normalize();
        let pt1 = pt0 + v * r;

        let (a0, a1) = dominant_axes(plane.normal);

        let vv = pt1 + nvelo;

        let Some(t) = intersect_line_line(
            Vector2::new(pt1.component(a0), pt1.component(a1)),
            Vector2::new(vv.component(a0), vv.component(a1)),
            Vector2::new(edge0.component(a0), edge0.component(a1)),
            Vector2::new(edge1.component(a0), edge1.component(a1)),
        ) else {
            continue;
        };

        if t < 0.0 {
            continue;
        }

        let inter = pt1 + nvelo * t;

        // the hit must lie between the edge endpoints
        let r1 = edge0 - inter;
        let r2 = edge1 - inter;
        if r1.dot(&r2) > 0.0 {
            continue;
        }

        if t > dist_travel {
            continue;
        }

        dist_travel = t;
        coll_normal = center - pt1;
        hit = true;
    }

    if !hit {
        return None;
    }

    Some(TriangleHit {
        distance: dist_travel,
        normal: coll_normal.normalize(),
    })
}

/// Barycentric containment test for a point against a triangle
fn point_inside_triangle(vertex0: Vector3, vertex1: Vector3, vertex2: Vector3, pt: Vector3) -> bool {
    let u = vertex1 - vertex0;
    let v = vertex2 - vertex0;
    let w = pt - vertex0;

    let uu = u.dot(&u);
    let uv = u.dot(&v);
    let vv = v.dot(&v);
    let wu = w.dot(&u);
    let wv = w.dot(&v);

    let d = uv * uv - uu * vv;
    if crate::math::approx_zero(d) {
        return false;
    }

    let inv_d = 1.0 / d;
    let s = (uv * wv - vv * wu) * inv_d;
    if !(0.0..=1.0).contains(&s) {
        return false;
    }

    let t = (uv * wu - uu * wv) * inv_d;
    if t < 0.0 || (s + t) > 1.0 {
        return false;
    }

    true
}

/// Intersects the line through `pt0` and `pt1` with a sphere, returning the
/// two parametric solutions (equal when the line is tangent)
fn intersect_sphere_line(
    center: Vector3,
    radius: f32,
    pt0: Vector3,
    pt1: Vector3,
) -> Option<(f32, f32)> {
    let d = pt1 - pt0;
    let m = pt0 - center;

    let a = d.dot(&d);
    let b = 2.0 * d.dot(&m);
    let c = m.dot(&m) - radius * radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    if disc == 0.0 {
        let t = -b / (2.0 * a);
        return Some((t, t));
    }

    let sqrt = disc.sqrt();
    Some(((-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a)))
}

/// Returns the distance from a point to the infinite line through `pt0` and
/// `pt1`, along with the closest point on that line
fn distance_point_to_line(point: Vector3, pt0: Vector3, pt1: Vector3) -> (f32, Vector3) {
    let mut v = point - pt0;
    let s = pt1 - pt0;

    let len_sq = s.length_squared();
    let dot = v.dot(&s) / len_sq;
    let disp = s * dot;
    let line_pt = pt0 + disp;
    v -= disp;

    (v.length(), line_pt)
}

/// 2D intersection of the line `p1->p2` with the line `p3->p4`, returning
/// the parameter along `p1->p2`, or `None` when the lines are parallel
fn intersect_line_line(p1: Vector2, p2: Vector2, p3: Vector2, p4: Vector2) -> Option<f32> {
    let d1 = p2 - p1;
    let d2 = p3 - p4;

    let denom = d2.y * d1.x - d2.x * d1.y;
    if denom == 0.0 {
        return None;
    }

    let dist = d2.x * (p1.y - p3.y) - d2.y * (p1.x - p3.x);
    Some(dist / denom)
}

/// Picks the two axes spanning the 2D plane the slice geometry projects onto,
/// dropping the axis where the plane normal is largest
fn dominant_axes(normal: Vector3) -> (usize, usize) {
    let pl_x = normal.x.abs();
    let pl_y = normal.y.abs();
    let pl_z = normal.z.abs();

    if pl_x > pl_y && pl_x > pl_z {
        (1, 2)
    } else if pl_y > pl_z {
        (0, 2)
    } else {
        (0, 1)
    }
}
