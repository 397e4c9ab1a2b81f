use crate::math::Vector3;

/// Result of a swept sphere-vs-sphere test
#[derive(Debug, Clone, Copy)]
pub struct SphereContact {
    /// Time until the surfaces touch. May be negative when the spheres
    /// already overlap; callers decide which window to accept.
    pub time: f32,

    /// World contact point on the surface of the first sphere
    pub point: Vector3,

    /// Unit contact normal, from the second sphere's center toward the first
    pub normal: Vector3,
}

/// Finds the earliest instant at which two moving spheres touch, by solving
/// `|delta_pos + delta_vel * t|^2 = (rad1 + rad2)^2` for `t`.
///
/// Returns `None` when the relative velocity is zero (the center distance
/// never changes) or when the paths never intersect.
pub fn sweep_spheres(
    pos1: Vector3,
    vel1: Vector3,
    rad1: f32,
    pos2: Vector3,
    vel2: Vector3,
    rad2: f32,
) -> Option<SphereContact> {
    let delta_pos = pos2 - pos1;
    let delta_vel = vel2 - vel1;

    let sum_radii = rad1 + rad2;

    let a = delta_vel.dot(&delta_vel);
    let b = 2.0 * delta_pos.dot(&delta_vel);
    let c = delta_pos.dot(&delta_pos) - sum_radii * sum_radii;

    let (t1, t2) = solve_quadratic(a, b, c)?;
    let time = t1.min(t2);

    let center1 = pos1 + vel1 * time;
    let center2 = pos2 + vel2 * time;

    let normal = (center1 - center2).normalize();
    let point = center1 - normal * rad1;

    Some(SphereContact {
        time,
        point,
        normal,
    })
}

/// Returns the two solutions of `a*t*t + b*t + c = 0`, or `None` when the
/// equation degenerates (zero leading coefficient) or has no real roots.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let div = 2.0 * a;
    if div == 0.0 {
        return None;
    }

    let sqr = b * b - 4.0 * a * c;
    if sqr < 0.0 {
        return None;
    }

    let sqrt = sqr.sqrt();
    Some(((-b + sqrt) / div, (-b - sqrt) / div))
}
