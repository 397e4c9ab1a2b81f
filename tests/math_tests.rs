use approx::assert_relative_eq;
use ballsim::geometry::{Aabb, Plane, Triangle};
use ballsim::math::{Quaternion, Vector3};
use std::f32::consts::PI;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);
    assert_eq!(sum.z, 9.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);
    assert_eq!(diff.z, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    assert_eq!(scaled.z, 6.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Cross product
    let cross = v1.cross(&v2);
    assert_eq!(cross.x, v1.y * v2.z - v1.z * v2.y);
    assert_eq!(cross.y, v1.z * v2.x - v1.x * v2.z);
    assert_eq!(cross.z, v1.x * v2.y - v1.y * v2.x);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32.powi(2) + 2.0f32.powi(2) + 3.0f32.powi(2)).sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);
    assert_relative_eq!(normalized.z, v1.z / length);

    // Normalizing a zero vector must not divide by zero
    let zero = Vector3::zero().normalize();
    assert!(zero.is_zero());
}

#[test]
fn test_quaternion_operations() {
    // Create a quaternion from axis-angle
    let axis = Vector3::new(0.0, 1.0, 0.0);
    let angle = PI / 2.0; // 90 degrees
    let q = Quaternion::from_axis_angle(axis, angle);

    // Normalize
    let q_norm = q.normalize();
    assert_relative_eq!(q_norm.length(), 1.0);

    // Rotate a vector
    let v = Vector3::new(1.0, 0.0, 0.0);
    let rotated = q.rotate_vector(v);

    // v should be rotated 90 degrees around Y-axis to (0, 0, -1)
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-5);

    // Conjugate
    let q_conj = q.conjugate();
    assert_eq!(q_conj.w, q.w);
    assert_eq!(q_conj.x, -q.x);
    assert_eq!(q_conj.y, -q.y);
    assert_eq!(q_conj.z, -q.z);

    // Multiplication (composition of rotations)
    let q1 = Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), PI / 4.0);
    let q2 = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), PI / 4.0);
    let q3 = q2 * q1; // Apply q1 then q2

    let v2 = Vector3::new(0.0, 0.0, 1.0);
    let rotated_by_q3 = q3.rotate_vector(v2);
    let rotated_by_q1_then_q2 = q2.rotate_vector(q1.rotate_vector(v2));

    assert_relative_eq!(rotated_by_q3.x, rotated_by_q1_then_q2.x, epsilon = 1e-5);
    assert_relative_eq!(rotated_by_q3.y, rotated_by_q1_then_q2.y, epsilon = 1e-5);
    assert_relative_eq!(rotated_by_q3.z, rotated_by_q1_then_q2.z, epsilon = 1e-5);
}

#[test]
fn test_quaternion_from_scaled_rate() {
    // A rate vector of PI rad/s around Y applied over half a second is a
    // quarter turn
    let rate = Vector3::new(0.0, PI, 0.0);
    let q = Quaternion::from_scaled_rate(rate, 0.5);

    let rotated = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-5);

    // Zero rate yields the identity
    let identity = Quaternion::from_scaled_rate(Vector3::zero(), 0.5);
    assert_eq!(identity, Quaternion::identity());
}

#[test]
fn test_quaternion_angle_to() {
    let q1 = Quaternion::identity();
    let q2 = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), PI / 3.0);

    // The angle between identity and a 60-degree rotation is 60 degrees
    assert_relative_eq!(q1.angle_to(&q2), PI / 3.0, epsilon = 1e-4);
    assert_relative_eq!(q1.angle_to(&q1), 0.0, epsilon = 1e-4);
}

#[test]
fn test_plane_operations() {
    // A plane through the origin with normal +Y
    let plane = Plane::from_point_normal(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0));

    // Signed distance
    assert_relative_eq!(plane.distance(Vector3::new(3.0, 2.0, -1.0)), 2.0);
    assert_relative_eq!(plane.distance(Vector3::new(0.0, -4.0, 0.0)), -4.0);

    // Projection drops the point straight down onto the plane
    let projected = plane.project(Vector3::new(1.0, 5.0, 2.0));
    assert_relative_eq!(projected.x, 1.0);
    assert_relative_eq!(projected.y, 0.0);
    assert_relative_eq!(projected.z, 2.0);

    // Reflection mirrors the point through the plane
    let reflected = plane.reflect(Vector3::new(1.0, 3.0, 2.0));
    assert_relative_eq!(reflected.x, 1.0);
    assert_relative_eq!(reflected.y, -3.0);
    assert_relative_eq!(reflected.z, 2.0);

    // On-plane test with the default epsilon
    assert!(plane.is_on_plane(Vector3::new(7.0, 0.0005, -2.0)));
    assert!(!plane.is_on_plane(Vector3::new(7.0, 0.01, -2.0)));
}

#[test]
fn test_plane_line_intersection() {
    let plane = Plane::from_point_normal(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0));

    // A vertical line crosses the plane halfway between its two points
    let t = plane
        .intersect_line(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0))
        .unwrap();
    assert_relative_eq!(t, 0.5);

    // A line parallel to the plane has no intersection
    let parallel = plane.intersect_line(Vector3::new(0.0, 1.0, 0.0), Vector3::new(5.0, 1.0, 3.0));
    assert!(parallel.is_none());
}

#[test]
fn test_plane_from_points() {
    // Three points in the XZ plane; the winding matches the triangle
    // convention so the normal points up
    let plane = Plane::from_points(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    );

    assert_relative_eq!(plane.normal.y.abs(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(plane.distance(Vector3::new(2.0, 0.0, 2.0)), 0.0, epsilon = 1e-5);
}

#[test]
fn test_triangle_properties() {
    let tri = Triangle::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
    );

    // Counter-clockwise winding seen from above gives an upward normal
    assert_relative_eq!(tri.normal.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(tri.normal.y, 1.0, epsilon = 1e-5);
    assert_relative_eq!(tri.normal.z, 0.0, epsilon = 1e-5);

    assert_relative_eq!(tri.area(), 0.5);
    assert!(!tri.is_degenerate());

    let center = tri.center();
    assert_relative_eq!(center.x, 1.0 / 3.0);

    // Vertices are addressable by index
    assert_eq!(tri.point(0), tri.p1);
    assert_eq!(tri.point(1), tri.p2);
    assert_eq!(tri.point(2), tri.p3);

    // Collinear points make a degenerate triangle with a zero normal
    let degenerate = Triangle::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
    );
    assert!(degenerate.is_degenerate());
}

#[test]
fn test_aabb_operations() {
    // Create an AABB
    let min = Vector3::new(-1.0, -2.0, -3.0);
    let max = Vector3::new(1.0, 2.0, 3.0);
    let aabb = Aabb::new(min, max);

    // Test center
    let center = aabb.center();
    assert_eq!(center.x, 0.0);
    assert_eq!(center.y, 0.0);
    assert_eq!(center.z, 0.0);

    // Test extents
    let extents = aabb.extents();
    assert_eq!(extents.x, 2.0);
    assert_eq!(extents.y, 4.0);
    assert_eq!(extents.z, 6.0);

    // Test contains point
    assert!(aabb.contains_point(Vector3::zero()));
    assert!(aabb.contains_point(Vector3::new(0.5, 1.0, 1.5)));
    assert!(!aabb.contains_point(Vector3::new(2.0, 0.0, 0.0)));

    // Test intersection
    let aabb2 = Aabb::new(Vector3::new(0.5, 0.5, 0.5), Vector3::new(2.0, 3.0, 4.0));
    assert!(aabb.intersects(&aabb2));

    let aabb3 = Aabb::new(Vector3::new(5.0, 5.0, 5.0), Vector3::new(6.0, 6.0, 6.0));
    assert!(!aabb.intersects(&aabb3));

    // Test squared distance to an outside point
    let dist_sq = aabb.squared_distance_to_point(Vector3::new(3.0, 0.0, 0.0));
    assert_relative_eq!(dist_sq, 4.0);

    // Points inside have zero distance
    assert_relative_eq!(aabb.squared_distance_to_point(Vector3::zero()), 0.0);

    // Test from_points construction
    let points = [
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-1.0, 0.0, 5.0),
        Vector3::new(0.0, -2.0, 4.0),
    ];
    let from_points = Aabb::from_points(&points).unwrap();
    assert_eq!(from_points.min.x, -1.0);
    assert_eq!(from_points.min.y, -2.0);
    assert_eq!(from_points.min.z, 3.0);
    assert_eq!(from_points.max.x, 1.0);
    assert_eq!(from_points.max.y, 2.0);
    assert_eq!(from_points.max.z, 5.0);

    assert!(Aabb::from_points(&[]).is_none());

    // Test margin expansion
    let expanded = aabb.expand(1.0);
    assert_eq!(expanded.min.x, -2.0);
    assert_eq!(expanded.max.y, 3.0);
}
