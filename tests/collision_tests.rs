use approx::assert_relative_eq;
use ballsim::colliders::{StaticCollider, StaticMeshCollider, SurfaceMaterial};
use ballsim::collision::{sweep_sphere_triangle, sweep_spheres};
use ballsim::geometry::Triangle;
use ballsim::math::Vector3;

#[test]
fn test_sphere_sphere_head_on() {
    // Two unit spheres, one moving toward the other along X. They touch
    // when the center distance equals 2, after 3 seconds of travel.
    let contact = sweep_spheres(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        1.0,
        Vector3::new(5.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        1.0,
    )
    .unwrap();

    assert_relative_eq!(contact.time, 3.0, epsilon = 1e-5);

    // Normal points from the second sphere's center toward the first
    assert_relative_eq!(contact.normal.x, -1.0, epsilon = 1e-5);
    assert_relative_eq!(contact.normal.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(contact.normal.z, 0.0, epsilon = 1e-5);

    // Contact point is on the first sphere's surface
    assert_relative_eq!(contact.point.x, 4.0, epsilon = 1e-5);
    assert_relative_eq!(contact.point.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(contact.point.z, 0.0, epsilon = 1e-5);
}

#[test]
fn test_sphere_sphere_equal_velocities() {
    // Identical velocities keep the center distance constant forever, so
    // there is no collision to report
    let contact = sweep_spheres(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 2.0, 3.0),
        1.0,
        Vector3::new(5.0, 0.0, 0.0),
        Vector3::new(1.0, 2.0, 3.0),
        1.0,
    );

    assert!(contact.is_none());
}

#[test]
fn test_sphere_sphere_passing_wide() {
    // Separated spheres sliding past each other on parallel tracks far
    // enough apart never intersect
    let contact = sweep_spheres(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        1.0,
        Vector3::new(0.0, 10.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        1.0,
    );

    assert!(contact.is_none());
}

#[test]
fn test_sphere_sphere_already_overlapping() {
    // Overlapping spheres report a negative time; callers decide whether
    // to accept it
    let contact = sweep_spheres(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        1.0,
        Vector3::new(1.5, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        1.0,
    )
    .unwrap();

    assert!(contact.time < 0.0);
}

fn xz_quad() -> [Triangle; 2] {
    // A 20x20 horizontal quad centered on the origin, wound so both
    // normals point up
    let a = Vector3::new(-10.0, 0.0, -10.0);
    let b = Vector3::new(10.0, 0.0, -10.0);
    let c = Vector3::new(10.0, 0.0, 10.0);
    let d = Vector3::new(-10.0, 0.0, 10.0);

    [Triangle::new(a, c, b), Triangle::new(a, d, c)]
}

#[test]
fn test_sphere_triangle_face_case() {
    // A unit sphere 2 units above the XZ plane, falling straight down,
    // touches the face after traveling 1 unit
    let tri = Triangle::new(
        Vector3::new(-5.0, 0.0, -5.0),
        Vector3::new(0.0, 0.0, 5.0),
        Vector3::new(5.0, 0.0, -5.0),
    );
    assert_relative_eq!(tri.normal.y, 1.0, epsilon = 1e-5);

    let hit = sweep_sphere_triangle(
        Vector3::new(0.0, 2.0, 0.0),
        1.0,
        Vector3::new(0.0, -1.0, 0.0),
        &tri,
    )
    .unwrap();

    assert_relative_eq!(hit.distance, 1.0, epsilon = 1e-4);
    assert_relative_eq!(hit.normal.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(hit.normal.y, 1.0, epsilon = 1e-5);
    assert_relative_eq!(hit.normal.z, 0.0, epsilon = 1e-5);
}

#[test]
fn test_sphere_triangle_moving_away() {
    // Moving along or away from the face normal is rejected outright
    let tri = Triangle::new(
        Vector3::new(-5.0, 0.0, -5.0),
        Vector3::new(0.0, 0.0, 5.0),
        Vector3::new(5.0, 0.0, -5.0),
    );

    let up = sweep_sphere_triangle(
        Vector3::new(0.0, 2.0, 0.0),
        1.0,
        Vector3::new(0.0, 1.0, 0.0),
        &tri,
    );
    assert!(up.is_none());

    let parallel = sweep_sphere_triangle(
        Vector3::new(0.0, 2.0, 0.0),
        1.0,
        Vector3::new(1.0, 0.0, 0.0),
        &tri,
    );
    assert!(parallel.is_none());
}

#[test]
fn test_sphere_triangle_face_miss() {
    // Falling far outside the triangle's footprint misses the face, and
    // the sweep line passes nowhere near the vertices or edges
    let tri = Triangle::new(
        Vector3::new(-5.0, 0.0, -5.0),
        Vector3::new(0.0, 0.0, 5.0),
        Vector3::new(5.0, 0.0, -5.0),
    );

    let hit = sweep_sphere_triangle(
        Vector3::new(50.0, 2.0, 0.0),
        1.0,
        Vector3::new(0.0, -1.0, 0.0),
        &tri,
    );
    assert!(hit.is_none());
}

#[test]
fn test_sphere_triangle_vertex_case() {
    // Descending directly over a lone vertex, outside the face footprint.
    // The contact normal points from the sphere center back at the vertex.
    let tri = Triangle::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(-4.0, 0.0, 3.0),
        Vector3::new(4.0, 0.0, 3.0),
    );
    assert!(tri.normal.y > 0.9);

    let hit = sweep_sphere_triangle(
        Vector3::new(0.0, 3.0, -0.5),
        1.0,
        Vector3::new(0.0, -1.0, 0.0),
        &tri,
    )
    .unwrap();

    // The vertex at the origin is offset 0.5 sideways from the descent
    // line, so contact comes later than a face hit would
    assert!(hit.distance > 2.0 && hit.distance < 3.0);
    assert!(hit.normal.y > 0.0);
}

#[test]
fn test_mesh_collider_sweep() {
    let mesh =
        StaticMeshCollider::from_triangles(xz_quad(), SurfaceMaterial::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2);

    // A sphere of radius 0.5 at height 2, falling at 1 unit/s, touches the
    // floor after 1.5 units of travel
    let contact = mesh
        .sphere_sweep(
            Vector3::new(0.0, 2.0, 0.0),
            0.5,
            Vector3::new(0.0, -1.0, 0.0),
            10.0,
        )
        .unwrap();

    assert_relative_eq!(contact.time, 1.5, epsilon = 1e-4);
    assert_relative_eq!(contact.normal.y, 1.0, epsilon = 1e-4);

    // The reported point sits on the plane, under the sphere center
    assert_relative_eq!(contact.point.y, 0.0, epsilon = 1e-3);
    assert_relative_eq!(contact.point.x, 0.0, epsilon = 1e-3);
}

#[test]
fn test_mesh_collider_broad_phase_reject() {
    let mesh =
        StaticMeshCollider::from_triangles(xz_quad(), SurfaceMaterial::default()).unwrap();

    // Far outside the bounds plus sweep reach: rejected before any
    // triangle is tested
    let contact = mesh.sphere_sweep(
        Vector3::new(500.0, 500.0, 0.0),
        0.5,
        Vector3::new(0.0, -1.0, 0.0),
        1.0,
    );
    assert!(contact.is_none());
}

#[test]
fn test_mesh_collider_stationary_sphere() {
    let mesh =
        StaticMeshCollider::from_triangles(xz_quad(), SurfaceMaterial::default()).unwrap();

    // Zero velocity cannot produce a time-to-collision
    let contact = mesh.sphere_sweep(Vector3::new(0.0, 2.0, 0.0), 0.5, Vector3::zero(), 0.0);
    assert!(contact.is_none());
}

#[test]
fn test_mesh_collider_construction() {
    // Degenerate triangles are dropped at construction
    let degenerate = Triangle::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
    );
    let mut triangles = xz_quad().to_vec();
    triangles.push(degenerate);

    let mesh =
        StaticMeshCollider::from_triangles(triangles, SurfaceMaterial::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2);

    // A mesh of only degenerate triangles is an invalid parameter
    let empty = StaticMeshCollider::from_triangles([degenerate], SurfaceMaterial::default());
    assert!(empty.is_err());

    // Indexed construction checks the index buffer shape and range
    let vertices = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    let mesh = StaticMeshCollider::from_vertices_indices(
        &vertices,
        &[0, 2, 1],
        SurfaceMaterial::default(),
    )
    .unwrap();
    assert_eq!(mesh.triangle_count(), 1);

    assert!(StaticMeshCollider::from_vertices_indices(
        &vertices,
        &[0, 1],
        SurfaceMaterial::default()
    )
    .is_err());

    assert!(StaticMeshCollider::from_vertices_indices(
        &vertices,
        &[0, 1, 7],
        SurfaceMaterial::default()
    )
    .is_err());
}

#[test]
fn test_static_collider_variant() {
    let mesh =
        StaticMeshCollider::from_triangles(xz_quad(), SurfaceMaterial::new(0.9, 0.3)).unwrap();
    let collider = StaticCollider::from(mesh);

    assert_relative_eq!(collider.material().elasticity, 0.9);
    assert_relative_eq!(collider.material().surface_friction, 0.3);

    // The variant forwards the swept-sphere query
    let contact = collider
        .sphere_sweep(
            Vector3::new(0.0, 2.0, 0.0),
            0.5,
            Vector3::new(0.0, -1.0, 0.0),
            10.0,
        )
        .unwrap();
    assert_relative_eq!(contact.time, 1.5, epsilon = 1e-4);
}
