use glam::Vec3;
use progressive_common::ray::{Ray, RayHit};
use progressive_common::sphere::Sphere;

const GROUND_ALBEDO: Vec3 = Vec3::new(0.1, 0.2, 0.3);
const GROUND_SPECULAR: Vec3 = Vec3::new(0.3, 0.3, 0.3);
// rays this close to parallel never reach the plane in a useful distance
const PARALLEL_EPSILON: f32 = 1e-6;

/// The ground is the plane y = 0.
pub fn intersect_ground_plane(ray: &Ray, best_hit: &mut RayHit) {
    if ray.direction.y.abs() < PARALLEL_EPSILON {
        return;
    }
    let t = -ray.origin.y / ray.direction.y;
    if t > 0.0 && t < best_hit.distance {
        best_hit.distance = t;
        best_hit.position = ray.at(t);
        best_hit.normal = Vec3::Y;
        best_hit.albedo = GROUND_ALBEDO;
        best_hit.specular = GROUND_SPECULAR;
    }
}

pub fn intersect_sphere(ray: &Ray, best_hit: &mut RayHit, sphere: &Sphere) {
    let d = ray.origin - sphere.position;
    let p1 = -ray.direction.dot(d);
    let p2sqr = p1 * p1 - d.dot(d) + sphere.radius * sphere.radius;
    if p2sqr < 0.0 {
        return;
    }
    let p2 = p2sqr.sqrt();
    // near root unless it is behind the origin, i.e. we start inside
    let t = if p1 - p2 > 0.0 { p1 - p2 } else { p1 + p2 };
    if t > 0.0 && t < best_hit.distance {
        best_hit.distance = t;
        best_hit.position = ray.at(t);
        best_hit.normal = (best_hit.position - sphere.position).normalize_or_zero();
        best_hit.albedo = sphere.albedo;
        best_hit.specular = sphere.specular;
    }
}

pub fn intersect_many_spheres(ray: &Ray, best_hit: &mut RayHit, spheres: &[Sphere]) {
    for sphere in spheres {
        intersect_sphere(ray, best_hit, sphere);
    }
}

/// Closest hit along the ray. The ground plane is tested first, so it wins
/// exact ties.
pub fn trace(ray: &Ray, spheres: &[Sphere]) -> RayHit {
    let mut best_hit = RayHit::default();
    intersect_ground_plane(ray, &mut best_hit);
    intersect_many_spheres(ray, &mut best_hit, spheres);
    best_hit
}
