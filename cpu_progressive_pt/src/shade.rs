use std::f32::consts::PI;
use glam::{Vec2, Vec3};
use progressive_common::ray::{Ray, RayHit};
use progressive_common::skybox::Skybox;
use crate::gpu_rng::{sample_hemisphere, PixelRng};

// offset along the normal so the bounce ray does not re-hit its own surface
const EPSILON: f32 = 0.001;

/// Equirectangular texture coordinates for a direction. Both come out
/// negative: `u` relies on the skybox wrapping, `v` runs from -1 at the
/// nadir to -0 at the zenith.
pub fn skybox_uv(direction: Vec3) -> Vec2 {
    let theta = direction.y.clamp(-1.0, 1.0).acos() / -PI;
    let phi = direction.x.atan2(-direction.z) / (-PI * 2.0);
    Vec2::new(phi, theta)
}

/// Scatters `ray` off `hit` and returns the radiance emitted toward it.
///
/// On a hit the ray continues from the surface in a sampled direction with
/// its energy scaled by `2 * albedo * cos`, and nothing is emitted. On a miss
/// the path ends: the energy is zeroed and the sky radiance is returned.
pub fn shade(ray: &mut Ray, hit: &RayHit, skybox: &Skybox, rng: &mut PixelRng) -> Vec3 {
    if hit.is_hit() {
        ray.origin = hit.position + hit.normal * EPSILON;
        ray.direction = sample_hemisphere(hit.normal, rng);
        ray.energy *= 2.0 * hit.albedo * hit.normal.dot(ray.direction).clamp(0.0, 1.0);
        Vec3::ZERO
    } else {
        ray.energy = Vec3::ZERO;
        skybox.sample(skybox_uv(ray.direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::trace;
    use progressive_common::sphere::Sphere;

    fn rng() -> PixelRng {
        PixelRng::new(0.42, Vec2::new(31.0, 17.0))
    }

    #[test]
    fn miss_returns_sky_and_ends_the_path() {
        let sky = Skybox::uniform(Vec3::new(0.2, 0.4, 0.6));
        let mut ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let hit = trace(&ray, &[]);
        assert_eq!(hit.distance, f32::INFINITY);

        let color = shade(&mut ray, &hit, &sky, &mut rng());
        assert_eq!(color, Vec3::new(0.2, 0.4, 0.6));
        assert_eq!(ray.energy, Vec3::ZERO);
    }

    #[test]
    fn hit_bounces_off_the_surface_and_attenuates() {
        let sky = Skybox::uniform(Vec3::ONE);
        let mut rng = rng();
        let hit = trace(&Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y), &[]);

        for _ in 0..100 {
            let mut ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
            ray.energy = Vec3::new(0.9, 0.5, 0.1);
            let before = ray.energy;

            let color = shade(&mut ray, &hit, &sky, &mut rng);
            assert_eq!(color, Vec3::ZERO);
            assert_eq!(ray.origin, Vec3::new(0.0, EPSILON, 0.0));
            assert!(ray.direction.y >= -1e-5);
            assert!((ray.direction.length() - 1.0).abs() < 1e-4);

            let bound = 2.0 * hit.albedo * before;
            assert!(ray.energy.cmpge(Vec3::ZERO).all());
            assert!(ray.energy.cmple(bound + Vec3::splat(1e-6)).all());
        }
    }

    #[test]
    fn black_surface_absorbs_everything() {
        let sky = Skybox::uniform(Vec3::ONE);
        let ball = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 5.0, Vec3::ZERO, Vec3::ONE);
        let mut ray = Ray::new(Vec3::new(0.0, 5.0, 20.0), Vec3::NEG_Z);
        let hit = trace(&ray, &[ball]);
        shade(&mut ray, &hit, &sky, &mut rng());
        assert!(ray.is_exhausted());
    }

    #[test]
    fn sky_coordinates() {
        let up = skybox_uv(Vec3::Y);
        assert_eq!(up.y, 0.0);
        let down = skybox_uv(Vec3::NEG_Y);
        assert!((down.y + 1.0).abs() < 1e-6);
        let horizon = skybox_uv(Vec3::NEG_Z);
        assert!((horizon.y + 0.5).abs() < 1e-6);
        assert_eq!(horizon.x, 0.0);
        let east = skybox_uv(Vec3::X);
        assert!((east.x + 0.25).abs() < 1e-6);
        // slightly out of range components from normalization must not NaN
        assert!(skybox_uv(Vec3::new(0.0, 1.0000001, 0.0)).is_finite());
    }

    #[test]
    fn zenith_sees_the_top_of_the_sky() {
        let sky = Skybox::gradient(8, 64).unwrap();
        let zenith = sky.sample(skybox_uv(Vec3::Y));
        let near_zenith = sky.sample(skybox_uv(Vec3::new(0.01, 1.0, 0.0).normalize()));
        assert!(zenith.abs_diff_eq(near_zenith, 1e-4), "{} vs {}", zenith, near_zenith);
        assert!(zenith.abs_diff_eq(Vec3::new(0.5, 0.7, 1.0), 1e-3));
    }
}
