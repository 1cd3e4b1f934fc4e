use glam::Vec3;
use log::{debug, info};
use rand::Rng;
use crate::sphere::Sphere;
use crate::util_funcs::{random_color_hsv, random_f32, random_in_unit_disk, random_range_f32};

/// Knobs for the randomized sphere field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneParameters {
    pub sphere_radius: (f32, f32),
    pub spheres_max: u32,
    pub placement_radius: f32,
    pub metal_chance: f32,
}

impl Default for SceneParameters {
    fn default() -> Self {
        Self {
            sphere_radius: (3.0, 8.0),
            spheres_max: 100,
            placement_radius: 100.0,
            metal_chance: 0.5,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Ground plane and sky only.
    pub fn empty() -> Self {
        Self { spheres: Vec::new() }
    }

    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    pub fn random<R: Rng + ?Sized>(parameters: &SceneParameters, rng: &mut R) -> Self {
        let mut spheres = Vec::<Sphere>::with_capacity(parameters.spheres_max as usize);
        let (radius_min, radius_max) = parameters.sphere_radius;
        let mut rejected = 0u32;

        for _ in 0 .. parameters.spheres_max {
            let radius = random_range_f32(rng, radius_min, radius_max);
            let disk = random_in_unit_disk(rng) * parameters.placement_radius;
            // spheres rest on the ground plane
            let position = Vec3::new(disk.x, radius, disk.y);
            let candidate = Sphere::new(position, radius, Vec3::ZERO, Vec3::ZERO);

            if spheres.iter().any(|other| candidate.overlaps(other)) {
                rejected += 1;
                continue;
            }

            let color = random_color_hsv(rng);
            let metal = random_f32(rng) < parameters.metal_chance;
            let (albedo, specular) = if metal {
                (Vec3::ZERO, color)
            } else {
                (color, Vec3::splat(0.04))
            };
            spheres.push(Sphere::new(position, radius, albedo, specular));
        }

        debug!("scene setup rejected {} overlapping spheres", rejected);
        info!("scene has {} spheres", spheres.len());

        Self { spheres }
    }
}
