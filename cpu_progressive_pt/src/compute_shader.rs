use glam::{UVec2, Vec2, Vec3};
use log::debug;
use rayon::prelude::*;
use progressive_common::gpu_buffer::PixelBuffer;
use progressive_common::gpu_structs::KernelConstants;
use progressive_common::ray::Ray;
use progressive_common::skybox::Skybox;
use progressive_common::sphere::Sphere;
use crate::gpu_rng::PixelRng;
use crate::intersect::trace;
use crate::ray_gen_shader::create_camera_ray;
use crate::shade::shade;

// CPU stand-in for the path tracing compute shader: the scene "buffers" are
// queued into it and a dispatch runs the kernel once for every pixel.
pub struct ComputeShader {
    spheres: Vec<Sphere>,
    skybox: Skybox,
    constants: KernelConstants,
}

impl ComputeShader {
    pub fn new(spheres: Vec<Sphere>, skybox: Skybox, constants: KernelConstants) -> Self {
        Self { spheres, skybox, constants }
    }

    pub fn queue_spheres(&mut self, spheres: Vec<Sphere>) {
        self.spheres = spheres;
    }

    pub fn queue_constants(&mut self, constants: KernelConstants) {
        self.constants = constants;
    }

    pub fn constants(&self) -> &KernelConstants {
        &self.constants
    }

    /// Fills every pixel of `image`. Rows are independent and run in parallel;
    /// within a pixel the bounces are sequential.
    pub fn dispatch(&self, image: &mut PixelBuffer) {
        let (width, height) = image.size();
        debug!("dispatching {}x{} with seed {}", width, height, self.constants.seed());

        image.pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.main_cs(UVec2::new(x as u32, y as u32), (width, height));
                }
            });
    }

    pub fn main_cs(&self, id: UVec2, image_size: (u32, u32)) -> [f32; 4] {
        let pixel = id.as_vec2();
        let resolution = Vec2::new(image_size.0 as f32, image_size.1 as f32);
        let uv = (pixel + self.constants.pixel_offset()) / resolution * 2.0 - 1.0;

        let ray = create_camera_ray(uv,
                                    self.constants.camera_to_world(),
                                    self.constants.inverse_projection());
        let mut rng = PixelRng::new(self.constants.seed(), pixel);

        let (result, _) = self.ray_color(ray, &mut rng);
        result.extend(1.0).to_array()
    }

    /// Follows one path for up to `max_bounces` segments. Also returns how many
    /// segments were traced.
    pub fn ray_color(&self, mut ray: Ray, rng: &mut PixelRng) -> (Vec3, u32) {
        let mut result = Vec3::ZERO;
        let mut bounces = 0;

        for _ in 0 .. self.constants.max_bounces() {
            let hit = trace(&ray, &self.spheres);
            // weight by the energy the ray had before this bounce
            let energy = ray.energy;
            result += energy * shade(&mut ray, &hit, &self.skybox, rng);
            bounces += 1;

            if ray.is_exhausted() {
                break;
            }
        }

        (result, bounces)
    }
}
