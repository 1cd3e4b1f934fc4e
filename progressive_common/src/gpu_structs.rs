use glam::{Mat4, Vec2};
use crate::light::DirectionalLight;

// Per-dispatch constants, laid out the way a compute shader would read them
// from a uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct KernelConstants {
    camera_to_world: [[f32; 4]; 4],
    inverse_projection: [[f32; 4]; 4],
    directional_light: [f32; 4],
    pixel_offset: [f32; 2],
    seed: f32,
    max_bounces: u32,
}

impl KernelConstants {
    pub fn new(camera_to_world: Mat4,
               inverse_projection: Mat4,
               directional_light: &DirectionalLight,
               pixel_offset: Vec2,
               seed: f32,
               max_bounces: u32) -> Self {
        Self {
            camera_to_world: camera_to_world.to_cols_array_2d(),
            inverse_projection: inverse_projection.to_cols_array_2d(),
            directional_light: directional_light.to_array(),
            pixel_offset: pixel_offset.to_array(),
            seed,
            max_bounces,
        }
    }

    pub fn camera_to_world(&self) -> Mat4 { Mat4::from_cols_array_2d(&self.camera_to_world) }
    pub fn inverse_projection(&self) -> Mat4 { Mat4::from_cols_array_2d(&self.inverse_projection) }
    pub fn pixel_offset(&self) -> Vec2 { Vec2::from_array(self.pixel_offset) }
    pub fn seed(&self) -> f32 { self.seed }
    pub fn max_bounces(&self) -> u32 { self.max_bounces }
}
