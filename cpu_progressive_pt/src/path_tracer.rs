use glam::Vec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use progressive_common::camera::Camera;
use progressive_common::gpu_buffer::PixelBuffer;
use progressive_common::gpu_structs::KernelConstants;
use progressive_common::parameters::{RenderParameters, RenderProgress};
use progressive_common::scene::Scene;
use progressive_common::skybox::Skybox;
use progressive_common::Result;
use crate::accumulate::Accumulator;
use crate::compute_shader::ComputeShader;

pub struct PathTracer {
    compute_shader: ComputeShader,
    image_buffer: PixelBuffer,
    accumulator: Accumulator,
    render_parameters: RenderParameters,
    last_render_parameters: RenderParameters,
    render_progress: RenderProgress,
    rng: StdRng,
}

impl PathTracer {
    pub fn new(scene: &Scene,
               skybox: Skybox,
               rp: &RenderParameters,
               seed: u64) -> Result<Self> {
        let render_parameters = *rp;
        let (width, height) = render_parameters.viewport_size();
        let image_buffer = PixelBuffer::new(width, height)?;
        let accumulator = Accumulator::new(width, height)?;

        let constants = Self::constants_for(&render_parameters, Vec2::ZERO, 0.0);
        let compute_shader = ComputeShader::new(scene.spheres.clone(), skybox, constants);

        info!("path tracer ready: {}x{}, {} spheres, {} max bounces",
              width, height, scene.spheres.len(), render_parameters.sampling_parameters().max_bounces);

        Ok(Self {
            compute_shader,
            image_buffer,
            accumulator,
            render_parameters,
            last_render_parameters: render_parameters,
            render_progress: RenderProgress::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn constants_for(rp: &RenderParameters, pixel_offset: Vec2, seed: f32) -> KernelConstants {
        KernelConstants::new(rp.camera_to_world(),
                             rp.inverse_projection(),
                             rp.light(),
                             pixel_offset,
                             seed,
                             rp.sampling_parameters().max_bounces)
    }

    /// Traces one sample per pixel and folds it into the accumulated image.
    pub fn render_frame(&mut self) {
        self.update_buffers();

        let seed: f32 = self.rng.random();
        // the first sample after a reset is taken unjittered
        let pixel_offset = if self.render_parameters.sampling_parameters().jitter
            && self.render_progress.accumulated_samples() > 0 {
            Vec2::new(self.rng.random(), self.rng.random())
        } else {
            Vec2::ZERO
        };

        self.compute_shader.queue_constants(
            Self::constants_for(&self.render_parameters, pixel_offset, seed));
        self.compute_shader.dispatch(&mut self.image_buffer);
        self.accumulator.blend(&self.image_buffer);
        self.render_progress.advance();

        debug!("frame {} accumulated {} samples",
               self.render_progress.frame(), self.accumulator.samples());
    }

    pub fn get_render_parameters(&self) -> RenderParameters {
        self.render_parameters
    }

    pub fn update_render_parameters(&mut self, render_parameters: RenderParameters) {
        self.render_parameters = render_parameters
    }

    pub fn update_camera(&mut self, camera: Camera) {
        self.render_parameters.set_camera(camera);
    }

    pub fn resize(&mut self, size: (u32, u32)) -> Result<()> {
        self.render_parameters.set_viewport(size)
    }

    pub fn update_scene(&mut self, scene: &Scene) {
        self.compute_shader.queue_spheres(scene.spheres.clone());
        self.reset();
    }

    // any change to the view invalidates what has been accumulated so far
    fn update_buffers(&mut self) {
        if self.render_parameters == self.last_render_parameters {
            return;
        }

        let (width, height) = self.render_parameters.viewport_size();
        if self.last_render_parameters.viewport_size() != (width, height) {
            // viewport sizes are validated by RenderParameters, never zero
            if let Ok(buffer) = PixelBuffer::new(width, height) {
                self.image_buffer = buffer;
            }
            if let Err(e) = self.accumulator.resize(width, height) {
                log::warn!("could not resize accumulation buffer: {}", e);
            }
        }

        self.last_render_parameters = self.render_parameters;
        self.reset();
    }

    fn reset(&mut self) {
        debug!("view changed, restarting accumulation");
        self.accumulator.reset();
        self.render_progress.reset();
    }

    pub fn accumulated_samples(&self) -> u32 {
        self.accumulator.samples()
    }

    pub fn progress(&self) -> f32 {
        self.render_progress.progress(self.render_parameters.sampling_parameters().samples_per_pixel)
    }

    pub fn is_converged(&self) -> bool {
        self.accumulator.samples() >= self.render_parameters.sampling_parameters().samples_per_pixel
    }

    pub fn image(&self) -> &PixelBuffer {
        self.accumulator.image()
    }
}
