use glam::Mat4;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::light::DirectionalLight;
use crate::projection_matrix::ProjectionMatrix;

pub const SPP: u32 = 64;
pub const MAX_BOUNCES: u32 = 8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplingParameters {
    pub samples_per_pixel: u32,
    pub max_bounces: u32,
    pub jitter: bool,
}

impl SamplingParameters {
    pub fn new(samples_per_pixel: u32, max_bounces: u32, jitter: bool) -> Result<Self> {
        let sampling_parameters = Self { samples_per_pixel, max_bounces, jitter };
        sampling_parameters.validate()?;
        Ok(sampling_parameters)
    }

    fn validate(&self) -> Result<()> {
        if self.samples_per_pixel == 0 {
            return Err(Error::InvalidSampleCount);
        }
        if self.max_bounces == 0 {
            return Err(Error::InvalidBounceCount);
        }
        Ok(())
    }
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self { samples_per_pixel: SPP, max_bounces: MAX_BOUNCES, jitter: true }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParameters {
    camera: Camera,
    vfov_rad: f32,
    z_near: f32,
    z_far: f32,
    light: DirectionalLight,
    sampling_parameters: SamplingParameters,
    viewport_size: (u32, u32),
}

impl RenderParameters {
    pub fn new(camera: Camera,
               vfov: f32,
               sampling_parameters: SamplingParameters,
               viewport_size: (u32, u32)) -> Result<Self> {
        check_viewport(viewport_size)?;
        // the fields are public, so a hand-built value may skip `new`
        sampling_parameters.validate()?;
        Ok(Self {
            camera,
            vfov_rad: vfov.to_radians(),
            z_near: 0.1,
            z_far: 1000.0,
            light: DirectionalLight::default(),
            sampling_parameters,
            viewport_size,
        })
    }

    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn light(&self) -> &DirectionalLight { &self.light }
    pub fn sampling_parameters(&self) -> &SamplingParameters { &self.sampling_parameters }
    pub fn viewport_size(&self) -> (u32, u32) { self.viewport_size }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn set_viewport(&mut self, size: (u32, u32)) -> Result<()> {
        check_viewport(size)?;
        self.viewport_size = size;
        Ok(())
    }

    pub fn camera_to_world(&self) -> Mat4 {
        self.camera.camera_to_world()
    }

    pub fn inverse_projection(&self) -> Mat4 {
        let (width, height) = self.viewport_size;
        let ar = width as f32 / height as f32;
        ProjectionMatrix::new(self.vfov_rad, ar, self.z_near, self.z_far).p_inv()
    }
}

fn check_viewport((width, height): (u32, u32)) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidViewport { width, height });
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RenderProgress {
    frame: u32,
    accumulated_samples: u32,
}

impl RenderProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames dispatched since the tracer was created; never reset, so each
    /// frame draws fresh random numbers.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn accumulated_samples(&self) -> u32 {
        self.accumulated_samples
    }

    pub fn advance(&mut self) {
        self.frame += 1;
        self.accumulated_samples += 1;
    }

    pub fn reset(&mut self) {
        self.accumulated_samples = 0;
    }

    pub fn progress(&self, samples_per_pixel: u32) -> f32 {
        if samples_per_pixel == 0 {
            return 1.0;
        }
        (self.accumulated_samples as f32 / samples_per_pixel as f32).min(1.0)
    }
}
