use crate::error::{Error, Result};

/// Four-channel float image in texture order: row 0 is the bottom of the
/// picture, matching the pixel coordinates the kernel works in.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        let pixels = vec![[0.0f32; 4]; (width as usize) * (height as usize)];
        Ok(Self { width, height, pixels })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> [f32; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [[f32; 4]] {
        &mut self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    /// Channel values in top-down row order, as image files expect them.
    pub fn to_top_down_f32(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for row in self.pixels.chunks_exact(self.width as usize).rev() {
            data.extend_from_slice(bytemuck::cast_slice(row));
        }
        data
    }
}
