//! Equirectangular environment map sampled on a ray miss.
//!
//! Texels are stored top row first, like any decoded image, while lookups
//! use texture coordinates with `v = 0` on the bottom row. `u` repeats, so the
//! negative longitudes produced by the miss shader wrap around. `v` spans a
//! single period from pole to pole: the miss shader's `[-1, 0]` is shifted
//! up by one, then clamped to the edge rows so the poles never blend.

use std::f32::consts::PI;
use glam::{Vec2, Vec3};
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct Skybox {
    width: u32,
    height: u32,
    texels: Vec<Vec3>,
}

impl Skybox {
    pub fn new(width: u32, height: u32, texels: Vec<Vec3>) -> Result<Self> {
        if width == 0 || height == 0 || texels.len() != (width as usize) * (height as usize) {
            return Err(Error::SkyboxSize { width, height, texels: texels.len() });
        }
        Ok(Self { width, height, texels })
    }

    /// A single color in every direction.
    pub fn uniform(color: Vec3) -> Self {
        Self { width: 1, height: 1, texels: vec![color] }
    }

    /// Procedural sky: white at the horizon blending to blue overhead, fading
    /// to a dark ground color below the horizon.
    pub fn gradient(width: u32, height: u32) -> Result<Self> {
        let horizon = Vec3::new(0.75, 0.85, 1.0);
        let ground = Vec3::new(0.2, 0.18, 0.15);

        let mut texels = Vec::with_capacity((width as usize) * (height as usize));
        for row in 0..height {
            // row 0 is straight up, the last row straight down
            let theta = PI * (row as f32 + 0.5) / height as f32;
            let y = theta.cos();
            let color = if y >= 0.0 {
                let a = 0.5 * (y + 1.0);
                (1.0 - a) * Vec3::ONE + a * Vec3::new(0.5, 0.7, 1.0)
            } else {
                horizon.lerp(ground, -y)
            };
            texels.extend(std::iter::repeat(color).take(width as usize));
        }
        Self::new(width, height, texels)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bilinear lookup, repeating horizontally and clamped vertically.
    pub fn sample(&self, uv: Vec2) -> Vec3 {
        if !uv.is_finite() {
            return Vec3::ZERO;
        }
        let u = uv.x - uv.x.floor();
        // the zenith arrives as -0.0 and must land on the top row
        let v = if uv.y.is_sign_negative() { uv.y + 1.0 } else { uv.y };
        let v = v.clamp(0.0, 1.0);

        let x = u * self.width as f32 - 0.5;
        let y = v * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let bottom = blend(self.texel(x0, y0), self.texel(x0 + 1, y0), fx);
        let top = blend(self.texel(x0, y0 + 1), self.texel(x0 + 1, y0 + 1), fx);
        blend(bottom, top, fy)
    }

    // y counts rows from the bottom
    fn texel(&self, x: i64, y: i64) -> Vec3 {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        let row = self.height as usize - 1 - y;
        self.texels[row * self.width as usize + x]
    }
}

// exact whenever a == b, which keeps flat regions of the map flat
fn blend(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}
