use glam::{Mat4, Vec4};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionMatrix {
    vfov_rad: f32,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32
}

impl ProjectionMatrix {
    pub fn new(vfov_rad: f32, aspect_ratio: f32,
               z_near: f32, z_far: f32) -> Self {

        Self {
            vfov_rad,
            aspect_ratio,
            z_near,
            z_far
        }

    }

    pub fn p_inv(&self) -> Mat4 {
        // h is the half-height of the viewport at unit distance and w the
        // half-width from the aspect ratio; a clip-space (u, v, 0, 1) lands on
        // (w*u, h*v, 1) in camera space, which is the unnormalized ray direction
        let h = (self.vfov_rad / 2.0).tan();
        let w = h * self.aspect_ratio;
        let r = self.z_far / (self.z_far - self.z_near);

        Mat4::from_cols(
            Vec4::new(w, 0.0, 0.0, 0.0),
            Vec4::new(0.0, h, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, -1.0 / (r * self.z_near)),
            Vec4::new(0.0, 0.0, 1.0, 1.0 / self.z_near),
        )
    }
}
