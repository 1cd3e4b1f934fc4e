use glam::{Mat4, Vec3, Vec4};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32
}

impl Camera {
    pub fn new(look_from: Vec3, look_at: Vec3) -> Self {

        let position = look_from;
        let forwards = (look_at - position).normalize();

        // pitch is measured down from +y, yaw around +y starting at +z
        let pitch = forwards.y.clamp(-1.0, 1.0).acos();
        let yaw = forwards.x.atan2(forwards.z);

        Self {
            position,
            pitch,
            yaw
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(sin_pitch * sin_yaw, cos_pitch, sin_pitch * cos_yaw)
    }

    /// Camera space looks down +z with +y up; the columns are the world-space
    /// right, up and forward axes followed by the camera position.
    pub fn camera_to_world(&self) -> Mat4 {
        let dir = self.forward();
        // degenerate when looking straight up or down
        let right = dir.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(dir);

        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            dir.extend(0.0),
            Vec4::new(self.position.x, self.position.y, self.position.z, 1.0),
        )
    }
}
