use glam::Vec3;

/// Sun-style light. It is part of the per-dispatch constants but the
/// active shading path only gathers light from the skybox.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, intensity: f32) -> Self {
        Self { direction: direction.normalize_or_zero(), intensity }
    }

    pub fn to_array(&self) -> [f32; 4] {
        self.direction.extend(self.intensity).to_array()
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::new(-0.3, -1.0, 0.5), 1.0)
    }
}
