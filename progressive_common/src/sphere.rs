use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub radius: f32,
    pub albedo: Vec3,
    _buffer0: f32,
    pub specular: Vec3,
    _buffer1: f32,
}

unsafe impl bytemuck::Pod for Sphere {}
unsafe impl bytemuck::Zeroable for Sphere {}

impl Sphere {
    pub fn new(position: Vec3, radius: f32, albedo: Vec3, specular: Vec3) -> Self {
        Self { position, radius, albedo, _buffer0: 0.0, specular, _buffer1: 0.0 }
    }

    /// Two spheres overlap when their centers are closer than the sum of radii.
    pub fn overlaps(&self, other: &Sphere) -> bool {
        let min_dist = self.radius + other.radius;
        self.position.distance_squared(other.position) < min_dist * min_dist
    }
}
