use glam::Vec3;

/// A ray in flight through the scene, carrying the throughput of the path
/// it belongs to. `direction` is expected to be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub energy: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            energy: Vec3::ONE,
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    // exact comparison; a path only terminates by being zeroed out
    pub fn is_exhausted(&self) -> bool {
        self.energy.cmpeq(Vec3::ZERO).all()
    }
}

/// The closest surface found along a ray. A distance of infinity is the
/// only marker for "nothing was hit".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub position: Vec3,
    pub distance: f32,
    pub normal: Vec3,
    pub albedo: Vec3,
    pub specular: Vec3,
}

impl Default for RayHit {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            distance: f32::INFINITY,
            normal: Vec3::ZERO,
            albedo: Vec3::ZERO,
            specular: Vec3::ZERO,
        }
    }
}

impl RayHit {
    pub fn is_hit(&self) -> bool {
        self.distance < f32::INFINITY
    }
}
