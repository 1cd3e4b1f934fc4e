use std::f32::consts::PI;
use glam::{Mat3, Vec2, Vec3};

const ONE_MINUS_EPSILON: f32 = 1.0 - f32::EPSILON / 2.0;

/// Per-pixel random stream. Each pixel of a dispatch builds its own from the
/// frame seed and its coordinate, so no state is shared between pixels.
#[derive(Copy, Clone, Debug)]
pub struct PixelRng {
    seed: f32,
    pixel: Vec2,
}

impl PixelRng {
    pub fn new(seed: f32, pixel: Vec2) -> Self {
        Self { seed, pixel }
    }

    /// Classic shader hash `frac(sin(x) * 43758.5453)`; the seed advances by
    /// one per call.
    pub fn rng_next_float(&mut self) -> f32 {
        let x = (self.seed / 100.0 * self.pixel.dot(Vec2::new(12.9898, 78.233))).sin() * 43758.5453;
        self.seed += 1.0;
        // frac is x - floor(x), not the truncating fract
        (x - x.floor()).min(ONE_MINUS_EPSILON)
    }
}

/// Orthonormal frame whose columns are tangent, bitangent and the normal.
pub fn get_tangent_space(normal: Vec3) -> Mat3 {
    // the x axis is nearly parallel to such normals, use a different helper
    let helper = if normal.x.abs() > 0.99 {
        Vec3::new(1.0, 0.0, 1.0)
    } else {
        Vec3::X
    };
    let tangent = normal.cross(helper).normalize();
    let bitangent = normal.cross(tangent).normalize();
    Mat3::from_cols(tangent, bitangent, normal)
}

pub fn sample_hemisphere(normal: Vec3, rng: &mut PixelRng) -> Vec3 {
    let cos_theta = rng.rng_next_float();
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = 2.0 * PI * rng.rng_next_float();
    let tangent_space_dir = Vec3::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta);
    get_tangent_space(normal) * tangent_space_dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_are_in_unit_interval_and_vary() {
        let mut rng = PixelRng::new(0.37, Vec2::new(120.0, 45.0));
        let values: Vec<f32> = (0..256).map(|_| rng.rng_next_float()).collect();
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(values.windows(2).any(|w| w[0] != w[1]));
        let mean = values.iter().sum::<f32>() / values.len() as f32;
        assert!((mean - 0.5).abs() < 0.1, "mean {}", mean);
    }

    #[test]
    fn same_seed_and_pixel_reproduce() {
        let mut a = PixelRng::new(0.5, Vec2::new(3.0, 7.0));
        let mut b = PixelRng::new(0.5, Vec2::new(3.0, 7.0));
        for _ in 0..16 {
            assert_eq!(a.rng_next_float(), b.rng_next_float());
        }
        let mut c = PixelRng::new(0.5, Vec2::new(4.0, 7.0));
        let mut a = PixelRng::new(0.5, Vec2::new(3.0, 7.0));
        assert!((0..16).any(|_| a.rng_next_float() != c.rng_next_float()));
    }

    #[test]
    fn tangent_space_is_orthonormal_including_near_x() {
        let normals = [
            Vec3::Y,
            Vec3::Z,
            Vec3::X,
            Vec3::NEG_X,
            Vec3::new(0.995, 0.0998, 0.0).normalize(),
            Vec3::new(0.3, -0.5, 0.8).normalize(),
        ];
        for n in normals {
            let frame = get_tangent_space(n);
            let (t, b, z) = (frame.x_axis, frame.y_axis, frame.z_axis);
            assert!(t.is_finite() && b.is_finite(), "degenerate frame for {}", n);
            assert!((t.length() - 1.0).abs() < 1e-5);
            assert!((b.length() - 1.0).abs() < 1e-5);
            assert!(t.dot(b).abs() < 1e-5);
            assert!(t.dot(z).abs() < 1e-5);
            assert!(b.dot(z).abs() < 1e-5);
            assert_eq!(z, n);
        }
    }

    #[test]
    fn hemisphere_samples_are_unit_and_above_the_surface() {
        let mut rng = PixelRng::new(0.81, Vec2::new(17.0, 230.0));
        for normal in [Vec3::Y, Vec3::X, Vec3::new(-0.2, 0.3, -0.9).normalize()] {
            for _ in 0..200 {
                let dir = sample_hemisphere(normal, &mut rng);
                assert!((dir.length() - 1.0).abs() < 1e-4);
                assert!(dir.dot(normal) >= -1e-5);
            }
        }
    }
}
