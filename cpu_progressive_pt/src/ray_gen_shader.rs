use glam::{Mat4, Vec2, Vec4, Vec4Swizzles};
use progressive_common::ray::Ray;

/// Primary ray through `uv`, which must already be in [-1, 1] on both axes.
pub fn create_camera_ray(uv: Vec2, camera_to_world: Mat4, inverse_projection: Mat4) -> Ray {
    let origin = (camera_to_world * Vec4::new(0.0, 0.0, 0.0, 1.0)).xyz();

    // the projected point is used as a direction as is, without dividing by w
    let direction = (inverse_projection * Vec4::new(uv.x, uv.y, 0.0, 1.0)).xyz();
    let direction = (camera_to_world * direction.extend(0.0)).xyz().normalize_or_zero();

    Ray::new(origin, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use progressive_common::camera::Camera;
    use progressive_common::projection_matrix::ProjectionMatrix;

    fn setup() -> (Camera, Mat4) {
        let camera = Camera::new(Vec3::new(0.0, 5.0, 20.0), Vec3::new(0.0, 5.0, 0.0));
        let p_inv = ProjectionMatrix::new(60f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0).p_inv();
        (camera, p_inv)
    }

    #[test]
    fn center_ray_looks_forward_from_the_camera() {
        let (camera, p_inv) = setup();
        let ray = create_camera_ray(Vec2::ZERO, camera.camera_to_world(), p_inv);
        assert!(ray.origin.abs_diff_eq(camera.position, 1e-5));
        assert!(ray.direction.abs_diff_eq(camera.forward(), 1e-5));
        assert_eq!(ray.energy, Vec3::ONE);
    }

    #[test]
    fn corners_follow_the_field_of_view() {
        let (camera, p_inv) = setup();
        let c2w = camera.camera_to_world();

        let top = create_camera_ray(Vec2::new(0.0, 1.0), c2w, p_inv);
        let angle = top.direction.angle_between(camera.forward());
        assert!((angle - 30f32.to_radians()).abs() < 1e-4);
        assert!(top.direction.y > 0.0);

        let right = create_camera_ray(Vec2::new(1.0, 0.0), c2w, p_inv);
        assert!(right.direction.x > 0.0);
        assert!((right.direction.length() - 1.0).abs() < 1e-5);
    }
}
