use std::f32::consts::PI;
use glam::{Vec2, Vec3};
use rand::Rng;

pub fn random_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

pub fn random_range_f32<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min .. max)
}

/// Uniformly distributed point inside the unit disk.
pub fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    // r^2 is distributed as U(0, 1)
    let r = random_f32(rng).sqrt();
    let alpha = 2.0 * PI * random_f32(rng);
    Vec2::new(r * alpha.cos(), r * alpha.sin())
}

/// Random hue, saturation and value, each uniform in [0, 1).
pub fn random_color_hsv<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let h = random_f32(rng);
    let s = random_f32(rng);
    let v = random_f32(rng);
    hsv_to_rgb(h, s, v)
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let h6 = (h - h.floor()) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}
