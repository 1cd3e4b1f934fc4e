//! Writing the accumulated image to disk.
//!
//! PNG output is clamped to [0, 1] and sRGB encoded to 8 bits; EXR keeps the
//! linear float radiance untouched.

use std::path::Path;
use image::{ImageBuffer, Rgba};
use log::info;
use progressive_common::gpu_buffer::PixelBuffer;
use progressive_common::{Error, Result};

pub fn save_image(image: &PixelBuffer, path: &Path) -> Result<()> {
    let extension = path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_image_as_png(image, path),
        "exr" => save_image_as_exr(image, path),
        _ => Err(Error::UnsupportedFormat(path.display().to_string())),
    }
}

fn save_image_as_png(image: &PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = image.size();
    let data: Vec<u8> = image.to_top_down_f32()
        .chunks_exact(4)
        .flat_map(|p| [to_srgb8(p[0]), to_srgb8(p[1]), to_srgb8(p[2]), to_unorm8(p[3])])
        .collect();

    let buffer = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width, height, data)
        .ok_or(Error::InvalidViewport { width, height })?;
    buffer.save(path)?;
    info!("saved {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

fn save_image_as_exr(image: &PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = image.size();
    let buffer = ImageBuffer::<Rgba<f32>, Vec<f32>>::from_raw(width, height, image.to_top_down_f32())
        .ok_or(Error::InvalidViewport { width, height })?;
    buffer.save(path)?;
    info!("saved {}x{} EXR to {}", width, height, path.display());
    Ok(())
}

fn to_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn to_srgb8(linear: f32) -> u8 {
    let c = if linear.is_nan() { 0.0 } else { linear.clamp(0.0, 1.0) };
    let encoded = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    to_unorm8(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(2, 2).unwrap();
        // texture order: the first row is the bottom of the picture
        buffer.pixels_mut()[0] = [1.0, 0.0, 0.0, 1.0];
        buffer.pixels_mut()[1] = [2.0, 2.0, 2.0, 1.0];
        buffer.pixels_mut()[2] = [0.0, 0.0, 1.0, 1.0];
        buffer.pixels_mut()[3] = [0.5, 0.5, 0.5, 1.0];
        buffer
    }

    #[test]
    fn srgb_encoding() {
        assert_eq!(to_srgb8(0.0), 0);
        assert_eq!(to_srgb8(1.0), 255);
        assert_eq!(to_srgb8(4.0), 255);
        assert_eq!(to_srgb8(-1.0), 0);
        assert_eq!(to_srgb8(f32::NAN), 0);
        assert_eq!(to_srgb8(0.5), 188);
    }

    #[test]
    fn png_is_written_top_down() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save_image(&gradient_buffer(), &path).unwrap();

        let png = image::open(&path).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (2, 2));
        assert_eq!(png.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(png.get_pixel(0, 1).0, [255, 0, 0, 255]);
        assert_eq!(png.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn exr_keeps_linear_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.exr");
        save_image(&gradient_buffer(), &path).unwrap();

        let exr = image::open(&path).unwrap().to_rgba32f();
        assert_eq!(exr.get_pixel(1, 1).0, [2.0, 2.0, 2.0, 1.0]);
        assert_eq!(exr.get_pixel(1, 0).0, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = save_image(&gradient_buffer(), Path::new("frame.bmp"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
