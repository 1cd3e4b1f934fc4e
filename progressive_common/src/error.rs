//! Error types shared by the renderer crates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Both viewport dimensions must be non-zero
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// A dispatch needs at least one bounce to produce anything
    #[error("Maximum bounce count must be at least 1")]
    InvalidBounceCount,

    /// Accumulation never converges on a target of zero samples
    #[error("Samples per pixel must be at least 1")]
    InvalidSampleCount,

    /// Skybox texel buffer does not cover the declared dimensions
    #[error("Skybox texel count {texels} does not match {width}x{height}")]
    SkyboxSize { width: u32, height: u32, texels: usize },

    /// Output path has an extension we cannot encode
    #[error("Unsupported output format: '{0}' (expected .png or .exr)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
