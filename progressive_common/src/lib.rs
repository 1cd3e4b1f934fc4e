pub mod camera;
pub mod error;
pub mod gpu_buffer;
pub mod gpu_structs;
pub mod light;
pub mod parameters;
pub mod projection_matrix;
pub mod ray;
pub mod scene;
pub mod skybox;
pub mod sphere;
pub mod util_funcs;

pub use error::{Error, Result};
