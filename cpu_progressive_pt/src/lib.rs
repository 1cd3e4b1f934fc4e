//! CPU progressive path tracer: the per-pixel kernel, its parallel dispatch
//! and the accumulation loop driving it.

pub mod accumulate;
pub mod compute_shader;
pub mod gpu_rng;
pub mod intersect;
pub mod output;
pub mod path_tracer;
pub mod ray_gen_shader;
pub mod shade;
