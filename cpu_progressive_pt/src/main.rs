mod cli;
mod logger;

use std::time::Instant;
use clap::Parser;
use glam::Vec3;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use progressive_common::camera::Camera;
use progressive_common::parameters::RenderParameters;
use progressive_common::scene::Scene;
use progressive_common::skybox::Skybox;
use progressive_common::Error;
use cpu_progressive_pt::output;
use cpu_progressive_pt::path_tracer::PathTracer;

use crate::cli::Args;

const SKYBOX_SIZE: (u32, u32) = (512, 256);

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logger::init_logger(args.debug_level.into());

    let mut scene_rng = StdRng::seed_from_u64(args.seed);
    let scene = Scene::random(&args.scene_parameters(), &mut scene_rng);
    let camera = Camera::new(
        Vec3::new(0.0, 40.0, 160.0),    //look from
        Vec3::new(0.0, 5.0, 0.0));      //look at
    let skybox = Skybox::gradient(SKYBOX_SIZE.0, SKYBOX_SIZE.1)?;

    let sampling_parameters = args.sampling_parameters()?;
    let render_parameters = RenderParameters::new(camera,
                                                  args.vfov,
                                                  sampling_parameters,
                                                  (args.width, args.height))?;

    let mut path_tracer = PathTracer::new(&scene, skybox, &render_parameters, args.seed)?;

    let start = Instant::now();
    while !path_tracer.is_converged() {
        let frame_start = Instant::now();
        path_tracer.render_frame();
        debug!("frame took {:.2?}", frame_start.elapsed());
        info!("{:>5.1}% ({} / {} samples)",
              100.0 * path_tracer.progress(),
              path_tracer.accumulated_samples(),
              sampling_parameters.samples_per_pixel);
    }
    info!("rendered {} samples per pixel in {:.2?}", path_tracer.accumulated_samples(), start.elapsed());

    output::save_image(path_tracer.image(), &args.output)
}
