//! Glint command-line renderer.
//!
//! Builds the demo sphere scene, renders it across all cores, and
//! writes the result as PNG, JPEG, and PPM.

use anyhow::Result;
use glint_math::Vec3;
use glint_render::{
    render_parallel, save_jpg, save_png, write_ppm, Camera, Color, HittableList, ImageBuffer,
    Lambertian, Metal, RenderConfig, Sphere, WriteError,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

const IMAGE_WIDTH: u32 = 1280;
const IMAGE_HEIGHT: u32 = 720;
const SAMPLES_PER_PIXEL: u32 = 100;
const MAX_DEPTH: u32 = 50;
const SEED: u64 = 0x5eed;

fn build_scene() -> HittableList {
    let ground = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3)));
    let left = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.3));
    let right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)));
    world.add(Arc::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, left)));
    world.add(Arc::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, right)));
    world
}

fn save_all(image: &ImageBuffer) -> usize {
    type Writer = fn(&ImageBuffer, &Path) -> Result<(), WriteError>;
    let outputs: [(&str, &str, Writer); 3] = [
        ("PNG", "render.png", save_png),
        ("JPEG", "render.jpg", save_jpg),
        ("PPM", "render.ppm", write_ppm),
    ];

    let mut failures = 0;
    for (format, path, writer) in outputs {
        match writer(image, Path::new(path)) {
            Ok(()) => log::info!("{} image generated successfully: {}", format, path),
            Err(e) => {
                log::error!("an error occurred while generating the {} image: {}", format, e);
                failures += 1;
            }
        }
    }
    failures
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    let world = build_scene();
    log::info!("scene built in {:?}", start.elapsed());

    let mut camera = Camera::new()
        .with_resolution(IMAGE_WIDTH, IMAGE_HEIGHT)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_vfov(90.0);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: SAMPLES_PER_PIXEL,
        max_depth: MAX_DEPTH,
        ..Default::default()
    };

    let start = Instant::now();
    let image = render_parallel(&camera, &world, &config, SEED);
    log::info!("rendered in {:?}", start.elapsed());

    let failures = save_all(&image);
    if failures > 0 {
        anyhow::bail!("{failures} image write(s) failed");
    }

    Ok(())
}
