//! Scanline-parallel rendering.
//!
//! Work distribution follows a claim-and-decrement scheme: one shared
//! atomic counter starts at the image height, and each worker thread
//! loops claiming the next unrendered row until the counter runs out.
//! Every row is claimed exactly once and rendered by exactly one
//! worker; completion order across rows is unconstrained. Finished
//! scanlines are sent over a channel and reassembled into the
//! row-indexed image buffer.

use crate::integrator::render_pixel;
use crate::{Camera, Color, Hittable, ImageBuffer, RenderConfig};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::mpsc;
use std::thread;

/// One finished scanline: its row index and `width` pixel colors.
pub struct ScanlineResult {
    pub y: u32,
    pub pixels: Vec<Color>,
}

/// Render a single scanline to a vector of colors.
pub fn render_scanline(
    camera: &Camera,
    world: &dyn Hittable,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(camera.image_width as usize);
    for x in 0..camera.image_width {
        pixels.push(render_pixel(camera, world, x, y, config, rng));
    }
    pixels
}

fn worker_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Render all scanlines in parallel, in nondeterministic row order.
///
/// Each claimed row gets its own rng seeded from `seed` and the row
/// index, so the output is reproducible no matter which worker ends up
/// rendering which row.
pub fn render_rows(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    seed: u64,
) -> Vec<ScanlineResult> {
    let height = camera.image_height;

    // The one piece of shared mutable state: rows left to claim.
    // Signed so that late workers decrementing past zero stay benign.
    let rows_remaining = AtomicI64::new(i64::from(height));
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for _ in 0..worker_count() {
            let tx = tx.clone();
            let rows_remaining = &rows_remaining;
            scope.spawn(move || loop {
                let claimed = rows_remaining.fetch_sub(1, Ordering::Relaxed);
                if claimed <= 0 {
                    break;
                }
                let y = (claimed - 1) as u32;

                let mut rng = StdRng::seed_from_u64(seed ^ u64::from(y));
                let pixels = render_scanline(camera, world, y, config, &mut rng);

                log::debug!("scanline {} rendered, {} remaining", y, claimed - 1);
                if tx.send(ScanlineResult { y, pixels }).is_err() {
                    break;
                }
            });
        }
        // Workers hold the remaining senders
        drop(tx);
    });

    rx.into_iter().collect()
}

/// Render the entire scene across all available cores.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    seed: u64,
) -> ImageBuffer {
    log::info!(
        "rendering {}x{} at {} spp on {} threads",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        worker_count()
    );

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for row in render_rows(camera, world, config, seed) {
        image.set_row(row.y, &row.pixels);
    }
    image
}
