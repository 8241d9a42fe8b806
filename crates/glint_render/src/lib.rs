//! Glint - CPU Path Tracing
//!
//! A Monte Carlo path tracer for simple sphere scenes. Rays are cast
//! through a pinhole camera with per-pixel jitter, bounced recursively
//! through the scene via the [`Hittable`] and [`Material`] contracts,
//! and averaged into a gamma-corrected 8-bit image. Rendering is
//! parallelized over scanlines with an atomic row counter.

mod camera;
mod film;
mod hittable;
mod integrator;
mod material;
mod scanline;
mod sphere;
mod writer;

pub use camera::Camera;
pub use film::ImageBuffer;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, RenderConfig,
};
pub use material::{Color, Lambertian, Material, Metal, Scatter};
pub use scanline::{render_parallel, render_rows, ScanlineResult};
pub use sphere::Sphere;
pub use writer::{save_jpg, save_png, write_ppm, WriteError};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};

use rand::{Rng, RngCore};

/// Uniform random f32 in [0, 1) from an explicit generator.
///
/// All sampling in the renderer goes through caller-supplied rng state
/// so that renders are reproducible given a seed.
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}
