//! Core path tracing integrator.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Gamma correction
//! - Anti-aliasing via multi-sampling

use crate::{Camera, Color, Hittable, ImageBuffer, Ray};
use glint_math::Interval;
use rand::RngCore;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Whether to use sky gradient instead of solid background
    pub use_sky_gradient: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            use_sky_gradient: true,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces until the material absorbs the
/// ray, the depth budget runs out, or the ray escapes to the sky.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    // t_min of 0.001 suppresses self-intersection at the bounce origin
    match world.hit(ray, Interval::new(0.001, f32::INFINITY)) {
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some(scatter) => {
                // Ray scattered - continue tracing
                let scattered_color =
                    ray_color(&scatter.scattered, world, depth - 1, config, rng);
                scatter.attenuation * scattered_color
            }
            // Ray was absorbed
            None => Color::ZERO,
        },
        None => {
            // Ray didn't hit anything - return background
            if config.use_sky_gradient {
                sky_gradient(ray)
            } else {
                config.background
            }
        }
    }
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a color to 8-bit RGB.
///
/// Gamma-corrects each channel, clamps to [0, 0.999] and scales by 256.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let r = (256.0 * intensity.clamp(linear_to_gamma(color.x))) as u8;
    let g = (256.0 * intensity.clamp(linear_to_gamma(color.y))) as u8;
    let b = (256.0 * intensity.clamp(linear_to_gamma(color.z))) as u8;
    [r, g, b]
}

/// Render a single pixel with multi-sampling.
///
/// Each sample jitters the camera ray inside the pixel footprint; the
/// average over all samples is the pixel's color estimate.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded reference path; see [`crate::render_parallel`] for
/// the scanline-parallel renderer.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    image
}
