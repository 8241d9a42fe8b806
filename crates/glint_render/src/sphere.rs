//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// The material is shared; several spheres may reference one instance.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;

        let mut rec = HitRecord {
            p,
            normal: outward_normal,
            material: self.material.as_ref(),
            t: root,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use crate::Color;

    fn test_sphere() -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let interval = Interval::new(0.001, f32::INFINITY);

        let rec = sphere.hit(&ray, interval).expect("head-on ray must hit");

        // Near surface of the sphere: t = 0.5, normal facing back at us
        assert!((rec.t - 0.5).abs() < 0.001);
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 0.001);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 0.001);
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = test_sphere();

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let interval = Interval::new(0.001, f32::INFINITY);

        assert!(sphere.hit(&ray, interval).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = test_sphere();

        // Ray starting at the center exits through the far surface
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let interval = Interval::new(0.001, f32::INFINITY);

        let rec = sphere.hit(&ray, interval).expect("interior ray must hit");
        assert!((rec.t - 0.5).abs() < 0.001);
        assert!(!rec.front_face);
        // Normal flipped to oppose the ray
        assert!(ray.direction().dot(rec.normal) < 0.0);
    }

    #[test]
    fn test_near_root_out_of_range_falls_back() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Window excludes the near surface (t = 0.5) but not the far
        // one (t = 1.5)
        let rec = sphere
            .hit(&ray, Interval::new(1.0, f32::INFINITY))
            .expect("far root should be selected");
        assert!((rec.t - 1.5).abs() < 0.001);

        // Window excluding both roots misses entirely
        assert!(sphere.hit(&ray, Interval::new(2.0, f32::INFINITY)).is_none());
    }
}
