use glam::DVec3;

use super::ray::Ray;

/// Where a ray crosses a sphere.
///
/// Points are expressed relative to the sphere origin, which is the frame the
/// trackball measures arcs in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The ray never reaches the surface (or has no direction).
    Miss,
    /// The ray grazes the surface at a single repeated root.
    Tangent { t: f64, point: DVec3 },
    /// The ray enters and leaves the surface.
    ///
    /// `t0 = c / q` and `t1 = q / a`. For a ray heading towards the centre
    /// (`b <= 0`) `t0` is the smaller root; a ray pointing away swaps them.
    Secant {
        t0: f64,
        t1: f64,
        near: DVec3,
        far: DVec3,
    },
}

impl Intersection {
    pub fn is_hit(&self) -> bool {
        !matches!(self, Intersection::Miss)
    }

    /// Ray parameters of both crossings. A tangent reports its root twice.
    pub fn roots(&self) -> Option<[f64; 2]> {
        match *self {
            Intersection::Miss => None,
            Intersection::Tangent { t, .. } => Some([t, t]),
            Intersection::Secant { t0, t1, .. } => Some([t0, t1]),
        }
    }

    pub fn near(&self) -> Option<DVec3> {
        match *self {
            Intersection::Miss => None,
            Intersection::Tangent { point, .. } => Some(point),
            Intersection::Secant { near, .. } => Some(near),
        }
    }

    pub fn far(&self) -> Option<DVec3> {
        match *self {
            Intersection::Miss => None,
            Intersection::Tangent { point, .. } => Some(point),
            Intersection::Secant { far, .. } => Some(far),
        }
    }
}

/// The virtual sphere a trackball rotates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub origin: DVec3,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: 2.0,
            origin: DVec3::ZERO,
        }
    }
}

impl Sphere {
    pub const fn new(radius: f64, origin: DVec3) -> Self {
        Self { radius, origin }
    }

    /// Solves `|offset + t * d|^2 = r^2` for `t`, where `offset` is the ray
    /// origin seen from the sphere origin.
    pub fn intersect(&self, ray: &Ray) -> Intersection {
        let d = ray.direction;
        let offset = ray.origin - self.origin;

        let a = d.length_squared();
        let b = 2.0 * d.dot(offset);
        let c = offset.length_squared() - self.radius * self.radius;

        if a == 0.0 {
            return Intersection::Miss;
        }

        let discriminant = b * b - 4.0 * a * c;

        if discriminant == 0.0 {
            let t = -0.5 * b / a;
            return Intersection::Tangent {
                t,
                point: d * t + offset,
            };
        }

        if discriminant < 0.0 || !discriminant.is_finite() {
            return Intersection::Miss;
        }

        // Pick the sign of b so the sum never cancels.
        let q = if b > 0.0 {
            -0.5 * (b + discriminant.sqrt())
        } else {
            -0.5 * (b - discriminant.sqrt())
        };

        let t0 = c / q;
        let t1 = q / a;

        Intersection::Secant {
            t0,
            t1,
            near: d * t0 + offset,
            far: d * t1 + offset,
        }
    }
}
