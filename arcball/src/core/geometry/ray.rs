use glam::DVec3;

/// A half-line `origin + t * direction`.
/// The direction is not required to be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    pub const fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Builds a ray from a packed `[ox, oy, oz, dx, dy, dz]` buffer.
    pub fn from_array(packed: [f64; 6]) -> Self {
        Self {
            origin: DVec3::new(packed[0], packed[1], packed[2]),
            direction: DVec3::new(packed[3], packed[4], packed[5]),
        }
    }
}
