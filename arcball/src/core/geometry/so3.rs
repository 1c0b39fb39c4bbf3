use glam::{DMat3, DMat4, DQuat, DVec3};

/// The Special Orthogonal Group SO(3) representing 3D rotations.
/// We use Unit Quaternions for implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SO3;

/// Why two sphere points do not define a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcFailure {
    /// The angle came out as NaN (zero-length point, NaN input, or a cosine
    /// pushed outside [-1, 1] by rounding).
    UndefinedAngle,
    /// The points are opposite each other, so every axis is equally valid.
    Antipodal,
}

impl SO3 {
    /// The rotation carrying direction `from` onto direction `to`, both seen
    /// from the sphere origin.
    ///
    /// Axis: `from x to` normalized. Angle: `acos(from . to / (|from| |to|))`.
    /// The cosine is not clamped, but parallel points are caught first
    /// through their exactly-zero cross product.
    pub fn arc(from: DVec3, to: DVec3) -> Result<DQuat, ArcFailure> {
        let axis = from.cross(to);
        let axis_length = axis.length();
        if axis_length == 0.0 && from.length() > 0.0 && to.length() > 0.0 {
            // Collinear: either no motion at all or a half turn about nothing.
            return if from.dot(to) > 0.0 {
                Ok(DQuat::IDENTITY)
            } else {
                Err(ArcFailure::Antipodal)
            };
        }

        let angle = (from.dot(to) / (from.length() * to.length())).acos();
        if angle.is_nan() || axis_length == 0.0 {
            return Err(ArcFailure::UndefinedAngle);
        }

        let axis = axis / axis_length;
        let (sin, cos) = (angle * 0.5).sin_cos();
        Ok(DQuat::from_xyzw(axis.x * sin, axis.y * sin, axis.z * sin, cos))
    }

    /// Hamilton product `delta * base`: `base` first, then `delta` on top of it.
    pub fn compose(delta: DQuat, base: DQuat) -> DQuat {
        delta * base
    }

    /// Writes the rotation block of a model matrix.
    /// Translation column and homogeneous row are identity.
    pub fn model_matrix(q: DQuat) -> DMat4 {
        DMat4::from_mat3(DMat3::from_quat(q))
    }

    /// Rotation angle of `q` in radians, in [0, pi].
    pub fn angle(q: DQuat) -> f64 {
        let w = q.w.abs().min(1.0);
        2.0 * w.acos()
    }
}
