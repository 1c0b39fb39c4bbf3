use crate::core::geometry::SO3;
use crate::trackball::Trackball;

/// A synchronous probe that extracts a scalar value from the trackball state.
pub trait Probe {
    fn name(&self) -> &str;
    fn measure(&self, trackball: &Trackball) -> f64;
}

/// How far the committed orientation has wandered off the unit sphere.
/// `| |q| - 1 |`
pub struct NormDriftProbe;

impl Probe for NormDriftProbe {
    fn name(&self) -> &str {
        "Orientation Norm Drift"
    }

    fn measure(&self, trackball: &Trackball) -> f64 {
        (trackball.orientation().length() - 1.0).abs()
    }
}

/// Angle of the rotation currently shown, in radians.
pub struct AngleProbe;

impl Probe for AngleProbe {
    fn name(&self) -> &str {
        "Rotation Angle"
    }

    fn measure(&self, trackball: &Trackball) -> f64 {
        SO3::angle(trackball.rotation())
    }
}
