use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::geometry::Sphere;
use crate::error::{Result, TrackballError};

/// Construction parameters for a [`Trackball`](crate::Trackball), loadable from RON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballConfig {
    pub radius: f64,
    pub origin: [f64; 3],
    /// Normalize the orientation every time a drag is committed.
    pub renormalize: bool,
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            origin: [0.0; 3],
            renormalize: true,
        }
    }
}

impl TrackballConfig {
    pub fn from_ron(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_ron(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TrackballError::InvalidConfig(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(TrackballError::InvalidConfig(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }
        Ok(())
    }

    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.radius, DVec3::from_array(self.origin))
    }
}
