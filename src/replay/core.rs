use std::path::Path;

use anyhow::{Context, Result};
use arcball::TrackballConfig;
use serde::Deserialize;

use super::script::GestureStep;

/// A replay file: which trackball to build and which gesture to feed it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub app_name: String,
    pub trackball: TrackballConfig,
    pub steps: Vec<GestureStep>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            app_name: "Spin Replay".to_string(),
            trackball: TrackballConfig::default(),
            steps: GestureStep::quarter_turn(),
        }
    }
}

impl ReplayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read replay file {}", path.display()))?;
        let config: Self = ron::from_str(&source)
            .with_context(|| format!("failed to parse replay file {}", path.display()))?;
        config
            .trackball
            .validate()
            .context("replay file has an invalid trackball section")?;
        Ok(config)
    }
}
