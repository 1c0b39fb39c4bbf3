pub mod core;
pub mod script;

use std::time::Instant;

use anyhow::Result;
use arcball::investigation::probe::{AngleProbe, NormDriftProbe, Probe};
use arcball::{ControlEvent, DragController, Trackball};
use self::core::ReplayConfig;

pub struct ReplayApp {
    config: ReplayConfig,
    probes: Vec<Box<dyn Probe>>,
}

impl ReplayApp {
    pub fn new(config: ReplayConfig) -> Self {
        Self {
            config,
            probes: vec![Box::new(NormDriftProbe), Box::new(AngleProbe)],
        }
    }

    pub fn run(self) -> Result<Trackball> {
        tracing::info!(
            target: "replay",
            app = %self.config.app_name,
            steps = self.config.steps.len(),
            radius = self.config.trackball.radius,
            "Replay starting"
        );

        let trackball = Trackball::from_config(&self.config.trackball)?;
        let (mut controller, sender) = DragController::new(trackball);

        for step in &self.config.steps {
            sender.send(step.to_command());
        }

        let started = Instant::now();
        let mut rejected = 0usize;
        controller.drain_with(|cmd, outcome| match outcome {
            Ok(ControlEvent::Missed) => {
                tracing::warn!(target: "replay", command = ?cmd, "ray missed the trackball");
            }
            Ok(event) => {
                tracing::debug!(target: "replay", ?event, "step applied");
            }
            Err(err) => {
                rejected += 1;
                tracing::warn!(target: "replay", %err, command = ?cmd, "step rejected");
            }
        });

        let trackball = controller.into_trackball();
        self.report(&trackball, rejected, started.elapsed());
        Ok(trackball)
    }

    fn report(&self, trackball: &Trackball, rejected: usize, elapsed: std::time::Duration) {
        let orientation = trackball.orientation();
        tracing::info!(
            target: "replay",
            w = orientation.w,
            x = orientation.x,
            y = orientation.y,
            z = orientation.z,
            rejected,
            elapsed_us = %elapsed.as_micros(),
            "final orientation"
        );

        for (i, column) in trackball.model_uniform().model.iter().enumerate() {
            tracing::info!(target: "replay", column = i, values = ?column, "model");
        }

        for probe in &self.probes {
            tracing::info!(
                target: "replay",
                probe = probe.name(),
                value = probe.measure(trackball),
                "probe"
            );
        }
    }
}
