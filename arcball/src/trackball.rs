use glam::{DMat4, DQuat, DVec3};

use crate::config::TrackballConfig;
use crate::core::geometry::{Intersection, Ray, SO3, Sphere};
use crate::core::state::{Phase, RotationState};
use crate::error::{Operation, Result, TrackballError};
use crate::uniform::ModelUniform;

/// Turns drags across a virtual sphere into an accumulated rotation.
///
/// A gesture is `play` (anchor) then any number of `track` calls, then
/// `pause` (commit). Points are relative to the sphere origin, which is what
/// [`Trackball::intersect`] returns.
#[derive(Debug, Clone)]
pub struct Trackball {
    sphere: Sphere,
    renormalize: bool,
    phase: Phase,
    state: RotationState,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new(2.0, DVec3::ZERO)
    }
}

impl Trackball {
    pub fn new(radius: f64, origin: DVec3) -> Self {
        Self {
            sphere: Sphere::new(radius, origin),
            renormalize: true,
            phase: Phase::Idle,
            state: RotationState::default(),
        }
    }

    pub fn from_config(config: &TrackballConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sphere: config.sphere(),
            renormalize: config.renormalize,
            phase: Phase::Idle,
            state: RotationState::default(),
        })
    }

    pub fn with_renormalize(mut self, renormalize: bool) -> Self {
        self.renormalize = renormalize;
        self
    }

    pub fn radius(&self) -> f64 {
        self.sphere.radius
    }

    pub fn origin(&self) -> DVec3 {
        self.sphere.origin
    }

    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn orientation(&self) -> DQuat {
        self.state.orientation
    }

    pub fn intermediate(&self) -> DQuat {
        self.state.intermediate
    }

    pub fn rotation(&self) -> DQuat {
        self.state.rotation
    }

    pub fn start(&self) -> DVec3 {
        self.state.start
    }

    pub fn model(&self) -> DMat4 {
        self.state.model
    }

    pub fn model_uniform(&self) -> ModelUniform {
        ModelUniform::from(self.state.model)
    }

    pub fn intersect(&self, ray: &Ray) -> Intersection {
        self.sphere.intersect(ray)
    }

    /// Records the anchor of a new drag.
    pub fn play(&mut self, point: DVec3) -> Result<()> {
        self.expect_phase(Operation::Play, Phase::Idle)?;

        self.state.start = point;
        self.phase = Phase::Dragging;
        tracing::debug!(target: "trackball", start = %point, "drag started");
        Ok(())
    }

    /// Rotates from the anchor towards `point` on top of the committed
    /// orientation, and rewrites the model matrix.
    ///
    /// A degenerate arc leaves every field as it was.
    pub fn track(&mut self, point: DVec3) -> Result<DQuat> {
        self.expect_phase(Operation::Track, Phase::Dragging)?;

        let start = self.state.start;
        let intermediate = SO3::arc(start, point).map_err(|failure| {
            tracing::debug!(
                target: "trackball",
                %start,
                %point,
                ?failure,
                "skipping degenerate arc"
            );
            TrackballError::DegenerateArc { start, point }
        })?;

        let rotation = SO3::compose(intermediate, self.state.orientation);
        self.state.intermediate = intermediate;
        self.state.rotation = rotation;
        self.state.model = SO3::model_matrix(rotation);

        tracing::trace!(target: "trackball", %point, ?rotation, "tracked");
        Ok(rotation)
    }

    /// Commits the current rotation as the new baseline and ends the drag.
    pub fn pause(&mut self) -> Result<DQuat> {
        self.expect_phase(Operation::Pause, Phase::Dragging)?;

        self.state.orientation = if self.renormalize {
            self.state.rotation.normalize()
        } else {
            self.state.rotation
        };
        self.phase = Phase::Idle;

        tracing::debug!(
            target: "trackball",
            orientation = ?self.state.orientation,
            "drag committed"
        );
        Ok(self.state.orientation)
    }

    /// Drops all accumulated rotation and any drag in progress.
    pub fn reset(&mut self) {
        self.state = RotationState::default();
        self.phase = Phase::Idle;
        tracing::debug!(target: "trackball", "reset to identity");
    }

    fn expect_phase(&self, operation: Operation, required: Phase) -> Result<()> {
        if self.phase == required {
            Ok(())
        } else {
            Err(TrackballError::InvalidState {
                operation,
                phase: self.phase,
            })
        }
    }
}
