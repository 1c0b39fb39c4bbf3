use std::fmt;

use glam::{DMat4, DQuat, DVec3};

/// Where the trackball is in a drag gesture.
///
/// `Idle` only admits `play`; `Dragging` admits `track` and `pause`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => f.write_str("idle"),
            Phase::Dragging => f.write_str("dragging"),
        }
    }
}

/// The rotation bookkeeping of a trackball.
///
/// Every field is a fixed-size value rewritten in place; nothing here is
/// shared or reallocated during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Rotation committed by the last `pause`.
    pub orientation: DQuat,

    /// Arc from `start` to the latest tracked point.
    /// Only meaningful while dragging.
    pub intermediate: DQuat,

    /// `intermediate * orientation`: the total rotation shown while dragging.
    pub rotation: DQuat,

    /// Anchor recorded by `play`, relative to the sphere origin.
    pub start: DVec3,

    /// Column-major model matrix derived from `rotation`.
    pub model: DMat4,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            orientation: DQuat::IDENTITY,
            intermediate: DQuat::IDENTITY,
            rotation: DQuat::IDENTITY,
            start: DVec3::ZERO,
            model: DMat4::IDENTITY,
        }
    }
}
