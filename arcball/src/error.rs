use std::fmt;

use glam::DVec3;

use crate::core::state::Phase;

/// The trackball operation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Play,
    Track,
    Pause,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Play => f.write_str("play"),
            Operation::Track => f.write_str("track"),
            Operation::Pause => f.write_str("pause"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackballError {
    #[error("cannot {operation} while {phase}")]
    InvalidState { operation: Operation, phase: Phase },

    #[error("no rotation carries {start} onto {point}")]
    DegenerateArc { start: DVec3, point: DVec3 },

    #[error("invalid trackball config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackballError>;
