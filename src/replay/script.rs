use arcball::{DragCommand, Ray};
use glam::DVec3;
use serde::Deserialize;

/// One scripted pointer event, with the ray already unprojected.
#[derive(Debug, Clone, Deserialize)]
pub enum GestureStep {
    Press { origin: [f64; 3], direction: [f64; 3] },
    Move { origin: [f64; 3], direction: [f64; 3] },
    Release,
    Reset,
}

impl GestureStep {
    /// Grab the -Z pole and sweep it round to -X.
    pub fn quarter_turn() -> Vec<Self> {
        vec![
            GestureStep::Press {
                origin: [0.0, 0.0, -10.0],
                direction: [0.0, 0.0, 1.0],
            },
            GestureStep::Move {
                origin: [-10.0, 0.0, -10.0],
                direction: [1.0, 0.0, 1.0],
            },
            GestureStep::Move {
                origin: [-10.0, 0.0, 0.0],
                direction: [1.0, 0.0, 0.0],
            },
            GestureStep::Release,
        ]
    }

    pub fn to_command(&self) -> DragCommand {
        match *self {
            GestureStep::Press { origin, direction } => DragCommand::Press(ray(origin, direction)),
            GestureStep::Move { origin, direction } => DragCommand::Move(ray(origin, direction)),
            GestureStep::Release => DragCommand::Release,
            GestureStep::Reset => DragCommand::Reset,
        }
    }
}

fn ray(origin: [f64; 3], direction: [f64; 3]) -> Ray {
    Ray::new(DVec3::from_array(origin), DVec3::from_array(direction))
}
