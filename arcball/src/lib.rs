pub mod core {
    pub mod geometry;
    pub mod state;
}

pub mod investigation {
    pub mod probe;
}

pub mod config;
pub mod control;
pub mod error;
pub mod trackball;
pub mod uniform;

pub use config::TrackballConfig;
pub use control::{CommandSender, ControlEvent, DragCommand, DragController};
pub use crate::core::geometry::{Intersection, Ray, Sphere};
pub use crate::core::state::Phase;
pub use error::TrackballError;
pub use trackball::Trackball;
pub use uniform::ModelUniform;
