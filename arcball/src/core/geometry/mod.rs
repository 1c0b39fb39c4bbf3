pub mod ray;
pub mod so3;
pub mod sphere;

pub use ray::Ray;
pub use so3::{ArcFailure, SO3};
pub use sphere::{Intersection, Sphere};
