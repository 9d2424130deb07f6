pub mod point;
pub mod scalar;
pub mod combinatorics;
pub mod orientation;
pub mod intersection;
pub mod circumcenter;

pub use point::{FromPlanar, Planar, Point, Slope};
