use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use super::intersection::IntersectionTag;
use crate::error::GeomError;

/// Read access to planar coordinates.
///
/// Everything in the kernel reads points through this trait, so callers can
/// pass their own point types.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn z(&self) -> f64 {
        0.0
    }
}

/// A point type the intersection routines can construct results in.
pub trait FromPlanar: Planar + Sized {
    fn from_parts(x: f64, y: f64, z: f64, tag: IntersectionTag) -> Self;
}

/// A point carrying the classification it was derived with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub tag: IntersectionTag,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            tag: IntersectionTag::None,
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Construct a point, rejecting NaN or infinite coordinates.
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self, GeomError> {
        if x.is_finite() && y.is_finite() && z.is_finite() {
            Ok(Self::new(x, y, z))
        } else {
            Err(GeomError::NonFiniteCoordinate { x, y, z })
        }
    }

    pub fn with_tag(self, tag: IntersectionTag) -> Self {
        Self { tag, ..self }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Planar for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}

impl FromPlanar for Point {
    fn from_parts(x: f64, y: f64, z: f64, tag: IntersectionTag) -> Self {
        Self { x, y, z, tag }
    }
}

// Tolerant comparison looks at coordinates only.
impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl Planar for nalgebra::Point2<f64> {
    fn x(&self) -> f64 {
        self.coords.x
    }

    fn y(&self) -> f64 {
        self.coords.y
    }
}

impl FromPlanar for nalgebra::Point2<f64> {
    fn from_parts(x: f64, y: f64, _z: f64, _tag: IntersectionTag) -> Self {
        nalgebra::Point2::new(x, y)
    }
}

impl Planar for nalgebra::Point3<f64> {
    fn x(&self) -> f64 {
        self.coords.x
    }

    fn y(&self) -> f64 {
        self.coords.y
    }

    fn z(&self) -> f64 {
        self.coords.z
    }
}

impl FromPlanar for nalgebra::Point3<f64> {
    fn from_parts(x: f64, y: f64, z: f64, _tag: IntersectionTag) -> Self {
        nalgebra::Point3::new(x, y, z)
    }
}

/// A 2D direction, supplied by callers for ray casts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slope {
    pub dx: f64,
    pub dy: f64,
}

impl Slope {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Direction from `from` to `to`.
    pub fn between<P: Planar>(from: &P, to: &P) -> Self {
        Self::new(to.x() - from.x(), to.y() - from.y())
    }

    /// Unit-length copy, or `None` for a zero direction.
    pub fn normalized(&self) -> Option<Self> {
        let len = (self.dx * self.dx + self.dy * self.dy).sqrt();
        if len < 1e-15 {
            None
        } else {
            Some(Self::new(self.dx / len, self.dy / len))
        }
    }
}
