//! Tolerance-driven geometry predicates for the slicing pipeline.
//!
//! Slicing, offsetting, packing and toolpath code all make their discrete
//! decisions (does this segment cross that one, is this triple clockwise,
//! are these two scalars the same) through this crate, parameterized by a
//! single [`Tolerances`] registry.

pub mod error;
pub mod geometry;
pub mod tolerance;

pub use error::GeomError;
pub use geometry::circumcenter::{center_2d, center_3d};
pub use geometry::combinatorics::{format_thousands, pairwise_combine};
pub use geometry::intersection::{
    intersect, intersect_ray_line, order_along_ray, ray_hits, segment_intersection, Intersection,
    IntersectionTag, SegmentIntersection,
};
pub use geometry::orientation::{
    determinant, is_clockwise, is_collinear, is_counter_clockwise, signed_area2,
};
pub use geometry::scalar::{
    dist_sq, dist_sq_coords, in_close_range, in_range, is_close_to, lerp, offset_precision, round,
    round_to, sqr, Lerp,
};
pub use geometry::{FromPlanar, Planar, Point, Slope};
pub use tolerance::{ToleranceError, ToleranceKey, Tolerances};
