use serde::{Deserialize, Serialize};
use tracing::trace;

use super::point::{FromPlanar, Planar, Slope};
use crate::tolerance::Tolerances;

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-4;
/// Slack on the lower bound of the segment parameter band.
pub const PARAM_SLACK: f64 = 1e-4;
/// Upper bound of the segment parameter band.
pub const PARAM_UPPER: f64 = 1.0001;
/// Parallel threshold for ray casts, whose directions are trusted.
pub const RAY_PARALLEL_EPSILON: f64 = 1e-12;

/// How a computed intersection relates to its two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntersectionTag {
    #[default]
    #[serde(rename = "")]
    None,
    /// Only the infinite extensions meet.
    #[serde(rename = "project")]
    Project,
    /// Both parameters fall inside their segments.
    #[serde(rename = "segint")]
    SegInt,
    /// Both parameters are non-negative but at least one lies past its segment.
    #[serde(rename = "rayint")]
    RayInt,
    #[serde(rename = "parallel")]
    Parallel,
}

impl IntersectionTag {
    pub fn as_str(self) -> &'static str {
        match self {
            IntersectionTag::None => "",
            IntersectionTag::Project => "project",
            IntersectionTag::SegInt => "segint",
            IntersectionTag::RayInt => "rayint",
            IntersectionTag::Parallel => "parallel",
        }
    }
}

/// A derived intersection point plus how it was found.
///
/// `dist` is the parameter along the first segment (or ray) and `p1`/`p2`
/// are the endpoints of the segment it was tested against.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<P> {
    pub point: P,
    pub tag: IntersectionTag,
    pub dist: f64,
    pub p1: P,
    pub p2: P,
}

/// Outcome of [`intersect`] when a result is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection<P> {
    Parallel,
    Hit(Intersection<P>),
}

impl<P> SegmentIntersection<P> {
    pub fn is_parallel(&self) -> bool {
        matches!(self, SegmentIntersection::Parallel)
    }

    pub fn tag(&self) -> IntersectionTag {
        match self {
            SegmentIntersection::Parallel => IntersectionTag::Parallel,
            SegmentIntersection::Hit(hit) => hit.tag,
        }
    }

    pub fn hit(&self) -> Option<&Intersection<P>> {
        match self {
            SegmentIntersection::Parallel => None,
            SegmentIntersection::Hit(hit) => Some(hit),
        }
    }

    pub fn into_hit(self) -> Option<Intersection<P>> {
        match self {
            SegmentIntersection::Parallel => None,
            SegmentIntersection::Hit(hit) => Some(hit),
        }
    }
}

// ─── Shared Helpers ─────────────────────────────────────────────────────────

// A zero (or NaN) z means "not set".
fn pick_z(primary: f64, fallback: f64) -> f64 {
    if primary == 0.0 || primary.is_nan() {
        fallback
    } else {
        primary
    }
}

fn in_segment_band(t: f64) -> bool {
    (-PARAM_SLACK..=PARAM_UPPER).contains(&t)
}

// ─── Segment-Segment Intersection ───────────────────────────────────────────

/// Intersect segment `p1->p2` with segment `p3->p4`.
///
/// Parallel or collinear inputs give [`SegmentIntersection::Parallel`], or
/// `None` when a `test` was requested without `parallel_ok`. A `test` of
/// `Some(IntersectionTag::None)` counts as no test. A `test` of
/// [`IntersectionTag::SegInt`] or [`IntersectionTag::RayInt`] filters out
/// results of any other class before a point is built.
pub fn intersect<P>(
    p1: &P,
    p2: &P,
    p3: &P,
    p4: &P,
    test: Option<IntersectionTag>,
    parallel_ok: bool,
) -> Option<SegmentIntersection<P>>
where
    P: FromPlanar + Clone,
{
    let d1x = p2.x() - p1.x();
    let d1y = p2.y() - p1.y();
    let d2x = p4.x() - p3.x();
    let d2y = p4.y() - p3.y();
    let d = d2y * d1x - d2x * d1y;

    if d.abs() < PARALLEL_EPSILON {
        trace!(d, "segments parallel");
        let requested = matches!(test, Some(t) if t != IntersectionTag::None);
        return if requested && !parallel_ok {
            None
        } else {
            Some(SegmentIntersection::Parallel)
        };
    }

    let oy = p1.y() - p3.y();
    let ox = p1.x() - p3.x();
    let a = (d2x * oy - d2y * ox) / d;
    let b = (d1x * oy - d1y * ox) / d;

    let segint = in_segment_band(a) && in_segment_band(b);
    let rayint = a >= 0.0 && b >= 0.0;

    match test {
        Some(IntersectionTag::SegInt) if !segint => return None,
        Some(IntersectionTag::RayInt) if !rayint => return None,
        _ => {}
    }

    let tag = if segint {
        IntersectionTag::SegInt
    } else if rayint {
        IntersectionTag::RayInt
    } else {
        IntersectionTag::Project
    };

    let point = P::from_parts(
        p1.x() + a * d1x,
        p1.y() + a * d1y,
        pick_z(p3.z(), p4.z()),
        tag,
    );

    Some(SegmentIntersection::Hit(Intersection {
        point,
        tag,
        dist: a,
        p1: p3.clone(),
        p2: p4.clone(),
    }))
}

/// Shorthand for a strict segment-segment crossing.
pub fn segment_intersection<P>(p1: &P, p2: &P, p3: &P, p4: &P) -> Option<Intersection<P>>
where
    P: FromPlanar + Clone,
{
    intersect(p1, p2, p3, p4, Some(IntersectionTag::SegInt), false)
        .and_then(SegmentIntersection::into_hit)
}

// ─── Ray-Line Intersection ──────────────────────────────────────────────────

/// Cast a ray from `origin` along `slope` against segment `p1->p2`.
///
/// With `infinite` the segment is treated as a full line. Otherwise the hit
/// must lie on the segment (within merge tolerance) and ahead of the origin.
pub fn intersect_ray_line<P>(
    origin: &P,
    slope: &Slope,
    p1: &P,
    p2: &P,
    infinite: bool,
    tol: &Tolerances,
) -> Option<Intersection<P>>
where
    P: FromPlanar + Clone,
{
    let s1x = slope.dx;
    let s1y = slope.dy;
    let s2x = p2.x() - p1.x();
    let s2y = p2.y() - p1.y();
    let d = s2y * s1x - s2x * s1y;

    if d.abs() < RAY_PARALLEL_EPSILON {
        return None;
    }

    let oy = origin.y() - p1.y();
    let ox = origin.x() - p1.x();
    let a = (s2x * oy - s2y * ox) / d;
    let b = (s1x * oy - s1y * ox) / d;

    if !(infinite || (tol.in_close_range(b, 0.0, 1.0) && a >= 0.0)) {
        return None;
    }

    let point = P::from_parts(
        origin.x() + a * s1x,
        origin.y() + a * s1y,
        pick_z(p2.z(), origin.z()),
        IntersectionTag::None,
    );

    Some(Intersection {
        point,
        tag: IntersectionTag::None,
        dist: a,
        p1: p1.clone(),
        p2: p2.clone(),
    })
}

// ─── Ray Hit Ordering ───────────────────────────────────────────────────────

/// Sort hits by their distance along the shared ray, nearest first.
pub fn order_along_ray<P>(hits: &mut [Intersection<P>]) {
    hits.sort_by(|a, b| a.dist.total_cmp(&b.dist));
}

/// Cast one ray against many segments and return the hits nearest first.
pub fn ray_hits<P>(
    origin: &P,
    slope: &Slope,
    segments: &[(P, P)],
    tol: &Tolerances,
) -> Vec<Intersection<P>>
where
    P: FromPlanar + Clone,
{
    let mut hits: Vec<_> = segments
        .iter()
        .filter_map(|(a, b)| intersect_ray_line(origin, slope, a, b, false, tol))
        .collect();
    order_along_ray(&mut hits);
    hits
}
