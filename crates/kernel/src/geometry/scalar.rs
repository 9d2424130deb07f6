//! Scalar helpers shared by the predicates: rounding, squared distances,
//! tolerant comparisons and stepwise interpolation.

use super::point::Planar;
use crate::error::GeomError;
use crate::tolerance::Tolerances;

/// Decimal places used by [`round`].
pub const ROUND_DECIMALS: u32 = 8;

/// Round to [`ROUND_DECIMALS`] decimal places.
pub fn round(value: f64) -> f64 {
    round_to(value, ROUND_DECIMALS)
}

/// Round to `decimals` places. Zero decimals means the default precision.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let decimals = if decimals == 0 { ROUND_DECIMALS } else { decimals };
    let pow = 10f64.powi(decimals as i32);
    (value * pow).round() / pow
}

pub fn sqr(v: f64) -> f64 {
    v * v
}

/// Squared planar distance. Compare against squared tolerances.
pub fn dist_sq<P: Planar>(p1: &P, p2: &P) -> f64 {
    sqr(p2.x() - p1.x()) + sqr(p2.y() - p1.y())
}

pub fn dist_sq_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    sqr(x2 - x1) + sqr(y2 - y1)
}

/// `|a - b| <= tolerance`, falling back to the registry merge distance when
/// `tolerance` is absent or zero.
pub fn is_close_to(a: f64, b: f64, tolerance: Option<f64>, tol: &Tolerances) -> bool {
    let dist = match tolerance {
        Some(d) if d != 0.0 => d,
        _ => tol.merge(),
    };
    (a - b).abs() <= dist
}

/// Inclusive range test that also accepts values within merge distance of
/// either bound.
pub fn in_close_range(value: f64, min: f64, max: f64, tol: &Tolerances) -> bool {
    (is_close_to(value, min, None, tol) || value >= min)
        && (is_close_to(value, max, None, tol) || value <= max)
}

pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

pub fn offset_precision(offset: f64, precision: f64) -> f64 {
    offset.abs() - precision
}

/// Uniform steps from `from` (exclusive) to `to` (inclusive), each no longer
/// than `max_increment`.
///
/// The remainder is spread across all steps, so `lerp(0, 10, 3)` yields
/// `2.5, 5.0, 7.5, 10.0`.
pub fn lerp(from: f64, to: f64, max_increment: f64) -> Result<Lerp, GeomError> {
    if !(max_increment.is_finite() && max_increment > 0.0) {
        return Err(GeomError::InvalidIncrement(max_increment));
    }
    if !(from.is_finite() && to.is_finite()) {
        return Err(GeomError::NonFiniteBounds { from, to });
    }
    let delta = (to - from).abs();
    let mut count = (delta / max_increment).floor();
    if delta % max_increment != 0.0 {
        count += 1.0;
    }
    // usize::MAX as f64 rounds up to 2^64, so anything at or above it overflows
    if !count.is_finite() || count >= usize::MAX as f64 {
        return Err(GeomError::TooManySteps {
            from,
            to,
            max_increment,
        });
    }
    let steps = count as usize;
    let step = if steps == 0 {
        0.0
    } else {
        (to - from) / steps as f64
    };
    Ok(Lerp {
        from,
        to,
        step,
        steps,
        index: 0,
    })
}

/// Iterator returned by [`lerp`]. Clone it to replay the sequence.
#[derive(Debug, Clone)]
pub struct Lerp {
    from: f64,
    to: f64,
    step: f64,
    steps: usize,
    index: usize,
}

impl Iterator for Lerp {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.steps {
            return None;
        }
        self.index += 1;
        if self.index == self.steps {
            Some(self.to)
        } else {
            Some(self.from + self.step * self.index as f64)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.steps - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Lerp {}
