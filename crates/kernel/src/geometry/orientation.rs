//! Winding and collinearity predicates.
//!
//! Sign convention: a negative [`signed_area2`] is counterclockwise and a
//! positive one is clockwise. Polygon winding code downstream relies on this.

use super::point::Planar;

/// Absolute band around zero area treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-5;

fn trapezoid<P: Planar>(p1: &P, p2: &P) -> f64 {
    (p2.x() - p1.x()) * (p2.y() + p1.y())
}

/// Twice the signed area of triangle `p1 p2 p3`, summed edge by edge.
pub fn signed_area2<P: Planar>(p1: &P, p2: &P, p3: &P) -> f64 {
    trapezoid(p1, p2) + trapezoid(p2, p3) + trapezoid(p3, p1)
}

pub fn is_clockwise<P: Planar>(p1: &P, p2: &P, p3: &P) -> bool {
    signed_area2(p1, p2, p3) > 0.0
}

pub fn is_counter_clockwise<P: Planar>(p1: &P, p2: &P, p3: &P) -> bool {
    signed_area2(p1, p2, p3) < 0.0
}

/// True when `|signed_area2| <= COLLINEAR_EPSILON`. Independent of the
/// tolerance registry.
pub fn is_collinear<P: Planar>(p1: &P, p2: &P, p3: &P) -> bool {
    signed_area2(p1, p2, p3).abs() <= COLLINEAR_EPSILON
}

/// Determinant of the direction vectors `p1->p2` and `p3->p4`.
pub fn determinant<P: Planar>(p1: &P, p2: &P, p3: &P, p4: &P) -> f64 {
    let d1x = p2.x() - p1.x();
    let d1y = p2.y() - p1.y();
    let d2x = p4.x() - p3.x();
    let d2y = p4.y() - p3.y();
    d2y * d1x - d2x * d1y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    #[test]
    fn test_ccw_is_negative() {
        let a = Point::xy(0.0, 0.0);
        let b = Point::xy(1.0, 0.0);
        let c = Point::xy(0.0, 1.0);
        assert_eq!(signed_area2(&a, &b, &c), -1.0);
        assert!(is_counter_clockwise(&a, &b, &c));
        assert!(!is_clockwise(&a, &b, &c));
        assert!(is_clockwise(&c, &b, &a));
    }

    #[test]
    fn test_collinear_band() {
        let a = Point::xy(0.0, 0.0);
        let b = Point::xy(1.0, 0.0);
        assert!(is_collinear(&a, &b, &Point::xy(2.0, 0.0)));
        // |area2| lands exactly on the band edge
        let on_band = Point::xy(0.5, 1e-5);
        assert!((signed_area2(&a, &b, &on_band).abs() - 1e-5).abs() < 1e-18);
        assert!(is_collinear(&a, &b, &on_band));
        let above = Point::xy(0.5, 1.1e-5);
        assert!(!is_collinear(&a, &b, &above));
    }

    #[test]
    fn test_collinear_dead_zone_overlaps_orientation() {
        let a = Point::xy(0.0, 0.0);
        let b = Point::xy(1.0, 0.0);
        let c = Point::xy(0.5, 1e-7);
        assert!(is_collinear(&a, &b, &c));
        assert!(is_counter_clockwise(&a, &b, &c));
    }

    #[test]
    fn test_determinant() {
        let p1 = Point::xy(0.0, 0.0);
        let p2 = Point::xy(2.0, 0.0);
        let p3 = Point::xy(0.0, 0.0);
        let p4 = Point::xy(0.0, 3.0);
        assert_eq!(determinant(&p1, &p2, &p3, &p4), 6.0);
        assert_eq!(determinant(&p1, &p2, &p1, &p2), 0.0);
    }
}
