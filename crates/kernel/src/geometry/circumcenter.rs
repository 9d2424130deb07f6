//! Closed-form centers of the circle through three points.
//!
//! Neither solver checks for degenerate input. Collinear points, or a
//! vertical chord in the 2D solver, yield non-finite coordinates.

use super::point::{Planar, Point};

/// Center of the circle through `a`, `b`, `c` in the XY plane, found by
/// intersecting the perpendicular bisectors of `ab` and `bc` via their slopes.
pub fn center_2d<P: Planar>(a: &P, b: &P, c: &P) -> Point {
    let a_slope = (b.y() - a.y()) / (b.x() - a.x());
    let b_slope = (c.y() - b.y()) / (c.x() - b.x());

    let x = (a_slope * b_slope * (a.y() - c.y()) + b_slope * (a.x() + b.x())
        - a_slope * (b.x() + c.x()))
        / (2.0 * (b_slope - a_slope));
    let y = -(x - (a.x() + b.x()) / 2.0) / a_slope + (a.y() + b.y()) / 2.0;

    Point::new(x, y, 0.0)
}

/// Center of the circle through `a`, `b`, `c` in 3D.
///
/// Solves the two bisector-plane equations for `x` and `y` in terms of `z`,
/// then substitutes into the plane containing the three points.
pub fn center_3d<P: Planar>(a: &P, b: &P, c: &P) -> Point {
    let (ax, ay, az) = (a.x(), a.y(), a.z());
    let (bx, by, bz) = (b.x(), b.y(), b.z());
    let (cx, cy, cz) = (c.x(), c.y(), c.z());

    // chord vectors a->b and a->c
    let (ux, uy, uz) = (bx - ax, by - ay, bz - az);
    let (vx, vy, vz) = (cx - ax, cy - ay, cz - az);

    let v2 = ax * ax - cx * cx + ay * ay - cy * cy + az * az - cz * cz;
    let u2 = ax * ax - bx * bx + ay * ay - by * by + az * az - bz * bz;

    let n_x = uy * vz - uz * vy;
    let n_y = ux * vz - uz * vx;
    let n_z = ux * vy - uy * vx;

    let pivot = vy - uy * vx / ux;
    let y_per_z = -(vz - uz * vx / ux) / pivot;
    let y_base = -(v2 - vx / ux * u2) / (2.0 * pivot);
    let x_per_z = -(y_per_z * uy + uz) / ux;
    let x_base = -(2.0 * y_base * uy + u2) / (2.0 * ux);

    let z = -((x_base - ax) * n_x - (y_base - ay) * n_y - az * n_z)
        / (x_per_z * n_x - y_per_z * n_y + n_z);

    Point::new(x_per_z * z + x_base, y_per_z * z + y_base, z)
}
