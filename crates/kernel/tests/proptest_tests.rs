//! Property-based tests for the geometry predicates using the `proptest` crate.

use proptest::prelude::*;

use slicer_kernel::{
    intersect, is_clockwise, is_collinear, is_counter_clockwise, lerp, pairwise_combine,
    round_to, signed_area2, IntersectionTag, Point, SegmentIntersection, ToleranceKey, Tolerances,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary planar coordinate pair in a slicer-sized range.
fn arb_point() -> impl Strategy<Value = (f64, f64)> {
    (-500.0f64..500.0, -500.0f64..500.0)
}

/// Two crossing half-segments: a center, two lengths, and two angles far
/// enough apart that the segments are never near parallel.
fn arb_crossing() -> impl Strategy<Value = ((f64, f64), f64, f64, f64, f64)> {
    (
        arb_point(),
        1.0f64..100.0,
        1.0f64..100.0,
        0.0f64..std::f64::consts::PI,
        0.3f64..(std::f64::consts::PI - 0.3),
    )
}

fn pt((x, y): (f64, f64)) -> Point {
    Point::xy(x, y)
}

// ---------------------------------------------------------------------------
// 1. Clockwise is counterclockwise with the triple reversed
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn clockwise_reverses_to_counter_clockwise(
        a in arb_point(),
        b in arb_point(),
        c in arb_point(),
    ) {
        let (a, b, c) = (pt(a), pt(b), pt(c));
        prop_assert_eq!(is_clockwise(&a, &b, &c), is_counter_clockwise(&c, &b, &a));
        prop_assert!(!(is_clockwise(&a, &b, &c) && is_counter_clockwise(&a, &b, &c)));
    }
}

// ---------------------------------------------------------------------------
// 2. Collinearity agrees with the area band
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn collinear_matches_area_band(a in arb_point(), b in arb_point(), c in arb_point()) {
        let (a, b, c) = (pt(a), pt(b), pt(c));
        let area = signed_area2(&a, &b, &c);
        prop_assert_eq!(is_collinear(&a, &b, &c), area.abs() <= 1e-5);
    }
}

// ---------------------------------------------------------------------------
// 3. Segments crossing at both midpoints classify as SEGINT at 0.5
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn midpoint_crossing_is_segint(
        (center, len1, len2, angle, offset) in arb_crossing(),
    ) {
        let (cx, cy) = center;
        let (ux, uy) = (len1 * angle.cos(), len1 * angle.sin());
        let second = angle + offset;
        let (vx, vy) = (len2 * second.cos(), len2 * second.sin());

        let p1 = Point::xy(cx - ux, cy - uy);
        let p2 = Point::xy(cx + ux, cy + uy);
        let p3 = Point::xy(cx - vx, cy - vy);
        let p4 = Point::xy(cx + vx, cy + vy);

        let result = intersect(&p1, &p2, &p3, &p4, None, false);
        let hit = match result {
            Some(SegmentIntersection::Hit(hit)) => hit,
            other => return Err(TestCaseError::fail(format!("expected a hit, got {other:?}"))),
        };
        prop_assert_eq!(hit.tag, IntersectionTag::SegInt);
        prop_assert!((hit.dist - 0.5).abs() < 1e-6, "dist on first segment = {}", hit.dist);
        prop_assert!((hit.point.x - cx).abs() < 1e-6);
        prop_assert!((hit.point.y - cy).abs() < 1e-6);

        // parameter along the second segment, from the other side
        let back = intersect(&p3, &p4, &p1, &p2, None, false)
            .and_then(SegmentIntersection::into_hit);
        prop_assert!(back.is_some_and(|h| (h.dist - 0.5).abs() < 1e-6));
    }
}

// ---------------------------------------------------------------------------
// 4. Identical directions are always parallel
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn translated_segment_is_parallel(
        a in arb_point(),
        (dx, dy) in (1.0f64..50.0, -50.0f64..50.0),
        (ox, oy) in arb_point(),
    ) {
        let p1 = pt(a);
        let p2 = Point::xy(p1.x + dx, p1.y + dy);
        let p3 = Point::xy(p1.x + ox, p1.y + oy);
        let p4 = Point::xy(p3.x + dx, p3.y + dy);
        let result = intersect(&p1, &p2, &p3, &p4, None, false);
        prop_assert_eq!(result, Some(SegmentIntersection::Parallel));
    }
}

// ---------------------------------------------------------------------------
// 5. Lerp steps are uniform, bounded, and end on the target
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn lerp_steps_are_bounded(
        from in -100.0f64..100.0,
        to in -100.0f64..100.0,
        max in 0.01f64..50.0,
    ) {
        let steps: Vec<f64> = lerp(from, to, max).unwrap().collect();
        if from == to {
            prop_assert!(steps.is_empty());
        } else {
            let expected = ((to - from).abs() / max).ceil() as usize;
            prop_assert!(steps.len() == expected || steps.len() == expected + 1);
            prop_assert_eq!(*steps.last().unwrap(), to);
            let mut prev = from;
            for s in &steps {
                prop_assert!((s - prev).abs() <= max + 1e-9);
                prev = *s;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Self-combination visits n(n-1)/2 distinct pairs
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn self_combination_count(n in 0usize..40) {
        let items: Vec<usize> = (0..n).collect();
        let items = items.as_slice();
        let (count, self_pairs) = pairwise_combine(items, items, (0usize, 0usize), |a, b, acc| {
            acc.0 += 1;
            if a == b {
                acc.1 += 1;
            }
        });
        prop_assert_eq!(count, n * n.saturating_sub(1) / 2);
        prop_assert_eq!(self_pairs, 0);
    }
}

// ---------------------------------------------------------------------------
// 7. Rounding is idempotent
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn round_is_idempotent(v in -1.0e4f64..1.0e4, decimals in 1u32..8) {
        let once = round_to(v, decimals);
        prop_assert_eq!(round_to(once, decimals), once);
    }
}

// ---------------------------------------------------------------------------
// 8. Every registry key survives a profile round trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn profile_roundtrip(index in 0usize..ToleranceKey::ALL.len(), value in 0.0f64..1.0e6) {
        let key = ToleranceKey::ALL[index];
        let tol = Tolerances::default().with(key, value);
        let json = tol.to_json().unwrap();
        let back = Tolerances::from_json(&json).unwrap();
        prop_assert_eq!(back.get(key), value);
        prop_assert_eq!(back, tol);
    }
}
