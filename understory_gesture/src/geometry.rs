// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-contact geometry used by pinch/rotate tracking.
//!
//! Both helpers are pure and total. They are order-sensitive in the sense that
//! `p1` is treated as the "first" contact: keep the same contact first across
//! a gesture to get a stable rotation delta.

use kurbo::Point;

/// Angle in degrees of the vector from `p1` to `p2`, in the range `(-180, 180]`.
///
/// Swapping the arguments offsets the result by 180°.
///
/// ```
/// use kurbo::Point;
/// use understory_gesture::geometry::angle_between;
///
/// assert_eq!(angle_between(Point::ZERO, Point::new(0.0, 10.0)), 90.0);
/// ```
#[must_use]
pub fn angle_between(p1: Point, p2: Point) -> f64 {
    let degrees = (p2 - p1).atan2().to_degrees();
    // `atan2` can yield -180 for a negative-zero y; fold it into the open end.
    if degrees == -180.0 { 180.0 } else { degrees }
}

/// Euclidean distance between `p1` and `p2`. Zero only when the points coincide.
#[must_use]
pub fn distance_between(p1: Point, p2: Point) -> f64 {
    (p2 - p1).hypot()
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{angle_between, distance_between};

    #[test]
    fn angle_of_axis_aligned_pairs() {
        let origin = Point::ZERO;
        assert_eq!(angle_between(origin, Point::new(10.0, 0.0)), 0.0);
        assert_eq!(angle_between(origin, Point::new(0.0, 10.0)), 90.0);
        assert_eq!(angle_between(origin, Point::new(0.0, -10.0)), -90.0);
        assert_eq!(angle_between(origin, Point::new(-10.0, 0.0)), 180.0);
    }

    #[test]
    fn angle_never_reports_minus_180() {
        let angle = angle_between(Point::new(0.0, 0.0), Point::new(-3.0, -0.0));
        assert_eq!(angle, 180.0);
    }

    #[test]
    fn swapping_contacts_offsets_by_half_turn() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        let forward = angle_between(a, b);
        let backward = angle_between(b, a);
        assert!(
            ((forward - backward).abs() - 180.0).abs() < 1e-9,
            "expected a 180° offset, got {forward} vs {backward}"
        );
    }

    #[test]
    fn distance_is_symmetric_and_non_negative() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance_between(a, b), 5.0);
        assert_eq!(distance_between(b, a), 5.0);
        assert_eq!(distance_between(a, a), 0.0);
    }
}
