//! junro-geom: integer 2D geometry primitives for toolpath ordering.
//!
//! Coordinates are stored as `i64` machine units (microns, steps,
//! whatever the device counts in), so points compare exactly and hash
//! cleanly. Distances are measured in `f32`: route construction only
//! ever compares distances against each other, so single precision is
//! enough and the candidate scan never promotes to `f64`.

use serde::{Deserialize, Serialize};

/// A 2D point in machine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in machine units.
    pub x: i64,
    /// Vertical position in machine units.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in machine units.
    ///
    /// Computed entirely in single precision. Callers compare distances
    /// rather than accumulate them, so the truncated mantissa on very
    /// large coordinates is acceptable.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        dx.mul_add(dx, dy * dy).sqrt()
    }
}

/// A directed but reversible line segment between two points.
///
/// The stored direction is `a` to `b`; route construction may traverse
/// it either way and emits a [`reversed`](Self::reversed) copy when the
/// opposite direction is shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint in stored order.
    pub a: Point,
    /// Second endpoint in stored order.
    pub b: Point,
}

impl Segment {
    /// Create a new segment from two endpoints.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The same segment with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Length of the segment, in machine units.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- Point tests ---

    #[test]
    fn point_new() {
        let p = Point::new(3, -4);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, -4);
    }

    #[test]
    fn point_equality() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(1, 3));
    }

    #[test]
    fn point_distance_three_four_five() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn point_distance_to_self_is_zero() {
        let p = Point::new(7, 11);
        assert!(p.distance(p).abs() < f32::EPSILON);
    }

    #[test]
    fn point_distance_is_symmetric() {
        let a = Point::new(-5, 2);
        let b = Point::new(9, -3);
        assert!((a.distance(b) - b.distance(a)).abs() < f32::EPSILON);
    }

    #[test]
    fn point_copy() {
        let p = Point::new(1, 2);
        let p2 = p; // Copy
        assert_eq!(p, p2);
    }

    // --- Segment tests ---

    #[test]
    fn segment_reversed_swaps_endpoints() {
        let s = Segment::new(Point::new(0, 0), Point::new(10, 0));
        let r = s.reversed();
        assert_eq!(r.a, Point::new(10, 0));
        assert_eq!(r.b, Point::new(0, 0));
    }

    #[test]
    fn segment_reversed_twice_is_identity() {
        let s = Segment::new(Point::new(1, 2), Point::new(3, 4));
        assert_eq!(s.reversed().reversed(), s);
    }

    #[test]
    fn segment_length() {
        let s = Segment::new(Point::new(0, 0), Point::new(6, 8));
        assert!((s.length() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn segment_length_unchanged_by_reversal() {
        let s = Segment::new(Point::new(-3, 7), Point::new(12, -1));
        assert!((s.length() - s.reversed().length()).abs() < f32::EPSILON);
    }

    // --- Serde round-trip tests ---

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(-42, 1_000_000);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn segment_serde_round_trip() {
        let s = Segment::new(Point::new(0, 1), Point::new(2, 3));
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }
}
