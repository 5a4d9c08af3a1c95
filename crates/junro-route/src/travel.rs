//! Travel measurement: how far a machine actually moves along a route.
//!
//! These are diagnostics, not inputs to the planner -- the greedy loop
//! works from pairwise distances only. They exist so callers (and the
//! `junro-bench` CLI) can compare orderings and report improvements.

use junro_geom::{Point, Segment};
use serde::{Deserialize, Serialize};

/// Total travel along a waypoint route: the sum of the gaps between
/// consecutive points. Empty and single-point routes travel nothing.
#[must_use]
pub fn point_travel(route: &[Point]) -> f32 {
    route
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}

/// Total travel along a segment route: every segment's own length plus
/// the gap from each segment's exit to the next segment's entry.
#[must_use]
pub fn segment_travel(route: &[Segment]) -> f32 {
    let drawn: f32 = route.iter().map(Segment::length).sum();
    let gaps: f32 = route
        .windows(2)
        .map(|pair| pair[0].b.distance(pair[1].a))
        .sum();
    drawn + gaps
}

/// Summary of a planned route, for diagnostics output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelSummary {
    /// Number of route units placed.
    pub placed: usize,
    /// Total travel distance in machine units.
    pub travel: f32,
}

impl TravelSummary {
    /// Summarize a waypoint route.
    #[must_use]
    pub fn for_points(route: &[Point]) -> Self {
        Self {
            placed: route.len(),
            travel: point_travel(route),
        }
    }

    /// Summarize a segment route.
    #[must_use]
    pub fn for_segments(route: &[Segment]) -> Self {
        Self {
            placed: route.len(),
            travel: segment_travel(route),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_travels_nothing() {
        assert!(point_travel(&[]).abs() < f32::EPSILON);
        assert!(segment_travel(&[]).abs() < f32::EPSILON);
    }

    #[test]
    fn single_point_travels_nothing() {
        assert!(point_travel(&[Point::new(5, 5)]).abs() < f32::EPSILON);
    }

    #[test]
    fn point_travel_sums_consecutive_gaps() {
        let route = [Point::new(0, 0), Point::new(3, 4), Point::new(3, 14)];
        // 5 units, then 10 units.
        assert!((point_travel(&route) - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn single_segment_travel_is_its_length() {
        let route = [Segment::new(Point::new(0, 0), Point::new(6, 8))];
        assert!((segment_travel(&route) - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn segment_travel_includes_gaps_between_segments() {
        let route = [
            Segment::new(Point::new(0, 0), Point::new(10, 0)),
            Segment::new(Point::new(13, 4), Point::new(13, 24)),
        ];
        // 10 drawn + 5 gap + 20 drawn.
        assert!((segment_travel(&route) - 35.0).abs() < f32::EPSILON);
    }

    #[test]
    fn summary_counts_and_measures() {
        let route = [Point::new(0, 0), Point::new(0, 7)];
        let summary = TravelSummary::for_points(&route);
        assert_eq!(summary.placed, 2);
        assert!((summary.travel - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn summary_serde_round_trip() {
        let summary = TravelSummary {
            placed: 4,
            travel: 123.5,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: TravelSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
