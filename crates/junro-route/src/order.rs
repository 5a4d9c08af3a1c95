//! Greedy nearest-neighbour route construction.
//!
//! Finding the truly shortest traversal order is the Travelling
//! Salesman Problem, which is NP-complete. Toolpath inputs are small
//! enough that a good approximation is all that is needed, so the
//! planner greedily extends the path to the closest remaining
//! candidate: O(n²) scans over a candidate ring, one removal per
//! placed unit.
//!
//! Both entry points share one construction loop, parameterized over
//! the [`Candidate`] trait. Inputs are borrowed and never mutated; the
//! result is a freshly allocated ordering.

use junro_geom::{Point, Segment};

use crate::candidate::{Approach, Candidate};
use crate::ring::Ring;

/// Reorder waypoints into a short traversal path.
///
/// Greedily extends the path to the nearest remaining waypoint. The
/// result contains every input point exactly once, in visiting order.
///
/// When `start` is given it seeds the distance comparisons but is not
/// itself part of the result -- the caller already knows where the path
/// begins. When `start` is `None`, the first input point both opens the
/// result and seeds the position.
///
/// Exact-distance ties resolve to the earliest candidate in input
/// order, so the output is deterministic for a given input ordering.
#[must_use = "returns the reordered waypoints"]
pub fn order_points(points: &[Point], start: Option<Point>) -> Vec<Point> {
    plan(points.to_vec(), start)
}

/// Reorder segments into a short traversal path, reversing individual
/// segments where that shortens the route.
///
/// Each output element is one input segment, possibly with its
/// endpoints swapped so that the endpoint nearer the path comes first.
/// The path enters each segment through its first point and exits
/// through its second, so the next comparison is measured from the
/// exit endpoint.
///
/// When `start` is given it seeds the first comparison only and never
/// appears in the result. When `start` is `None`, the first input
/// segment opens the route in its stored orientation.
#[must_use = "returns the reordered segments"]
pub fn order_segments(segments: &[Segment], start: Option<Point>) -> Vec<Segment> {
    plan(segments.to_vec(), start)
}

/// Shared greedy construction loop.
///
/// Repeatedly scans the whole ring for the candidate whose entry is
/// nearest the current position, removes it, emits its oriented
/// output, and continues from its exit position. The strict `<`
/// comparison keeps the first-seen candidate on exact ties.
fn plan<C: Candidate>(candidates: Vec<C>, start: Option<Point>) -> Vec<C::Output> {
    let mut ring = Ring::new(candidates);
    let mut route = Vec::with_capacity(ring.len());

    let mut position = if let Some(start) = start {
        start
    } else {
        // No fixed start: the first candidate seeds both the route and
        // the position, entering through its stored orientation.
        let Some(seed) = ring.pop_front() else {
            return route;
        };
        let (output, exit) = seed.place(Approach {
            distance: 0.0,
            reversed: false,
        });
        route.push(output);
        exit
    };

    while !ring.is_empty() {
        let mut nearest: Option<(usize, Approach)> = None;
        for (index, candidate) in ring.iter() {
            let approach = candidate.approach(position);
            if nearest.is_none_or(|(_, best)| approach.distance < best.distance) {
                nearest = Some((index, approach));
            }
        }

        // A non-empty ring always yields a nearest candidate; bail out
        // rather than panic if that ever stops holding.
        let Some((index, approach)) = nearest else {
            break;
        };
        let Some(candidate) = ring.remove(index) else {
            break;
        };

        let (output, exit) = candidate.place(approach);
        route.push(output);
        position = exit;
    }

    route
}
