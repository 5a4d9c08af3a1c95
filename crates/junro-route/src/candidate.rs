//! Route candidates: the unit types the planner knows how to place.
//!
//! The greedy loop in [`order`](crate::order) is generic over anything
//! that can be measured from the current position and converted into an
//! output item plus an exit position. Bare waypoints and traversable
//! segments each supply one implementation; the scan loop is shared.

use junro_geom::{Point, Segment};

/// How a candidate would be approached from a given position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    /// Distance from the reference position to the candidate's nearest
    /// entry point, in machine units.
    pub distance: f32,
    /// Whether the candidate must be reversed so its entry point comes
    /// first in the output.
    pub reversed: bool,
}

/// A unit the route planner can place.
///
/// Implementations decide which of their points counts as the entry
/// from a given position, how the placed item is oriented in the
/// output, and where the path stands after traversing it.
pub trait Candidate: Sized {
    /// Item emitted into the planned route.
    type Output;

    /// Measure this candidate from `position`.
    fn approach(&self, position: Point) -> Approach;

    /// Consume the candidate, producing the output item oriented
    /// according to `approach` and the position the path exits at.
    fn place(self, approach: Approach) -> (Self::Output, Point);
}

impl Candidate for Point {
    type Output = Self;

    /// A waypoint has a single entry point and is never reversed.
    fn approach(&self, position: Point) -> Approach {
        Approach {
            distance: position.distance(*self),
            reversed: false,
        }
    }

    /// The path stands on the waypoint itself after visiting it.
    fn place(self, _approach: Approach) -> (Self, Point) {
        (self, self)
    }
}

impl Candidate for Segment {
    type Output = Self;

    /// A segment is entered through whichever endpoint is nearer to
    /// `position`; an exact tie keeps the stored orientation.
    fn approach(&self, position: Point) -> Approach {
        let to_a = position.distance(self.a);
        let to_b = position.distance(self.b);
        if to_b < to_a {
            Approach {
                distance: to_b,
                reversed: true,
            }
        } else {
            Approach {
                distance: to_a,
                reversed: false,
            }
        }
    }

    /// The path traverses the whole segment: the output pair is
    /// oriented entry-first and the exit is the opposite endpoint.
    fn place(self, approach: Approach) -> (Self, Point) {
        let oriented = if approach.reversed {
            self.reversed()
        } else {
            self
        };
        (oriented, oriented.b)
    }
}
