//! junro-route: greedy travel-path ordering for toolpaths (sans-IO).
//!
//! Reorders a set of waypoints or drawable segments so a machine can
//! visit all of them with little wasted travel. The exact ordering is
//! the Travelling Salesman Problem (NP-complete); this crate uses the
//! nearest-neighbour approximation, which is plenty for toolpath-sized
//! inputs: each call scans a candidate ring in O(n²) and returns a
//! complete ordering synchronously, with no state shared between calls.
//!
//! This crate has **no I/O dependencies** -- it operates on borrowed
//! in-memory collections and returns new ones. File loading and
//! reporting live in `junro-bench`.

pub mod candidate;
pub mod order;
pub mod travel;

mod ring;

pub use candidate::{Approach, Candidate};
pub use order::{order_points, order_segments};
pub use travel::{TravelSummary, point_travel, segment_travel};

/// Re-export the geometry primitives so downstream crates can consume
/// routes without depending on `junro-geom` directly.
pub use junro_geom::{Point, Segment};
