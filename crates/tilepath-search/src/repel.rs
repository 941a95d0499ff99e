//! Flee search: walk until far enough from a point.

use tilepath_core::Point;

use crate::distance::{manhattan, tie_break};
use crate::error::SearchError;
use crate::params::{Occupancy, RepelParameters};
use crate::search::{Goal, Search, SearchStats};

/// Best-first search that routes away from a repel location until the
/// Manhattan distance to it reaches a minimum.
///
/// Ordering is greedy: the tile farthest from the repel location is expanded
/// first, regardless of how long the path to it is, with a small preference
/// for continuing along the line from the repel location through the start.
/// The route found is one that gets far enough within the length bound, not
/// necessarily the shortest such route.
pub struct RepelObject<'a> {
    start: Point,
    repel: Point,
    can_be_occupied: Occupancy<'a>,
    max_len: u32,
    min_distance: u32,
}

struct Away {
    start: Point,
    repel: Point,
    min_distance: u32,
}

impl Goal for Away {
    fn reached(&self, tile: Point) -> bool {
        manhattan(tile, self.repel) >= self.min_distance
    }

    fn priority(&self, tile: Point, _cost: u32) -> f64 {
        -(manhattan(self.repel, tile) as f64) + tie_break(tile, self.repel, self.start)
    }
}

impl<'a> RepelObject<'a> {
    /// Build a flee search. Fails if no occupancy predicate was set.
    pub fn new(params: RepelParameters<'a>) -> Result<Self, SearchError> {
        Self::try_from(Some(params))
    }

    pub fn start_location(&self) -> Point {
        self.start
    }

    pub fn repel_location(&self) -> Point {
        self.repel
    }

    pub fn maximum_length_of_path(&self) -> u32 {
        self.max_len
    }

    pub fn minimum_distance_to_move_away(&self) -> u32 {
        self.min_distance
    }

    /// Find a route ending at least the minimum distance from the repel
    /// location.
    ///
    /// Returns the tiles to walk through in order, excluding the start, or
    /// `None` if no such tile is reachable within the length bound. If the
    /// start is already far enough the route is empty.
    pub fn try_find_path(&self) -> Option<Vec<Point>> {
        self.try_find_path_with_stats().0
    }

    /// Like [`try_find_path`](Self::try_find_path), also returning search
    /// counters.
    pub fn try_find_path_with_stats(&self) -> (Option<Vec<Point>>, SearchStats) {
        Search {
            start: self.start,
            can_be_occupied: &*self.can_be_occupied,
            max_len: Some(self.max_len),
            goal: Away {
                start: self.start,
                repel: self.repel,
                min_distance: self.min_distance,
            },
        }
        .run()
    }
}

impl<'a> TryFrom<Option<RepelParameters<'a>>> for RepelObject<'a> {
    type Error = SearchError;

    fn try_from(params: Option<RepelParameters<'a>>) -> Result<Self, SearchError> {
        let params = params.ok_or(SearchError::MissingParameters)?;
        let can_be_occupied = params.can_be_occupied.ok_or(SearchError::MissingPredicate)?;
        Ok(Self {
            start: params.start_location,
            repel: params.repel_location,
            can_be_occupied,
            max_len: params.maximum_length_of_path,
            min_distance: params.minimum_distance_to_move_away,
        })
    }
}
