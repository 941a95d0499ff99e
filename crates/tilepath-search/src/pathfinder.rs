//! Shortest-path search between two tiles.

use tilepath_core::Point;

use crate::distance::{manhattan, tie_break};
use crate::error::SearchError;
use crate::params::{Occupancy, SearchParameters};
use crate::search::{Goal, Search, SearchStats};

/// A*-style search from a start tile to a fixed end tile over the four
/// orthogonal moves, each costing 1.
///
/// The estimate is the Manhattan distance to the end plus a small penalty
/// for leaving the straight line between start and end, which makes routes
/// on open ground look straighter.
pub struct PathFinder<'a> {
    start: Point,
    end: Point,
    can_be_occupied: Occupancy<'a>,
    max_len: Option<u32>,
}

struct Toward {
    start: Point,
    end: Point,
}

impl Goal for Toward {
    fn reached(&self, tile: Point) -> bool {
        tile == self.end
    }

    fn priority(&self, tile: Point, cost: u32) -> f64 {
        cost as f64 + manhattan(tile, self.end) as f64 + tie_break(tile, self.end, self.start)
    }
}

impl<'a> PathFinder<'a> {
    /// Build a finder. Fails if no occupancy predicate was set.
    pub fn new(params: SearchParameters<'a>) -> Result<Self, SearchError> {
        Self::try_from(Some(params))
    }

    pub fn start_location(&self) -> Point {
        self.start
    }

    pub fn end_location(&self) -> Point {
        self.end
    }

    pub fn maximum_length_of_path(&self) -> Option<u32> {
        self.max_len
    }

    /// Find a route from start to end.
    ///
    /// Returns the tiles to walk through in order, excluding the start and
    /// including the end, or `None` if the end cannot be reached within the
    /// length bound. A start equal to the end yields an empty route.
    pub fn try_find_path(&self) -> Option<Vec<Point>> {
        self.try_find_path_with_stats().0
    }

    /// Like [`try_find_path`](Self::try_find_path), also returning search
    /// counters.
    pub fn try_find_path_with_stats(&self) -> (Option<Vec<Point>>, SearchStats) {
        Search {
            start: self.start,
            can_be_occupied: &*self.can_be_occupied,
            max_len: self.max_len,
            goal: Toward {
                start: self.start,
                end: self.end,
            },
        }
        .run()
    }
}

impl<'a> TryFrom<Option<SearchParameters<'a>>> for PathFinder<'a> {
    type Error = SearchError;

    fn try_from(params: Option<SearchParameters<'a>>) -> Result<Self, SearchError> {
        let params = params.ok_or(SearchError::MissingParameters)?;
        let can_be_occupied = params.can_be_occupied.ok_or(SearchError::MissingPredicate)?;
        Ok(Self {
            start: params.start_location,
            end: params.end_location,
            can_be_occupied,
            max_len: params.maximum_length_of_path,
        })
    }
}
