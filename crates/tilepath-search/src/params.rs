//! Inputs for [`PathFinder`](crate::PathFinder) and
//! [`RepelObject`](crate::RepelObject).

use std::fmt;

use tilepath_core::Point;

use crate::error::SearchError;

/// Occupancy predicate: whether a tile may currently be entered.
///
/// Must return `false` for tiles outside the world.
pub type Occupancy<'a> = Box<dyn Fn(Point) -> bool + 'a>;

fn non_negative(field: &'static str, value: i32) -> Result<u32, SearchError> {
    u32::try_from(value).map_err(|_| SearchError::NegativeValue {
        field,
        value: value.into(),
    })
}

// ---------------------------------------------------------------------------
// SearchParameters
// ---------------------------------------------------------------------------

/// Parameters for a search from one tile to another.
pub struct SearchParameters<'a> {
    pub start_location: Point,
    pub end_location: Point,
    pub(crate) can_be_occupied: Option<Occupancy<'a>>,
    pub(crate) maximum_length_of_path: Option<u32>,
}

impl<'a> SearchParameters<'a> {
    /// Parameters with no occupancy predicate and no length bound.
    pub fn new(start_location: Point, end_location: Point) -> Self {
        Self {
            start_location,
            end_location,
            can_be_occupied: None,
            maximum_length_of_path: None,
        }
    }

    /// Set the occupancy predicate.
    pub fn with_occupancy(mut self, f: impl Fn(Point) -> bool + 'a) -> Self {
        self.set_can_be_occupied(f);
        self
    }

    pub fn set_can_be_occupied(&mut self, f: impl Fn(Point) -> bool + 'a) {
        self.can_be_occupied = Some(Box::new(f));
    }

    pub fn has_occupancy(&self) -> bool {
        self.can_be_occupied.is_some()
    }

    /// Bound the number of steps a returned path may take.
    pub fn with_maximum_length_of_path(mut self, len: i32) -> Result<Self, SearchError> {
        self.set_maximum_length_of_path(len)?;
        Ok(self)
    }

    /// Set the path length bound. Negative values are rejected and leave the
    /// previous bound in place.
    pub fn set_maximum_length_of_path(&mut self, len: i32) -> Result<(), SearchError> {
        self.maximum_length_of_path = Some(non_negative("maximum_length_of_path", len)?);
        Ok(())
    }

    /// Remove the path length bound.
    pub fn clear_maximum_length_of_path(&mut self) {
        self.maximum_length_of_path = None;
    }

    pub fn maximum_length_of_path(&self) -> Option<u32> {
        self.maximum_length_of_path
    }
}

impl fmt::Debug for SearchParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchParameters")
            .field("start_location", &self.start_location)
            .field("end_location", &self.end_location)
            .field("has_occupancy", &self.has_occupancy())
            .field("maximum_length_of_path", &self.maximum_length_of_path)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RepelParameters
// ---------------------------------------------------------------------------

/// Parameters for a search that moves away from a point.
///
/// Both bounds default to zero.
pub struct RepelParameters<'a> {
    pub start_location: Point,
    pub repel_location: Point,
    pub(crate) can_be_occupied: Option<Occupancy<'a>>,
    pub(crate) maximum_length_of_path: u32,
    pub(crate) minimum_distance_to_move_away: u32,
}

impl<'a> RepelParameters<'a> {
    pub fn new(start_location: Point, repel_location: Point) -> Self {
        Self {
            start_location,
            repel_location,
            can_be_occupied: None,
            maximum_length_of_path: 0,
            minimum_distance_to_move_away: 0,
        }
    }

    /// Set the occupancy predicate.
    pub fn with_occupancy(mut self, f: impl Fn(Point) -> bool + 'a) -> Self {
        self.set_can_be_occupied(f);
        self
    }

    pub fn set_can_be_occupied(&mut self, f: impl Fn(Point) -> bool + 'a) {
        self.can_be_occupied = Some(Box::new(f));
    }

    pub fn has_occupancy(&self) -> bool {
        self.can_be_occupied.is_some()
    }

    pub fn with_maximum_length_of_path(mut self, len: i32) -> Result<Self, SearchError> {
        self.set_maximum_length_of_path(len)?;
        Ok(self)
    }

    pub fn set_maximum_length_of_path(&mut self, len: i32) -> Result<(), SearchError> {
        self.maximum_length_of_path = non_negative("maximum_length_of_path", len)?;
        Ok(())
    }

    pub fn maximum_length_of_path(&self) -> u32 {
        self.maximum_length_of_path
    }

    pub fn with_minimum_distance_to_move_away(mut self, dist: i32) -> Result<Self, SearchError> {
        self.set_minimum_distance_to_move_away(dist)?;
        Ok(self)
    }

    /// Set how far (Manhattan) from the repel location the path must end.
    pub fn set_minimum_distance_to_move_away(&mut self, dist: i32) -> Result<(), SearchError> {
        self.minimum_distance_to_move_away = non_negative("minimum_distance_to_move_away", dist)?;
        Ok(())
    }

    pub fn minimum_distance_to_move_away(&self) -> u32 {
        self.minimum_distance_to_move_away
    }
}

impl fmt::Debug for RepelParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepelParameters")
            .field("start_location", &self.start_location)
            .field("repel_location", &self.repel_location)
            .field("has_occupancy", &self.has_occupancy())
            .field("maximum_length_of_path", &self.maximum_length_of_path)
            .field(
                "minimum_distance_to_move_away",
                &self.minimum_distance_to_move_away,
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_bound_rejects_negative() {
        let mut p = SearchParameters::new(Point::ZERO, Point::new(3, 3));
        assert_eq!(p.maximum_length_of_path(), None);
        p.set_maximum_length_of_path(5).unwrap();
        assert_eq!(p.maximum_length_of_path(), Some(5));

        let err = p.set_maximum_length_of_path(-1).unwrap_err();
        assert_eq!(
            err,
            SearchError::NegativeValue {
                field: "maximum_length_of_path",
                value: -1
            }
        );
        assert_eq!(p.maximum_length_of_path(), Some(5));

        p.clear_maximum_length_of_path();
        assert_eq!(p.maximum_length_of_path(), None);
    }

    #[test]
    fn zero_bound_is_allowed() {
        let p = SearchParameters::new(Point::ZERO, Point::ZERO)
            .with_maximum_length_of_path(0)
            .unwrap();
        assert_eq!(p.maximum_length_of_path(), Some(0));
    }

    #[test]
    fn repel_bounds_reject_negative() {
        let mut p = RepelParameters::new(Point::ZERO, Point::new(1, 0));
        assert!(matches!(
            p.set_minimum_distance_to_move_away(-3),
            Err(SearchError::NegativeValue {
                field: "minimum_distance_to_move_away",
                value: -3
            })
        ));
        assert!(p.set_maximum_length_of_path(i32::MIN).is_err());
        assert_eq!(p.maximum_length_of_path(), 0);
        assert_eq!(p.minimum_distance_to_move_away(), 0);
    }

    #[test]
    fn repel_builder_chain() {
        let p = RepelParameters::new(Point::new(2, 2), Point::new(1, 2))
            .with_occupancy(|_| true)
            .with_maximum_length_of_path(10)
            .and_then(|p| p.with_minimum_distance_to_move_away(4))
            .unwrap();
        assert!(p.has_occupancy());
        assert_eq!(p.maximum_length_of_path(), 10);
        assert_eq!(p.minimum_distance_to_move_away(), 4);
    }

    #[test]
    fn debug_hides_predicate() {
        let p = SearchParameters::new(Point::ZERO, Point::new(1, 1)).with_occupancy(|_| true);
        let s = format!("{p:?}");
        assert!(s.contains("has_occupancy: true"));
    }
}
