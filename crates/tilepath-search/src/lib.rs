//! Path search on tile grids.
//!
//! Two searches share one best-first skeleton:
//!
//! - [`PathFinder`] finds a shortest route from a start tile to an end tile.
//! - [`RepelObject`] finds a route that carries an actor a minimum Manhattan
//!   distance away from a point, greedily preferring tiles farther away.
//!
//! Both move in the four orthogonal directions at cost 1 per step, consult a
//! caller-supplied occupancy predicate, and return the route as the list of
//! tiles to walk through, excluding the start. Each call runs synchronously
//! to completion; nothing is kept between calls.
//!
//! ```
//! use tilepath_core::{Point, TileMap};
//! use tilepath_search::{PathFinder, SearchParameters};
//!
//! let map = TileMap::open(7, 7);
//! let params = SearchParameters::new(Point::new(1, 2), Point::new(5, 2))
//!     .with_occupancy(|p| map.can_be_occupied(p));
//! let route = PathFinder::new(params)?.try_find_path();
//! assert_eq!(route.map(|r| r.len()), Some(4));
//! # Ok::<(), tilepath_search::SearchError>(())
//! ```

mod distance;
mod error;
mod params;
mod path;
mod pathfinder;
mod queue;
mod repel;
mod search;

pub use distance::manhattan;
pub use error::SearchError;
pub use params::{Occupancy, RepelParameters, SearchParameters};
pub use path::{PathArena, PathId, Steps};
pub use pathfinder::PathFinder;
pub use queue::PriorityQueue;
pub use repel::RepelObject;
pub use search::SearchStats;
