//! Rectangular tile maps built from ASCII art.
//!
//! A [`TileMap`] records which tiles are walls and where the named markers
//! sit. It is the simplest occupancy source for the searches: pass
//! [`TileMap::can_be_occupied`] as the predicate.
//!
//! ```text
//! #######
//! #S...E#
//! #######
//! ```
//!
//! `.` is floor, `#` is wall. Any ASCII letter is a marker standing on floor.

use std::collections::{BTreeMap, BTreeSet};

use crate::geom::Point;

/// Errors that can occur when parsing a tile map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The map has no rows.
    #[error("tile map is empty")]
    Empty,
    /// A row is wider or narrower than the first row.
    #[error("tile map row {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither floor, wall nor a marker letter.
    #[error("tile map contains invalid tile \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Point },
}

/// A rectangular grid of floor and wall tiles with optional markers.
///
/// Walls are stored sparsely, so an open map of any size costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: i32,
    height: i32,
    walls: BTreeSet<Point>,
    markers: BTreeMap<char, Point>,
}

impl TileMap {
    /// Create a map of the given size with no walls.
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            walls: BTreeSet::new(),
            markers: BTreeMap::new(),
        }
    }

    /// Parse a map from ASCII art.
    ///
    /// Surrounding whitespace is trimmed from every line and blank lines are
    /// skipped, so maps may be written as indented string literals.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let expected = first.chars().count();

        let mut map = Self::open(expected as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(MapError::InconsistentWidth {
                    line: y,
                    expected,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => map.set_wall(pos, true),
                    c if c.is_ascii_alphabetic() => {
                        map.markers.insert(c, pos);
                    }
                    _ => return Err(MapError::InvalidTile { ch, pos }),
                }
            }
        }
        Ok(map)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Mark or clear a wall. Positions outside the map are ignored.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if !self.contains(p) {
            return;
        }
        if wall {
            self.walls.insert(p);
        } else {
            self.walls.remove(&p);
        }
    }

    /// Whether `p` is a wall. Positions outside the map are not walls.
    pub fn is_wall(&self, p: Point) -> bool {
        self.walls.contains(&p)
    }

    /// Occupancy predicate: inside the map and not a wall.
    pub fn can_be_occupied(&self, p: Point) -> bool {
        self.contains(p) && !self.walls.contains(&p)
    }

    /// Position of the marker letter `ch`, if the map had one.
    pub fn marker(&self, ch: char) -> Option<Point> {
        self.markers.get(&ch).copied()
    }

    /// Render the map with `route` drawn as `*`. Markers are kept.
    pub fn render(&self, route: &[Point]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.is_wall(Point::new(x, y)) { '#' } else { '.' })
                    .collect()
            })
            .collect();
        for &p in route {
            if self.contains(p) {
                rows[p.y as usize][p.x as usize] = '*';
            }
        }
        for (&ch, &p) in &self.markers {
            rows[p.y as usize][p.x as usize] = ch;
        }
        let lines: Vec<String> = rows.into_iter().map(|r| r.into_iter().collect()).collect();
        lines.join("\n")
    }
}
