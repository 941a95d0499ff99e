//! **tilepath-core** — tile coordinates and ASCII tile maps.
//!
//! This crate provides the coordinate type consumed by the path searches in
//! `tilepath-search`: an integer [`Point`], the four orthogonal
//! [`Direction`]s, and a [`TileMap`] usable as an occupancy predicate.

pub mod geom;
pub mod tilemap;

pub use geom::{Direction, Point};
pub use tilemap::{MapError, TileMap};
