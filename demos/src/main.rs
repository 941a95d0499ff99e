//! Route demo: plots a path and a flee route on an ASCII map.
//!
//! Run: cargo run --bin route [MAP_FILE]
//!
//! The map uses `.` for floor and `#` for walls. `S` marks the actor, `E` the
//! destination and `M` a threat to run from.

use std::error::Error;

use tilepath_core::TileMap;
use tilepath_search::{PathFinder, RepelObject, RepelParameters, SearchParameters};

const DEFAULT_MAP: &str = "
    ####################
    #S.....#...........#
    #.####.#.#######...#
    #.#....#.#.....#...#
    #.#.####.#.###.#...#
    #.#......#.#M..#...#
    #.########.#####...#
    #..........#......E#
    ####################";

const FLEE_DISTANCE: i32 = 8;
const MAX_STEPS: i32 = 40;

fn run() -> Result<(), Box<dyn Error>> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };
    let map = TileMap::parse(&text)?;
    let start = map.marker('S').ok_or("map has no S marker")?;

    if let Some(end) = map.marker('E') {
        let params = SearchParameters::new(start, end)
            .with_occupancy(|p| map.can_be_occupied(p))
            .with_maximum_length_of_path(MAX_STEPS)?;
        let finder = PathFinder::new(params)?;
        let (route, stats) = finder.try_find_path_with_stats();
        match route {
            Some(route) => {
                println!("path {start} -> {end}: {} steps", route.len());
                println!("{}\n", map.render(&route));
            }
            None => println!("no path {start} -> {end} within {MAX_STEPS} steps\n"),
        }
        println!("  {stats:?}\n");
    }

    if let Some(threat) = map.marker('M') {
        let params = RepelParameters::new(start, threat)
            .with_occupancy(|p| map.can_be_occupied(p))
            .with_maximum_length_of_path(MAX_STEPS)?
            .with_minimum_distance_to_move_away(FLEE_DISTANCE)?;
        let repel = RepelObject::new(params)?;
        match repel.try_find_path() {
            Some(route) => {
                println!("flee from {threat}: {} steps", route.len());
                println!("{}", map.render(&route));
            }
            None => println!("cannot get {FLEE_DISTANCE} tiles away from {threat}"),
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
