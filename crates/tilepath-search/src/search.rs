//! Best-first search skeleton shared by [`PathFinder`](crate::PathFinder)
//! and [`RepelObject`](crate::RepelObject).
//!
//! The open set is a [`PriorityQueue`] of [`PathId`]s. When a cheaper route
//! to a tile already sitting in the open set is found, the old entry is
//! marked not viable instead of being removed, and is skipped when it is
//! eventually dequeued.

use std::collections::HashMap;

use tilepath_core::{Direction, Point};

use crate::path::{PathArena, PathId};
use crate::queue::PriorityQueue;

/// Goal test and ordering for one kind of search.
pub(crate) trait Goal {
    /// Whether a path ending at `tile` completes the search.
    fn reached(&self, tile: Point) -> bool;

    /// Open-set key for a path of cost `cost` ending at `tile`. Lower is
    /// expanded first.
    fn priority(&self, tile: Point, cost: u32) -> f64;
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Paths dequeued, found viable and expanded.
    pub expanded: usize,
    /// Paths pushed onto the open set, the seed included.
    pub enqueued: usize,
    /// Open entries superseded by a cheaper route to the same tile.
    pub superseded: usize,
    /// Superseded entries discarded on dequeue.
    pub stale: usize,
}

pub(crate) struct Search<'s, G> {
    pub(crate) start: Point,
    pub(crate) can_be_occupied: &'s dyn Fn(Point) -> bool,
    pub(crate) max_len: Option<u32>,
    pub(crate) goal: G,
}

impl<G: Goal> Search<'_, G> {
    /// Run to completion or exhaustion. On success the route excludes the
    /// start tile and runs in travel order.
    pub(crate) fn run(&self) -> (Option<Vec<Point>>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut arena = PathArena::new();
        let mut open: PriorityQueue<PathId> = PriorityQueue::new();
        // Cheapest expanded cost per tile.
        let mut closed: HashMap<Point, u32> = HashMap::new();

        let seed = arena.root(self.start);
        open.enqueue(self.goal.priority(self.start, 0), seed);
        stats.enqueued += 1;

        while let Ok(current) = open.dequeue() {
            if !arena.is_viable(current) {
                stats.stale += 1;
                continue;
            }

            let tile = arena.last_step(current);
            if self.goal.reached(tile) {
                let route: Vec<Point> = arena.to_forward_vec(current).into_iter().skip(1).collect();
                log::debug!(
                    "search from {} reached {} in {} steps ({} expanded, {} superseded)",
                    self.start,
                    tile,
                    route.len(),
                    stats.expanded,
                    stats.superseded,
                );
                return (Some(route), stats);
            }

            let cost = arena.cost(current);
            closed
                .entry(tile)
                .and_modify(|c| *c = (*c).min(cost))
                .or_insert(cost);
            stats.expanded += 1;
            log::trace!("expanding {tile} at cost {cost}");

            for d in Direction::ALL {
                let next = tile.moved(d);
                if !next.is_non_negative() || !(self.can_be_occupied)(next) {
                    continue;
                }
                let next_cost = cost + 1;
                if self.max_len.is_some_and(|max| next_cost > max) {
                    continue;
                }

                let queued = open
                    .items()
                    .copied()
                    .find(|&id| arena.is_viable(id) && arena.last_step(id) == next);
                if let Some(queued) = queued {
                    if arena.cost(queued) <= next_cost {
                        continue;
                    }
                    arena.set_viable(queued, false);
                    stats.superseded += 1;
                }

                if closed.get(&next).is_some_and(|&c| c <= next_cost) {
                    continue;
                }

                let candidate = arena.add_step(current, next, 1);
                open.enqueue(self.goal.priority(next, next_cost), candidate);
                stats.enqueued += 1;
            }
        }

        log::debug!(
            "search from {} exhausted ({} expanded, {} superseded)",
            self.start,
            stats.expanded,
            stats.superseded,
        );
        (None, stats)
    }
}
