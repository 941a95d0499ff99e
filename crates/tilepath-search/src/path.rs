//! Persistent, structurally shared paths stored in an arena.
//!
//! Every path is a step record pointing at its predecessor. Extending a path
//! pushes one record and never touches the original, so any number of
//! candidate paths can share a common prefix. The only mutable field is the
//! viability flag, used by the searches to supersede queued entries without
//! removing them from the heap.

use tilepath_core::Point;

/// Handle to a path stored in a [`PathArena`].
///
/// Equality is identity: two handles are equal only if they name the same
/// record, even when the paths end on the same tile with the same cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(u32);

impl PathId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Step {
    value: Point,
    prev: Option<PathId>,
    cost: u32,
    viable: bool,
}

/// Arena owning every path built during one search.
#[derive(Debug, Clone, Default)]
pub struct PathArena {
    steps: Vec<Step>,
}

impl PathArena {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn push(&mut self, step: Step) -> PathId {
        let id = PathId(self.steps.len() as u32);
        self.steps.push(step);
        id
    }

    /// Start a new zero-cost path holding only `value`.
    pub fn root(&mut self, value: Point) -> PathId {
        self.push(Step {
            value,
            prev: None,
            cost: 0,
            viable: true,
        })
    }

    /// Return a new path extending `path` by `value` at `step_cost`.
    pub fn add_step(&mut self, path: PathId, value: Point, step_cost: u32) -> PathId {
        let cost = self.cost(path) + step_cost;
        self.push(Step {
            value,
            prev: Some(path),
            cost,
            viable: true,
        })
    }

    /// Total cost of all steps added since the root.
    #[inline]
    pub fn cost(&self, path: PathId) -> u32 {
        self.steps[path.index()].cost
    }

    /// The most recently added step.
    #[inline]
    pub fn last_step(&self, path: PathId) -> Point {
        self.steps[path.index()].value
    }

    #[inline]
    pub fn is_viable(&self, path: PathId) -> bool {
        self.steps[path.index()].viable
    }

    #[inline]
    pub fn set_viable(&mut self, path: PathId, viable: bool) {
        self.steps[path.index()].viable = viable;
    }

    /// Number of steps in `path`, root included.
    pub fn len(&self, path: PathId) -> usize {
        self.steps(path).count()
    }

    /// Steps of `path` from most recent to oldest.
    pub fn steps(&self, path: PathId) -> Steps<'_> {
        Steps {
            arena: self,
            next: Some(path),
        }
    }

    /// Steps of `path` from the root to the tip.
    pub fn to_forward_vec(&self, path: PathId) -> Vec<Point> {
        let mut v: Vec<Point> = self.steps(path).collect();
        v.reverse();
        v
    }
}

/// Iterator over a path's steps, newest first.
pub struct Steps<'a> {
    arena: &'a PathArena,
    next: Option<PathId>,
}

impl Iterator for Steps<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let step = &self.arena.steps[self.next?.index()];
        self.next = step.prev;
        Some(step.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_step_accumulates_cost() {
        let mut arena = PathArena::new();
        let root = arena.root(Point::new(0, 0));
        assert_eq!(arena.cost(root), 0);
        let a = arena.add_step(root, Point::new(1, 0), 1);
        let b = arena.add_step(a, Point::new(2, 0), 3);
        assert_eq!(arena.cost(a), 1);
        assert_eq!(arena.cost(b), 4);
        assert_eq!(arena.last_step(b), Point::new(2, 0));
    }

    #[test]
    fn steps_run_newest_first() {
        let mut arena = PathArena::new();
        let mut p = arena.root(Point::new(0, 0));
        for x in 1..4 {
            p = arena.add_step(p, Point::new(x, 0), 1);
        }
        let back: Vec<Point> = arena.steps(p).collect();
        assert_eq!(back[0], Point::new(3, 0));
        assert_eq!(back[3], Point::new(0, 0));
        assert_eq!(arena.len(p), 4);
        assert_eq!(
            arena.to_forward_vec(p),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
    }

    #[test]
    fn branches_share_prefix_without_mutation() {
        let mut arena = PathArena::new();
        let root = arena.root(Point::new(0, 0));
        let trunk = arena.add_step(root, Point::new(0, 1), 1);
        let left = arena.add_step(trunk, Point::new(-1, 1), 1);
        let right = arena.add_step(trunk, Point::new(1, 1), 2);

        assert_eq!(arena.to_forward_vec(trunk), vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(arena.last_step(left), Point::new(-1, 1));
        assert_eq!(arena.last_step(right), Point::new(1, 1));
        assert_eq!(arena.cost(left), 2);
        assert_eq!(arena.cost(right), 3);
        assert_eq!(
            arena.to_forward_vec(right),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn viability_is_per_record() {
        let mut arena = PathArena::new();
        let root = arena.root(Point::new(0, 0));
        let a = arena.add_step(root, Point::new(1, 0), 1);
        let b = arena.add_step(root, Point::new(1, 0), 1);
        assert_ne!(a, b);
        assert!(arena.is_viable(a));
        arena.set_viable(a, false);
        assert!(!arena.is_viable(a));
        assert!(arena.is_viable(b));
        assert!(arena.is_viable(root));
    }
}
