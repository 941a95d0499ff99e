use tilepath_core::Point;

/// Manhattan (L1) distance between two points. Saturates at `u32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// Weight of the colinearity tie-breaker.
pub(crate) const TIE_BREAK_WEIGHT: f64 = 0.001;

/// Small penalty for `tile` straying from the line through `origin` and
/// `reference`. Zero for tiles on that line.
#[inline]
pub(crate) fn tie_break(tile: Point, origin: Point, reference: Point) -> f64 {
    let (dx1, dy1) = (
        i128::from(tile.x) - i128::from(origin.x),
        i128::from(tile.y) - i128::from(origin.y),
    );
    let (dx2, dy2) = (
        i128::from(reference.x) - i128::from(origin.x),
        i128::from(reference.y) - i128::from(origin.y),
    );
    TIE_BREAK_WEIGHT * (dx1 * dy2 - dx2 * dy1).abs() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 2);
        let b = Point::new(5, -1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_at_the_extremes() {
        let lo = Point::new(i32::MIN, 0);
        let hi = Point::new(i32::MAX, 0);
        assert_eq!(manhattan(lo, hi), u32::MAX);
        let corner = Point::new(i32::MIN, i32::MIN);
        let far = Point::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(corner, far), u32::MAX);
    }

    #[test]
    fn tie_break_favours_the_line() {
        let end = Point::new(5, 2);
        let start = Point::new(1, 2);
        assert_eq!(tie_break(Point::new(3, 2), end, start), 0.0);
        let off = tie_break(Point::new(3, 3), end, start);
        assert!(off > 0.0);
        assert!(off < 1.0);
    }

    #[test]
    fn tie_break_at_the_extremes() {
        let min = Point::new(i32::MIN, i32::MIN);
        let max = Point::new(i32::MAX, i32::MAX);
        assert_eq!(tie_break(min, max, min), 0.0);
        let off = tie_break(Point::new(i32::MIN, i32::MAX), max, min);
        assert!(off.is_finite());
        assert!(off > 0.0);
    }
}
