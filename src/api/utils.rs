use itertools::Itertools;

use crate::api::types::Coord;

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn euclidean_distance(a: Coord, b: Coord) -> f64 {
    ((b.x - a.x) as f64).hypot((b.y - a.y) as f64)
}

/// Shortest distance from `p` to any point on the segment `a`-`b`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment_distance(p: Coord, a: Coord, b: Coord) -> f64 {
    let (px, py) = (p.x as f64, p.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);

    let length_squared = dx * dx + dy * dy;
    if length_squared == 0.0 {
        return (px - ax).hypot(py - ay);
    }

    let t = (((px - ax) * dx + (py - ay) * dy) / length_squared).clamp(0.0, 1.0);
    (px - (ax + t * dx)).hypot(py - (ay + t * dy))
}

/// Shortest distance from `p` to an open polyline, i.e. the last point is not
/// joined back to the first. Returns `None` when there is no edge to measure
/// against.
pub fn polyline_distance<'a, I>(p: Coord, points: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Coord>,
{
    points
        .into_iter()
        .tuple_windows()
        .map(|(a, b)| segment_distance(p, *a, *b))
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance_is_pythagorean() {
        assert!((euclidean_distance(Coord::new(0, 0), Coord::new(3, 4)) - 5.0).abs() < f64::EPSILON);
        assert!(euclidean_distance(Coord::new(7, 7), Coord::new(7, 7)).abs() < f64::EPSILON);
    }

    #[test]
    fn segment_distance_projects_onto_interior() {
        let d = segment_distance(Coord::new(50, 10), Coord::new(0, 0), Coord::new(100, 0));
        assert!((d - 10.0).abs() < 1e-9);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let d = segment_distance(Coord::new(-3, 4), Coord::new(0, 0), Coord::new(100, 0));
        assert!((d - 5.0).abs() < 1e-9);

        let d = segment_distance(Coord::new(103, -4), Coord::new(0, 0), Coord::new(100, 0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn segment_distance_handles_zero_length_segments() {
        let d = segment_distance(Coord::new(3, 4), Coord::new(0, 0), Coord::new(0, 0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn polyline_distance_needs_an_edge() {
        let empty: [Coord; 0] = [];
        assert_eq!(polyline_distance(Coord::new(0, 0), &empty), None);
        assert_eq!(polyline_distance(Coord::new(0, 0), &[Coord::new(1, 1)]), None);
    }

    #[test]
    fn polyline_distance_is_open() {
        // an open "U"; the closing edge from (0, 100) back to (0, 0) does not
        // exist, so (0, 50) is measured against the bottom edge only.
        let points = [
            Coord::new(0, 0),
            Coord::new(100, 0),
            Coord::new(100, 100),
            Coord::new(0, 100),
        ];
        let d = polyline_distance(Coord::new(0, 50), &points).unwrap();
        assert!((d - 50.0).abs() < 1e-9);

        let d = polyline_distance(Coord::new(50, 99), &points).unwrap();
        assert!((d - 1.0).abs() < 1e-9);
    }
}
