//! Polygon-level helpers: signed area and winding.

use crate::geom::determinant;
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Shoelace signed area of a cyclic index list (positive for counter-clockwise).
///
/// Indices must address `points`; an empty polygon has zero area.
pub fn signed_area(points: &[Point], polygon: &[u16]) -> f64 {
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            determinant(points[usize::from(polygon[i])], points[usize::from(polygon[j])])
        })
        .sum();
    twice * 0.5
}

/// Winding from the sign of the signed area. Zero area reads as counter-clockwise.
pub fn winding(points: &[Point], polygon: &[u16]) -> Winding {
    if signed_area(points, polygon) < 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![-2.0, -2.0],
            vector![2.0, -2.0],
            vector![2.0, 2.0],
            vector![-2.0, 2.0],
        ]
    }

    #[test]
    fn winding_follows_vertex_order() {
        let points = square();
        assert_eq!(winding(&points, &[0, 1, 2, 3]), Winding::CounterClockwise);
        assert_eq!(winding(&points, &[3, 2, 1, 0]), Winding::Clockwise);
    }

    #[test]
    fn signed_area_of_square() {
        let points = square();
        assert!((signed_area(&points, &[0, 1, 2, 3]) - 16.0).abs() < 1e-12);
        assert!((signed_area(&points, &[3, 2, 1, 0]) + 16.0).abs() < 1e-12);
        assert_eq!(signed_area(&points, &[]), 0.0);
    }
}
