//! Geometric primitives and predicates on `Point`.
//!
//! All predicates are plain double-precision arithmetic; no exact or interval
//! arithmetic. The boundary conventions matter and are shared by every stage:
//! - `is_counter_clockwise` is strict (`> 0`), `is_clockwise` is not (`<= 0`),
//!   so collinear triples count as clockwise (reflex) during ear clipping.
//! - `is_internally_convex` accepts a straight 180° corner (`>= 0`).

use crate::Point;

/// 2D cross product `u.x * v.y - u.y * v.x`.
#[inline]
pub fn determinant(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

#[inline]
pub fn is_counter_clockwise(a: Point, b: Point, c: Point) -> bool {
    determinant(b - a, c - a) > 0.0
}

#[inline]
pub fn is_clockwise(a: Point, b: Point, c: Point) -> bool {
    determinant(b - a, c - a) <= 0.0
}

/// Corner at `a` between rays `a→b` and `a→c` is at most 180°.
#[inline]
pub fn is_internally_convex(a: Point, b: Point, c: Point) -> bool {
    let right = b - a;
    let left = c - a;
    right.x * left.y >= right.y * left.x
}

/// `p` lies strictly inside the wedge at `b` bounded by the incoming edge
/// `a→b` and the outgoing edge `b→c`. Handles reflex wedges.
pub fn in_cone(a: Point, b: Point, c: Point, p: Point) -> bool {
    if is_counter_clockwise(a, b, c) {
        is_counter_clockwise(a, b, p) && is_counter_clockwise(b, c, p)
    } else {
        is_counter_clockwise(a, b, p) || is_counter_clockwise(b, c, p)
    }
}

/// `p` lies inside or on the counter-clockwise triangle `(a, b, c)`.
pub fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    is_clockwise(a, p, b) && is_clockwise(b, p, c) && is_clockwise(c, p, a)
}

/// Segments `ab` and `cd` meet (endpoints included).
///
/// Solves `a + λ(b - a) = c + μ(d - c)` and accepts `λ, μ ∈ [0, 1]`. Parallel
/// segments (zero determinant) never intersect, even when they overlap.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let direction_a = b - a;
    // reversed on purpose so the system reads a + λ·da = c + μ·(d - c)
    let direction_b = c - d;
    let delta = c - a;

    let denominator = determinant(direction_a, direction_b);
    if denominator == 0.0 {
        return false;
    }

    let lambda = (direction_b.y * delta.x - direction_b.x * delta.y) / denominator;
    let mu = (direction_a.x * delta.y - direction_a.y * delta.x) / denominator;

    (0.0..=1.0).contains(&lambda) && (0.0..=1.0).contains(&mu)
}

/// Cosine of the smallest interior angle of triangle `(a, b, c)`.
///
/// Lower is better: close to 1 means a needle-like sliver, 0.5 is
/// equilateral. Used as the priority for ears and as the flip criterion.
pub fn minimum_interior_angle(a: Point, b: Point, c: Point) -> f64 {
    let x = (b - a).normalize();
    let y = (c - b).normalize();
    let z = (a - c).normalize();

    let alpha = -z.dot(&x);
    let beta = -x.dot(&y);
    let gamma = -y.dot(&z);

    alpha.max(beta).max(gamma)
}
