//! Edge-flip refinement: swap diagonals of convex quads while that lowers
//! the worse of the two triangles' `minimum_interior_angle` scores.

use crate::geom::minimum_interior_angle;
use crate::Point;

use super::types::{HalfEdgeId, Mesh};

/// Refine `mesh` until no flip improves it. Returns the number of flips.
///
/// Boundary and fixed edges are never flipped; the outer boundary is unchanged.
pub fn edge_flip(points: &[Point], mesh: &mut Mesh) -> usize {
    let passes = mesh.len();
    edge_flip_passes(points, mesh, passes)
}

/// Like `edge_flip`, but stops after at most `max_passes` passes.
///
/// Each pass visits every interior edge once in arena order of its
/// representative. A pass without flips ends refinement early.
pub fn edge_flip_passes(points: &[Point], mesh: &mut Mesh, max_passes: usize) -> usize {
    let eligible: Vec<HalfEdgeId> = mesh
        .ids()
        .filter(|&e| mesh.partner(e).is_some() && mesh.representative(e) == e)
        .collect();

    let mut total = 0;
    for pass in 0..max_passes {
        let mut flipped = 0;
        for &e in &eligible {
            if mesh[e].fixed || !mesh.is_edge_removable(points, e) {
                continue;
            }
            if !flip_improves_angle(points, mesh, e) {
                continue;
            }
            flip(mesh, e);
            flipped += 1;
        }
        tracing::trace!(pass, flipped, "edge flip pass");
        total += flipped;
        if flipped == 0 {
            break;
        }
    }
    total
}

/// Quad `a, b, c, d` around diagonal `c→a` (this side) / `a→c` (partner side).
fn flip_improves_angle(points: &[Point], mesh: &Mesh, e: HalfEdgeId) -> bool {
    let Some(f) = mesh.partner(e) else {
        return false;
    };
    let at = |id: HalfEdgeId| points[usize::from(mesh.vertex(id))];
    let a = at(mesh.next(e));
    let b = at(mesh.next(mesh.next(e)));
    let c = at(e);
    let d = at(mesh.next(mesh.next(f)));

    let before = minimum_interior_angle(a, b, c).max(minimum_interior_angle(a, c, d));
    let after = minimum_interior_angle(a, b, d).max(minimum_interior_angle(b, c, d));
    after < before
}

/// Swap the diagonal shared by `e`'s and its partner's triangles.
///
/// Only `next` links and the origins of `e` and its partner change; the other
/// four half-edges keep spanning the same undirected edges.
fn flip(mesh: &mut Mesh, e: HalfEdgeId) {
    let Some(f) = mesh.partner(e) else {
        return;
    };
    let a = mesh.next(e);
    let b = mesh.next(a);
    let c = mesh.next(f);
    let d = mesh.next(c);
    let (vb, vd) = (mesh.vertex(b), mesh.vertex(d));

    mesh.get_mut(e).next = b;
    mesh.get_mut(b).next = c;
    mesh.get_mut(c).next = e;
    mesh.get_mut(e).vertex = vd;

    mesh.get_mut(f).next = d;
    mesh.get_mut(d).next = a;
    mesh.get_mut(a).next = f;
    mesh.get_mut(f).vertex = vb;

    tracing::trace!(diagonal = ?mesh.edge_id(e), "flipped");
}
