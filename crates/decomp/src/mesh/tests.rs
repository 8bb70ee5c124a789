use super::*;
use crate::error::DecompError;
use crate::Point;
use nalgebra::vector;

fn kite() -> Vec<Point> {
    vec![
        vector![-3.0, 0.0],
        vector![0.0, -1.0],
        vector![3.0, 0.0],
        vector![0.0, 1.0],
    ]
}

fn first_from(mesh: &Mesh, vertex: u16) -> HalfEdgeId {
    mesh.ids()
        .find(|&e| mesh.vertex(e) == vertex)
        .expect("vertex has an outgoing half-edge")
}

fn assert_partner_symmetry(mesh: &Mesh) {
    for e in mesh.ids() {
        if let Some(p) = mesh.partner(e) {
            assert_eq!(mesh.partner(p), Some(e));
            assert_ne!(mesh.vertex(e), mesh.vertex(p));
            assert_eq!(mesh.edge_id(e), mesh.edge_id(p));
        }
    }
}

#[test]
fn square_pairs_only_the_diagonal() {
    let mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
    assert_eq!(mesh.len(), 6);
    assert_partner_symmetry(&mesh);
    for e in mesh.ids() {
        let from = mesh.vertex(e);
        let to = mesh.vertex(mesh.next(e));
        match (from, to) {
            (2, 0) | (0, 2) => {
                let p = mesh.partner(e).expect("diagonal is interior");
                assert_eq!(mesh.vertex(p), to);
                assert_eq!(mesh.vertex(mesh.next(p)), from);
            }
            _ => assert!(mesh.partner(e).is_none()),
        }
        // every face is a triangle
        assert_eq!(mesh.next(mesh.next(mesh.next(e))), e);
    }
}

#[test]
fn representative_starts_at_smaller_vertex() {
    let mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
    // half-edge 2 runs 2→0, half-edge 3 runs 0→2
    assert_eq!(mesh.representative(HalfEdgeId(2)), HalfEdgeId(3));
    assert_eq!(mesh.representative(HalfEdgeId(3)), HalfEdgeId(3));
    assert_eq!(mesh.representative(HalfEdgeId(0)), HalfEdgeId(0));
}

#[test]
fn fixed_flag_marks_both_halves() {
    let mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[EdgeId::new(2, 0)]).unwrap();
    let fixed: Vec<HalfEdgeId> = mesh.ids().filter(|&e| mesh[e].fixed).collect();
    assert_eq!(fixed, vec![HalfEdgeId(2), HalfEdgeId(3)]);
}

#[test]
fn triangle_list_must_be_divisible_by_three() {
    let err = build_half_edge_graph(&[0, 1, 2, 0], &[]).unwrap_err();
    assert_eq!(err, DecompError::TriangleCount { len: 4 });
}

#[test]
fn third_corner_on_an_edge_is_rejected() {
    let err = build_half_edge_graph(&[0, 1, 2, 0, 2, 3, 2, 0, 4], &[]).unwrap_err();
    assert_eq!(
        err,
        DecompError::NonManifold {
            edge: EdgeId(0, 2)
        }
    );
}

#[test]
fn same_direction_pairing_is_rejected() {
    // second triangle is clockwise and repeats 0→1
    let err = build_half_edge_graph(&[0, 1, 2, 0, 1, 3], &[]).unwrap_err();
    assert_eq!(
        err,
        DecompError::NonManifold {
            edge: EdgeId(0, 1)
        }
    );
}

#[test]
fn ear_clipped_polygon_builds_symmetric_graph() {
    let points = vec![
        vector![0.0, 0.0],
        vector![5.0, 0.0],
        vector![5.0, 3.0],
        vector![4.0, 3.0],
        vector![4.0, 1.0],
        vector![3.0, 1.0],
        vector![3.0, 3.0],
        vector![0.0, 3.0],
    ];
    let polygon: Vec<u16> = (0..8).collect();
    let triangles = crate::ear_clipping(&points, &polygon).unwrap();
    let mesh = build_half_edge_graph(&triangles, &[]).unwrap();
    assert_partner_symmetry(&mesh);
    let boundary = mesh.ids().filter(|&e| mesh.partner(e).is_none()).count();
    assert_eq!(boundary, polygon.len());
}

#[test]
fn flip_replaces_long_diagonal() {
    let points = kite();
    let mut mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
    assert_eq!(edge_flip(&points, &mut mesh), 1);
    assert_partner_symmetry(&mesh);

    let one = first_from(&mesh, 0);
    assert_eq!(mesh.face_vertices(one), vec![0, 1, 3]);
    let two = first_from(&mesh, 2);
    assert_eq!(mesh.face_vertices(two), vec![2, 3, 1]);
}

#[test]
fn fixed_diagonal_is_not_flipped() {
    let points = kite();
    let mut mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[EdgeId::new(0, 2)]).unwrap();
    assert_eq!(edge_flip(&points, &mut mesh), 0);

    let one = first_from(&mesh, 1);
    assert_eq!(mesh.face_vertices(one), vec![1, 2, 0]);
    let two = first_from(&mesh, 3);
    assert_eq!(mesh.face_vertices(two), vec![3, 0, 2]);
}

#[test]
fn equal_quality_square_is_left_alone() {
    let points = vec![
        vector![-1.0, -1.0],
        vector![1.0, -1.0],
        vector![1.0, 1.0],
        vector![-1.0, 1.0],
    ];
    let mut mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
    assert_eq!(edge_flip(&points, &mut mesh), 0);
}

#[test]
fn reflex_quad_is_not_flipped() {
    // Dart: the quad 0,1,2,3 is reflex at 3, so diagonal 1-3 must stay.
    let points = vec![
        vector![0.0, 0.0],
        vector![4.0, -1.0],
        vector![8.0, 0.0],
        vector![4.0, -0.5],
    ];
    let mut mesh = build_half_edge_graph(&[0, 1, 3, 1, 2, 3], &[]).unwrap();
    let before: Vec<HalfEdge> = mesh.half_edges().to_vec();
    assert_eq!(edge_flip(&points, &mut mesh), 0);
    assert_eq!(mesh.half_edges(), before.as_slice());
}

#[test]
fn second_refinement_is_a_no_op() {
    let points = kite();
    let mut mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
    assert_eq!(edge_flip(&points, &mut mesh), 1);
    let snapshot: Vec<HalfEdge> = mesh.half_edges().to_vec();
    assert_eq!(edge_flip(&points, &mut mesh), 0);
    assert_eq!(mesh.half_edges(), snapshot.as_slice());

    // Fan triangulation of an elongated hexagon from its left tip.
    let points = vec![
        vector![-3.0, 0.0],
        vector![-1.0, -1.0],
        vector![1.0, -1.0],
        vector![3.0, 0.0],
        vector![1.0, 1.0],
        vector![-1.0, 1.0],
    ];
    let triangles: Vec<u16> = (1..5u16).flat_map(|k| [0, k, k + 1]).collect();
    let mut mesh = build_half_edge_graph(&triangles, &[]).unwrap();
    edge_flip(&points, &mut mesh);
    let snapshot: Vec<HalfEdge> = mesh.half_edges().to_vec();
    assert_eq!(edge_flip(&points, &mut mesh), 0);
    assert_eq!(mesh.half_edges(), snapshot.as_slice());
    assert_partner_symmetry(&mesh);
}

#[test]
fn pass_limit_zero_changes_nothing() {
    let points = kite();
    let mut mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
    assert_eq!(edge_flip_passes(&points, &mut mesh, 0), 0);
    assert_eq!(mesh.face_vertices(HalfEdgeId(0)), vec![0, 1, 2]);
}
