//! Decompose a hexagon with two diamond holes and print the convex pieces.
//!
//! Usage:
//!   cargo run -p decomp --example hexagon_holes
//!   cargo run -p decomp --example hexagon_holes -- no-flip
//!
//! Prints one line per piece with its vertex coordinates, then the total
//! area (28 for the hexagon minus 2 per hole).

use decomp::api::{decompose_with_cfg, signed_area, DecompCfg, Point};

fn main() {
    let edge_flip = std::env::args().nth(1).as_deref() != Some("no-flip");
    let points: Vec<Point> = [
        // outer polygon
        (-4.0, 0.0),
        (-3.0, -2.0),
        (3.0, -2.0),
        (4.0, 0.0),
        (3.0, 2.0),
        (-3.0, 2.0),
        // left hole
        (-3.0, 0.0),
        (-2.0, -1.0),
        (-1.0, 0.0),
        (-2.0, 1.0),
        // right hole
        (1.0, 0.0),
        (2.0, -1.0),
        (3.0, 0.0),
        (2.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(x, y))
    .collect();
    let outer = [0, 1, 2, 3, 4, 5];
    let holes = vec![vec![13, 12, 11, 10], vec![9, 8, 7, 6]];

    let cfg = DecompCfg {
        edge_flip,
        ..DecompCfg::default()
    };
    let pieces = match decompose_with_cfg(&points, &outer, &holes, &[], cfg) {
        Ok(pieces) => pieces,
        Err(err) => {
            eprintln!("decomposition failed: {err}");
            std::process::exit(1);
        }
    };

    let mut total = 0.0;
    for (k, piece) in pieces.iter().enumerate() {
        let coords: Vec<String> = piece
            .iter()
            .map(|&i| {
                let p = points[usize::from(i)];
                format!("({}, {})", p.x, p.y)
            })
            .collect();
        println!("piece {k}: {}", coords.join(" "));
        total += signed_area(&points, piece);
    }
    println!("pieces={} edge_flip={edge_flip} area={total:.3}", pieces.len());
}
