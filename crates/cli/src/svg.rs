//! Minimal SVG rendering of polygon outlines, for eyeballing results.

use std::fmt::Write;

use decomp::api::{IndexList, Point};

const PIECE_STROKE: &str = "#000";
const OUTLINE_STROKE: &str = "#a00";

/// Render `pieces` in black over `outlines` in red.
///
/// The canvas is the bounding box of `points`, moved to the origin.
pub fn render(
    points: &[Point],
    pieces: &[IndexList],
    outlines: &[IndexList],
) -> Result<String, std::fmt::Error> {
    let (min, max) = bounds(points);
    let mut svg = String::new();
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}">"#,
        (max.x - min.x).ceil(),
        (max.y - min.y).ceil()
    )?;
    writeln!(svg, r##"  <rect width="100%" height="100%" fill="#fff"/>"##)?;
    writeln!(svg, r#"  <g transform="translate({} {})">"#, -min.x, -min.y)?;
    for outline in outlines {
        polygon(&mut svg, points, outline, OUTLINE_STROKE)?;
    }
    for piece in pieces {
        polygon(&mut svg, points, piece, PIECE_STROKE)?;
    }
    writeln!(svg, "  </g>")?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn polygon(
    svg: &mut String,
    points: &[Point],
    indices: &[u16],
    stroke: &str,
) -> std::fmt::Result {
    write!(svg, r#"    <polygon points=""#)?;
    for (k, &i) in indices.iter().enumerate() {
        let p = points[usize::from(i)];
        if k > 0 {
            svg.push(' ');
        }
        write!(svg, "{},{}", p.x, p.y)?;
    }
    writeln!(
        svg,
        r#"" style="fill:none;stroke:{stroke};stroke-width:3"/>"#
    )
}

fn bounds(points: &[Point]) -> (Point, Point) {
    if points.is_empty() {
        return (Point::zeros(), Point::zeros());
    }
    points.iter().fold(
        (Point::repeat(f64::INFINITY), Point::repeat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.inf(p), hi.sup(p)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_polygon_per_piece() {
        let points = vec![
            Point::new(-1.0, -2.0),
            Point::new(3.0, -2.0),
            Point::new(3.0, 2.0),
            Point::new(-1.0, 2.0),
        ];
        let svg = render(&points, &[vec![0, 1, 2], vec![0, 2, 3]], &[vec![0, 1, 2, 3]]).unwrap();
        assert_eq!(svg.matches("<polygon").count(), 3);
        assert!(svg.contains(r#"width="4" height="4""#));
        assert!(svg.contains("translate(1 2)"));
        assert!(svg.contains(r#"points="-1,-2 3,-2 3,2""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_input_still_renders() {
        let svg = render(&[], &[], &[]).unwrap();
        assert!(svg.contains(r#"width="0" height="0""#));
    }
}
