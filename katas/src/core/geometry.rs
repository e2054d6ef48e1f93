//! Geometry predicates: triangles, rectangle overlap, and point-in-circle.
//!
//! Rectangles use canvas coordinates: `top` grows downward and `left` grows
//! to the right.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// True if a non-degenerate triangle can be built from the three sides.
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    let mut sides = [a, b, c];
    sides.sort_by(|left, right| right.total_cmp(left));
    sides[0] < sides[1] + sides[2]
}

/// True if the rectangles share interior area. Touching edges do not count.
pub fn rectangles_overlap(first: &Rect, second: &Rect) -> bool {
    spans_cross(
        (first.top, first.top + first.height),
        (second.top, second.top + second.height),
    ) && spans_cross(
        (first.left, first.left + first.width),
        (second.left, second.left + second.width),
    )
}

/// One-dimensional overlap of `[start, end]` spans, excluding shared endpoints.
fn spans_cross((start1, end1): (f64, f64), (start2, end2): (f64, f64)) -> bool {
    (end2 >= end1 && end1 > start2) || (end1 >= end2 && end2 > start1)
}

/// True if `point` lies strictly inside `circle`.
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    let dx = point.x - circle.center.x;
    let dy = point.y - circle.center.y;
    dx.hypot(dy) < circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, left: f64, width: f64, height: f64) -> Rect {
        Rect {
            top,
            left,
            width,
            height,
        }
    }

    fn circle(x: f64, y: f64, radius: f64) -> Circle {
        Circle {
            center: Point { x, y },
            radius,
        }
    }

    #[test]
    fn triangle_examples() {
        assert!(!is_triangle(1.0, 2.0, 3.0));
        assert!(is_triangle(3.0, 4.0, 5.0));
        assert!(!is_triangle(10.0, 1.0, 1.0));
        assert!(is_triangle(10.0, 10.0, 10.0));
    }

    #[test]
    fn triangle_side_order_does_not_matter() {
        assert!(is_triangle(5.0, 3.0, 4.0));
        assert!(!is_triangle(1.0, 10.0, 1.0));
    }

    #[test]
    fn overlapping_rectangles() {
        let first = rect(0.0, 0.0, 10.0, 10.0);
        let second = rect(5.0, 5.0, 20.0, 20.0);
        assert!(rectangles_overlap(&first, &second));
        assert!(rectangles_overlap(&second, &first));
    }

    #[test]
    fn distant_rectangles_do_not_overlap() {
        let first = rect(0.0, 0.0, 10.0, 10.0);
        let second = rect(20.0, 20.0, 20.0, 20.0);
        assert!(!rectangles_overlap(&first, &second));
    }

    #[test]
    fn contained_rectangle_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(10.0, 10.0, 5.0, 5.0);
        assert!(rectangles_overlap(&outer, &inner));
        assert!(rectangles_overlap(&inner, &outer));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let first = rect(0.0, 0.0, 10.0, 10.0);
        let beside = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!rectangles_overlap(&first, &beside));
    }

    #[test]
    fn overlap_requires_both_axes() {
        let first = rect(0.0, 0.0, 10.0, 10.0);
        let below = rect(20.0, 5.0, 10.0, 10.0);
        assert!(!rectangles_overlap(&first, &below));
    }

    #[test]
    fn point_inside_circle_examples() {
        assert!(is_inside_circle(&circle(0.0, 0.0, 10.0), &Point { x: 0.0, y: 0.0 }));
        assert!(!is_inside_circle(&circle(0.0, 0.0, 10.0), &Point { x: 10.0, y: 10.0 }));
        assert!(is_inside_circle(&circle(5.0, 5.0, 6.0), &Point { x: 1.0, y: 1.0 }));
        assert!(is_inside_circle(&circle(-2.0, 3.0, 4.0), &Point { x: 1.0, y: 1.0 }));
    }

    #[test]
    fn point_on_boundary_is_outside() {
        assert!(!is_inside_circle(&circle(0.0, 0.0, 5.0), &Point { x: 3.0, y: 4.0 }));
    }
}
