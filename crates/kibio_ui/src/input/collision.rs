//! Hit testing for overlay input
//!
//! Rectangles are half-open: the left and top edges are inside, the right
//! and bottom edges are not, so abutting buttons never share a point.

use crate::foundation::math::Point2;
use crate::ui::widgets::Rect;

/// Check if a point is inside a rectangle
pub fn point_in_rect(point: Point2, rect: &Rect) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Index of the first rectangle containing the point
pub fn first_hit<'a, I>(point: Point2, rects: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    rects.into_iter().position(|rect| point_in_rect(point, rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 100.0)
    }

    #[test]
    fn test_point_inside() {
        assert!(point_in_rect(Point2::new(150.0, 150.0), &rect()));
    }

    #[test]
    fn test_left_and_top_edges_inside() {
        assert!(point_in_rect(Point2::new(100.0, 150.0), &rect()));
        assert!(point_in_rect(Point2::new(150.0, 100.0), &rect()));
        assert!(point_in_rect(Point2::new(100.0, 100.0), &rect()));
    }

    #[test]
    fn test_right_and_bottom_edges_outside() {
        assert!(!point_in_rect(Point2::new(300.0, 150.0), &rect()));
        assert!(!point_in_rect(Point2::new(150.0, 200.0), &rect()));
        assert!(!point_in_rect(Point2::new(300.0, 200.0), &rect()));
        assert!(point_in_rect(Point2::new(299.9, 199.9), &rect()));
    }

    #[test]
    fn test_point_outside() {
        assert!(!point_in_rect(Point2::new(50.0, 50.0), &rect()));
        assert!(!point_in_rect(Point2::new(350.0, 250.0), &rect()));
        assert!(!point_in_rect(Point2::new(99.9, 150.0), &rect()));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!point_in_rect(Point2::new(10.0, 10.0), &empty));
    }

    #[test]
    fn test_first_hit_on_shared_edge() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 0.0, 10.0, 10.0)];
        assert_eq!(first_hit(Point2::new(10.0, 5.0), &rects), Some(1));
        assert_eq!(first_hit(Point2::new(9.5, 5.0), &rects), Some(0));
        assert_eq!(first_hit(Point2::new(25.0, 5.0), &rects), None);
    }
}
