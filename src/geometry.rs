use crate::point2d::{Point2I, cross2};
use crate::point3d::Point3F;

/// Inclusive integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

// helper methods
impl Rect {
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x + 1) as u32
    }
    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y + 1) as u32
    }
    pub fn contains(&self, p: Point2I) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
    /// Overlap of two rectangles, `None` when they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        (r.min_x <= r.max_x && r.min_y <= r.max_y).then_some(r)
    }
}

/// Twice the signed area of the triangle `a`, `b`, `p`. Positive when `p`
/// lies to the left of `a`->`b`.
#[inline(always)]
pub fn edge_function(a: Point2I, b: Point2I, p: Point2I) -> i64 {
    cross2(b - a, p - a)
}

/// Barycentric weights of `p` relative to `a`, `b`, `c`, in that order.
/// `None` when the triangle has zero area. Weight signs are exact, so a
/// point is inside (edges included) iff all three are `>= 0`.
pub fn barycentric(a: Point2I, b: Point2I, c: Point2I, p: Point2I) -> Option<Point3F> {
    let area = edge_function(a, b, c);
    if area == 0 {
        return None;
    }
    let inv_area = 1.0 / area as f64;
    Some(Point3F {
        x: (edge_function(b, c, p) as f64 * inv_area) as f32,
        y: (edge_function(c, a, p) as f64 * inv_area) as f32,
        z: (edge_function(a, b, p) as f64 * inv_area) as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_dimensions() {
        let r = Rect { min_x: 2, min_y: 3, max_x: 2, max_y: 7 };
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 5);
        assert!(r.contains(Point2I::new(2, 7)));
        assert!(!r.contains(Point2I::new(3, 7)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect { min_x: 0, min_y: 0, max_x: 9, max_y: 9 };
        let b = Rect { min_x: 5, min_y: -5, max_x: 20, max_y: 5 };
        assert_eq!(a.intersect(&b), Some(Rect { min_x: 5, min_y: 0, max_x: 9, max_y: 5 }));
        let c = Rect { min_x: 10, min_y: 0, max_x: 12, max_y: 3 };
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_edge_function_sign() {
        let a = Point2I::new(0, 0);
        let b = Point2I::new(10, 0);
        assert!(edge_function(a, b, Point2I::new(5, 5)) > 0);
        assert!(edge_function(a, b, Point2I::new(5, -5)) < 0);
        assert_eq!(edge_function(a, b, Point2I::new(20, 0)), 0);
    }

    #[test]
    fn test_barycentric_weights() {
        let a = Point2I::new(0, 0);
        let b = Point2I::new(4, 0);
        let c = Point2I::new(0, 4);
        let w = barycentric(a, b, c, a).unwrap();
        assert_relative_eq!(w.x, 1.0);
        assert_relative_eq!(w.y, 0.0);
        assert_relative_eq!(w.z, 0.0);

        let w = barycentric(a, b, c, Point2I::new(1, 1)).unwrap();
        assert_relative_eq!(w.x + w.y + w.z, 1.0);
        assert_relative_eq!(w.y, 0.25);
        assert_relative_eq!(w.z, 0.25);

        let outside = barycentric(a, b, c, Point2I::new(5, 5)).unwrap();
        assert!(outside.x < 0.0);
    }

    #[test]
    fn test_barycentric_degenerate() {
        let p = Point2I::new(1, 1);
        assert!(barycentric(Point2I::new(0, 0), Point2I::new(2, 2), Point2I::new(4, 4), p).is_none());
    }

    #[test]
    fn test_barycentric_clockwise_is_still_positive_inside() {
        // reversed winding flips both area and sub-areas
        let w = barycentric(Point2I::new(0, 0), Point2I::new(0, 4), Point2I::new(4, 0), Point2I::new(1, 1)).unwrap();
        assert!(w.x > 0.0 && w.y > 0.0 && w.z > 0.0);
    }
}
