//! Triangle rasterization.
//!
//! [`fill_triangle`] is a scanline fill: vertices are sorted top to bottom and
//! every row between the top and bottom vertex is filled between the two
//! edges active on that row. [`fill_triangle_barycentric`] covers the same
//! shape by testing every pixel of the bounding box.

use log::debug;

use crate::canvas::PixelTarget;
use crate::color::Color;
use crate::geometry::{Rect, barycentric};
use crate::line::draw_line;
use crate::point2d::{Point2I, cross2};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub vertices: [Point2I; 3],
}

impl Triangle {
    pub fn new(a: Point2I, b: Point2I, c: Point2I) -> Self {
        Triangle { vertices: [a, b, c] }
    }

    /// Twice the signed area; positive for counter-clockwise vertices.
    pub fn signed_area2(&self) -> i64 {
        let [a, b, c] = self.vertices;
        cross2(b - a, c - a)
    }

    /// Collinear vertices, including the all-same-x and all-same-y cases.
    pub fn is_degenerate(&self) -> bool {
        self.signed_area2() == 0
    }

    /// Copy with vertices ordered by descending y. Equal y keeps input order.
    pub fn sorted_by_y_desc(&self) -> [Point2I; 3] {
        let mut v = self.vertices;
        v.sort_by(|a, b| b.y.cmp(&a.y));
        v
    }

    pub fn bounding_box(&self) -> Rect {
        let [a, b, c] = self.vertices;
        Rect {
            min_x: a.x.min(b.x).min(c.x),
            min_y: a.y.min(b.y).min(c.y),
            max_x: a.x.max(b.x).max(c.x),
            max_y: a.y.max(b.y).max(c.y),
        }
    }
}

impl From<[(i32, i32); 3]> for Triangle {
    fn from(v: [(i32, i32); 3]) -> Self {
        Triangle { vertices: v.map(Point2I::from) }
    }
}

/// One triangle side, evaluated per scanline.
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: Point2I,
    to: Point2I,
    dx: f64,
    dy: f64,
}

impl Edge {
    fn new(from: Point2I, to: Point2I) -> Self {
        Edge { from, to, dx: (to.x - from.x) as f64, dy: (to.y - from.y) as f64 }
    }

    /// Horizontal x range the edge covers on row `y`. A horizontal edge
    /// covers its whole length on its only row.
    #[inline(always)]
    fn span_at(&self, y: i32) -> (i32, i32) {
        if self.dy == 0.0 {
            return (self.from.x.min(self.to.x), self.from.x.max(self.to.x));
        }
        // multiply before dividing so the far endpoint lands exactly on to.x
        let x = (self.from.x as f64 + self.dx * (y - self.from.y) as f64 / self.dy) as i32;
        (x, x)
    }
}

#[inline(always)]
fn fill_row<T: PixelTarget + ?Sized>(y: i32, a: (i32, i32), b: (i32, i32), target: &mut T, color: Color) {
    let from = a.0.min(b.0);
    let to = a.1.max(b.1);
    for x in from..=to {
        target.set(x, y, color);
    }
}

/// Scanline fill. Every row from the top vertex to the bottom vertex is
/// written once as a single contiguous span; degenerate triangles write
/// nothing.
pub fn fill_triangle<T: PixelTarget + ?Sized>(tri: &Triangle, target: &mut T, color: Color) {
    if tri.is_degenerate() {
        debug!("skipping degenerate triangle {:?}", tri.vertices);
        return;
    }

    let [v0, v1, v2] = tri.sorted_by_y_desc();
    let top = Edge::new(v0, v1);
    let long = Edge::new(v0, v2);
    let bottom = Edge::new(v1, v2);

    // Row v1.y belongs to the upper half only.
    for y in (v1.y..=v0.y).rev() {
        fill_row(y, top.span_at(y), long.span_at(y), target, color);
    }
    for y in (v2.y..v1.y).rev() {
        fill_row(y, bottom.span_at(y), long.span_at(y), target, color);
    }
}

/// Bounding box fill using barycentric inclusion, edges included. Only the
/// part of the box inside the target is visited.
pub fn fill_triangle_barycentric<T: PixelTarget + ?Sized>(tri: &Triangle, target: &mut T, color: Color) {
    if tri.is_degenerate() {
        debug!("skipping degenerate triangle {:?}", tri.vertices);
        return;
    }
    if target.width() == 0 || target.height() == 0 {
        return;
    }
    let bounds = Rect {
        min_x: 0,
        min_y: 0,
        max_x: target.width().min(i32::MAX as u32) as i32 - 1,
        max_y: target.height().min(i32::MAX as u32) as i32 - 1,
    };
    let Some(bbox) = tri.bounding_box().intersect(&bounds) else {
        return;
    };

    let [a, b, c] = tri.vertices;
    for y in bbox.min_y..=bbox.max_y {
        for x in bbox.min_x..=bbox.max_x {
            let p = Point2I::new(x, y);
            let Some(w) = barycentric(a, b, c, p) else { return };
            if w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0 {
                target.set(x, y, color);
            }
        }
    }
}

/// Outline only: v0->v1, v1->v2, v2->v0 in input order.
pub fn draw_triangle_outline<T: PixelTarget + ?Sized>(tri: &Triangle, target: &mut T, color: Color) {
    let [v0, v1, v2] = tri.vertices;
    draw_line(v0, v1, target, color);
    draw_line(v1, v2, target, color);
    draw_line(v2, v0, target, color);
}
