//! Fixed demo content.

use crate::canvas::PixelTarget;
use crate::color::Color;
use crate::line::draw_line;
use crate::point2d::Point2I;
use crate::triangle::{Triangle, draw_triangle_outline, fill_triangle};

pub const STAR_CENTER: Point2I = Point2I::new(250, 250);

/// End offsets of the eight star lines, one per octant.
pub fn star_offsets() -> [Point2I; 8] {
    let (a, b) = (80, 41);
    [
        Point2I::new(a, b),
        Point2I::new(b, a),
        Point2I::new(-b, a),
        Point2I::new(-a, b),
        Point2I::new(-a, -b),
        Point2I::new(-b, -a),
        Point2I::new(b, -a),
        Point2I::new(a, -b),
    ]
}

/// Eight lines fanning out of [`STAR_CENTER`], each a darker gray.
pub fn lines_star<T: PixelTarget + ?Sized>(target: &mut T) {
    for (i, offset) in star_offsets().into_iter().enumerate() {
        let shade = 0xff - (i as u8) * 20;
        draw_line(STAR_CENTER, STAR_CENTER + offset, target, Color::gray(shade));
    }
}

pub fn sample_triangles() -> [Triangle; 3] {
    [
        Triangle::from([(10, 70), (50, 160), (70, 80)]),
        Triangle::from([(180, 50), (150, 1), (70, 180)]),
        Triangle::from([(180, 150), (120, 160), (130, 180)]),
    ]
}

/// The three sample triangles filled red, white and green, with a white
/// outline around the first one.
pub fn triangles<T: PixelTarget + ?Sized>(target: &mut T) {
    let [t0, t1, t2] = sample_triangles();
    draw_triangle_outline(&t0, target, Color::WHITE);
    fill_triangle(&t0, target, Color::RED);
    fill_triangle(&t1, target, Color::WHITE);
    fill_triangle(&t2, target, Color::GREEN);
}
