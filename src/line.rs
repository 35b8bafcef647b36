//! Line rasterization.
//!
//! Steps one pixel at a time along the dominant axis and interpolates the
//! minor coordinate, so every integer value of the dominant axis between the
//! endpoints gets exactly one pixel. The minor coordinate is accumulated in
//! `f32` and truncated toward zero; the resulting bias is part of the output.

use crate::canvas::PixelTarget;
use crate::color::Color;
use crate::point2d::Point2I;

/// Ordered pixel trace of a segment, see [`line_pixels`].
#[derive(Debug, Clone)]
pub struct LinePixels {
    transposed: bool,
    major: i32,
    end: i32,
    minor: f32,
    minor_step: f32,
    done: bool,
}

/// Pixels approximating the segment `p0`-`p1`, in increasing order along the
/// dominant axis. Both endpoints are inputs only; nothing is mutated.
pub fn line_pixels(p0: Point2I, p1: Point2I) -> LinePixels {
    let dx = (p1.x as i64 - p0.x as i64).abs();
    let dy = (p1.y as i64 - p0.y as i64).abs();

    // Step along whichever axis is longer so every step lands on a new pixel.
    let transposed = dy > dx;
    let (mut a, mut b) = if transposed { (p0.transposed(), p1.transposed()) } else { (p0, p1) };
    if a.x > b.x {
        std::mem::swap(&mut a, &mut b);
    }

    let range = b.x - a.x;
    // |minor_step| <= 1 since range is the longer extent.
    let minor_step = if range == 0 { 0.0 } else { (b.y - a.y) as f32 * (1.0 / range as f32) };

    LinePixels {
        transposed,
        major: a.x,
        end: b.x,
        minor: a.y as f32,
        minor_step,
        done: false,
    }
}

impl Iterator for LinePixels {
    type Item = Point2I;

    #[inline(always)]
    fn next(&mut self) -> Option<Point2I> {
        if self.done {
            return None;
        }
        let p = Point2I::new(self.major, self.minor as i32);
        if self.major == self.end {
            self.done = true;
        } else {
            self.major += 1;
            self.minor += self.minor_step;
        }
        Some(if self.transposed { p.transposed() } else { p })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done { 0 } else { (self.end as i64 - self.major as i64 + 1) as usize };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

/// Draws the segment `p0`-`p1` into `target`. A zero length segment draws
/// exactly one pixel.
pub fn draw_line<T: PixelTarget + ?Sized>(p0: Point2I, p1: Point2I, target: &mut T, color: Color) {
    for p in line_pixels(p0, p1) {
        target.set(p.x, p.y, color);
    }
}
