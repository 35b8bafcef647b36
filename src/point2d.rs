use std::ops::{Add, Mul, Neg, Sub};

/// Integer pixel coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point2I {
    pub x: i32,
    pub y: i32,
}

impl Point2I {
    pub const fn new(x: i32, y: i32) -> Self {
        Point2I { x, y }
    }

    /// Same point with the x and y components swapped.
    #[inline(always)]
    pub const fn transposed(self) -> Self {
        Point2I { x: self.y, y: self.x }
    }
}

impl From<(i32, i32)> for Point2I {
    fn from((x, y): (i32, i32)) -> Self {
        Point2I { x, y }
    }
}

impl Add for Point2I {
    type Output = Point2I;
    fn add(self, other: Point2I) -> Point2I {
        Point2I { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point2I {
    type Output = Point2I;
    fn sub(self, other: Point2I) -> Point2I {
        Point2I { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Neg for Point2I {
    type Output = Point2I;
    fn neg(self) -> Point2I {
        Point2I { x: -self.x, y: -self.y }
    }
}

impl Mul<i32> for Point2I {
    type Output = Point2I;
    fn mul(self, scalar: i32) -> Point2I {
        Point2I { x: self.x * scalar, y: self.y * scalar }
    }
}

#[inline(always)]
pub fn dot2(a: Point2I, b: Point2I) -> i64 {
    a.x as i64 * b.x as i64 + a.y as i64 * b.y as i64
}

/// Z component of the cross product of two 2D vectors.
#[inline(always)]
pub fn cross2(a: Point2I, b: Point2I) -> i64 {
    a.x as i64 * b.y as i64 - a.y as i64 * b.x as i64
}

#[inline(always)]
pub fn perp(vec: Point2I) -> Point2I {
    Point2I { x: vec.y, y: -vec.x }
}
