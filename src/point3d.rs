/// Floating point 3D coordinate, used by the model loader and screen projection.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3F {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

use std::ops::{Add, Div, Mul, Sub};

impl Point3F {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point3F { x, y, z }
    }
}

impl Add for Point3F {
    type Output = Point3F;
    fn add(self, other: Point3F) -> Point3F {
        Point3F { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl Sub for Point3F {
    type Output = Point3F;
    fn sub(self, other: Point3F) -> Point3F {
        Point3F { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f32> for Point3F {
    type Output = Point3F;
    fn mul(self, scalar: f32) -> Point3F {
        Point3F { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

impl Div<f32> for Point3F {
    type Output = Point3F;
    fn div(self, scalar: f32) -> Point3F {
        Point3F { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}

pub fn dot3(a: Point3F, b: Point3F) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn cross3(a: Point3F, b: Point3F) -> Point3F {
    Point3F {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

pub fn normalize(vec: Point3F) -> Point3F {
    let length = dot3(vec, vec).sqrt();
    if length != 0.0 { vec / length } else { vec }
}
