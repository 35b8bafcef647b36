//! tinyraster: a minimal software rasterizer.
//!
//! Draws lines and filled triangles into an in-memory [`Canvas`] and writes
//! it out as TGA, BMP or PNG. The rasterizers only need a [`PixelTarget`],
//! so they can draw into anything that accepts pixel writes.
//!
//! ```
//! use tinyraster::{Canvas, Color, PixelFormat, Point2I, Triangle, draw_line, fill_triangle};
//!
//! let mut canvas = Canvas::new(200, 200, PixelFormat::Rgb).unwrap();
//! draw_line(Point2I::new(13, 20), Point2I::new(80, 40), &mut canvas, Color::WHITE);
//! fill_triangle(&Triangle::from([(10, 70), (50, 160), (70, 80)]), &mut canvas, Color::RED);
//! canvas.flip_vertically();
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod line;
pub mod logging;
pub mod model;
pub mod point2d;
pub mod point3d;
pub mod render;
pub mod scene;
pub mod tga;
pub mod triangle;

pub use canvas::{Canvas, PixelFormat, PixelTarget, WriteLog};
pub use color::Color;
pub use error::{Error, Result};
pub use line::{draw_line, line_pixels};
pub use model::Model;
pub use point2d::Point2I;
pub use point3d::Point3F;
pub use tga::TgaEncoding;
pub use triangle::{Triangle, draw_triangle_outline, fill_triangle, fill_triangle_barycentric};
