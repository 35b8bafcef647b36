//! Model rendering on top of the line and triangle rasterizers.
//!
//! Models are expected in normalized device coordinates (`-1..1` on x and y);
//! z is only used for lighting, there is no depth test.

use log::debug;
use rand::Rng;

use crate::canvas::PixelTarget;
use crate::color::Color;
use crate::line::draw_line;
use crate::model::Model;
use crate::point2d::Point2I;
use crate::point3d::{Point3F, cross3, dot3, normalize};
use crate::triangle::{Triangle, fill_triangle};

/// Light shining into the screen, towards -z.
pub const DEFAULT_LIGHT: Point3F = Point3F { x: 0.0, y: 0.0, z: -1.0 };

/// Faces drawn and skipped by a shaded render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub culled: usize,
}

/// Maps `-1..1` to `0..width` / `0..height`, truncating.
#[inline(always)]
pub fn project_to_screen(v: Point3F, width: u32, height: u32) -> Point2I {
    let x = (v.x + 1.0) * width as f32 / 2.0;
    let y = (v.y + 1.0) * height as f32 / 2.0;
    Point2I::new(x as i32, y as i32)
}

fn screen_triangle<T: PixelTarget + ?Sized>(face: &[Point3F; 3], target: &T) -> Triangle {
    let [a, b, c] = face.map(|v| project_to_screen(v, target.width(), target.height()));
    Triangle::new(a, b, c)
}

/// Draws every face edge, j -> (j + 1) % 3.
pub fn render_wireframe<T: PixelTarget + ?Sized>(model: &Model, target: &mut T, color: Color) {
    for face in model.faces() {
        let tri = screen_triangle(&face, target);
        for j in 0..3 {
            draw_line(tri.vertices[j], tri.vertices[(j + 1) % 3], target, color);
        }
    }
}

/// Flat shading: one intensity per face from its normal and `light_dir`.
/// Faces turned away from the light are culled.
pub fn render_flat_shaded<T: PixelTarget + ?Sized>(
    model: &Model,
    target: &mut T,
    base: Color,
    light_dir: Point3F,
) -> RenderStats {
    let light = normalize(light_dir);
    let mut stats = RenderStats::default();
    for face in model.faces() {
        let [w0, w1, w2] = face;
        let normal = normalize(cross3(w2 - w0, w1 - w0));
        let intensity = dot3(normal, light);
        if intensity <= 0.0 {
            stats.culled += 1;
            continue;
        }
        let tri = screen_triangle(&face, target);
        fill_triangle(&tri, target, base.shade(intensity));
        stats.drawn += 1;
    }
    debug!("flat shading drew {} faces, culled {}", stats.drawn, stats.culled);
    stats
}

/// Fills every face with a random opaque color.
pub fn render_random_colors<T: PixelTarget + ?Sized, R: Rng>(model: &Model, target: &mut T, rng: &mut R) {
    for face in model.faces() {
        let color = Color::rgb(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255));
        let tri = screen_triangle(&face, target);
        fill_triangle(&tri, target, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, PixelFormat, WriteLog};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    // one triangle facing +z (towards the viewer), one facing -z
    const TWO_FACES: &str = "v -0.5 -0.5 0\nv 0.5 -0.5 0\nv 0 0.5 0\nf 1 2 3\nf 1 3 2\n";

    fn model(src: &str) -> Model {
        Model::from_reader(Cursor::new(src)).unwrap()
    }

    #[test]
    fn test_projection() {
        assert_eq!(project_to_screen(Point3F::new(-1.0, -1.0, 0.0), 800, 600), Point2I::new(0, 0));
        assert_eq!(project_to_screen(Point3F::new(0.0, 0.0, 0.3), 800, 600), Point2I::new(400, 300));
        assert_eq!(project_to_screen(Point3F::new(1.0, 1.0, 0.0), 800, 600), Point2I::new(800, 600));
        assert_eq!(project_to_screen(Point3F::new(-0.999, 0.5, 0.0), 10, 10), Point2I::new(0, 7));
    }

    #[test]
    fn test_wireframe_touches_projected_vertices() {
        let m = model(TWO_FACES);
        let mut canvas = Canvas::new(100, 100, PixelFormat::Rgb).unwrap();
        render_wireframe(&m, &mut canvas, Color::WHITE);
        assert_eq!(canvas.get(25, 25), Some(Color::WHITE));
        assert_eq!(canvas.get(75, 25), Some(Color::WHITE));
        assert_eq!(canvas.get(50, 75), Some(Color::WHITE));
        // interior stays empty
        assert_eq!(canvas.get(50, 40), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn test_flat_shading_culls_back_faces() {
        let m = model(TWO_FACES);
        let mut log = WriteLog::new(100, 100);
        let stats = render_flat_shaded(&m, &mut log, Color::WHITE, DEFAULT_LIGHT);
        assert_eq!(stats, RenderStats { drawn: 1, culled: 1 });
        // normal is parallel to the light, so full intensity
        assert!(log.writes.iter().all(|(_, c)| *c == Color::WHITE));
        assert!(!log.writes.is_empty());
    }

    #[test]
    fn test_flat_shading_light_from_behind() {
        let m = model(TWO_FACES);
        let mut log = WriteLog::new(100, 100);
        let stats = render_flat_shaded(&m, &mut log, Color::WHITE, Point3F::new(0.0, 0.0, 1.0));
        assert_eq!(stats, RenderStats { drawn: 1, culled: 1 });
    }

    #[test]
    fn test_random_colors_are_seeded() {
        let m = model(TWO_FACES);
        let mut a = Canvas::new(50, 50, PixelFormat::Rgb).unwrap();
        let mut b = a.clone();
        render_random_colors(&m, &mut a, &mut StdRng::seed_from_u64(7));
        render_random_colors(&m, &mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.get(25, 20).is_some_and(|c| c.a == 255));
    }
}
