use bytemuck::cast_slice_mut;
use image::{DynamicImage, RgbaImage};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::point2d::Point2I;
use crate::tga::{self, TgaEncoding};

/// Anything the rasterizers can draw into.
///
/// Implementations decide what happens to coordinates outside
/// `0..width` x `0..height`; rasterizers never check bounds themselves.
pub trait PixelTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set(&mut self, x: i32, y: i32, color: Color);
}

/// How many channels a canvas persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Grayscale,
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Grayscale => 1,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Fixed size RGBA pixel grid. Row 0 is the first row in memory and the
/// top row of every encoded file; callers wanting a bottom-left origin
/// call [`Canvas::flip_vertically`] before writing.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    format: PixelFormat,
    pub rgba: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size_calc = width as usize * height as usize;
        Ok(Self { width, height, format, rgba: vec![0; size_calc * 4] })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index(x, y)?;
        Some(Color::from_bytes([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]))
    }

    pub fn clear(&mut self, color: Color) {
        let pixels: &mut [[u8; 4]] = cast_slice_mut(&mut self.rgba);
        pixels.fill(color.to_bytes());
    }

    /// Swap row `i` with row `height - 1 - i`.
    pub fn flip_vertically(&mut self) {
        let stride = self.width as usize * 4;
        let height = self.height as usize;
        for i in 0..height / 2 {
            let (top, bottom) = self.rgba.split_at_mut((height - 1 - i) * stride);
            top[i * stride..(i + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
    }

    pub fn flip_horizontally(&mut self) {
        let stride = self.width as usize * 4;
        for row in self.rgba.chunks_exact_mut(stride) {
            let pixels: &mut [[u8; 4]] = cast_slice_mut(row);
            pixels.reverse();
        }
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.rgba.chunks_exact(4).map(|p| Color::from_bytes([p[0], p[1], p[2], p[3]]))
    }

    pub fn write_tga<P: AsRef<Path>>(&self, path: P, encoding: TgaEncoding) -> Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(File::create(path)?);
        tga::encode(self, &mut file, encoding)?;
        file.flush()?;
        info!("wrote {}x{} TGA to {}", self.width, self.height, path.display());
        Ok(())
    }

    pub fn write_bmp<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(File::create(path)?);
        self.encode_bmp(&mut file)?;
        file.flush()?;
        info!("wrote {}x{} BMP to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// 24-bit BMP. The top canvas row is the top of the picture.
    pub fn encode_bmp<W: Write>(&self, file: &mut W) -> Result<()> {
        let width = self.width;
        let height = self.height;
        let row_stride = (3 * width + 3) & !3;
        let pixel_array_size = row_stride * height;
        let file_size = 54 + pixel_array_size;
        file.write_all(b"BM")?;
        file.write_all(&file_size.to_le_bytes())?;
        file.write_all(&[0u8; 4])?;
        file.write_all(&54u32.to_le_bytes())?;
        file.write_all(&[40u8, 0, 0, 0])?;
        file.write_all(&(width as i32).to_le_bytes())?;
        file.write_all(&(height as i32).to_le_bytes())?;
        file.write_all(&[1, 0])?;
        file.write_all(&[24, 0])?;
        file.write_all(&[0u8; 4])?;
        file.write_all(&pixel_array_size.to_le_bytes())?;
        file.write_all(&[0u8; 16])?;
        let padding = vec![0u8; (row_stride - width * 3) as usize];
        let stride = width as usize * 4;
        for row in self.rgba.chunks_exact(stride).rev() {
            for p in row.chunks_exact(4) {
                file.write_all(&[p[2], p[1], p[0]])?;
            }
            file.write_all(&padding)?;
        }
        Ok(())
    }

    /// PNG (or any format `image` infers from the extension), honoring the
    /// canvas pixel format.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .ok_or(Error::InvalidDimensions { width: self.width, height: self.height })?;
        let img = DynamicImage::ImageRgba8(img);
        match self.format {
            PixelFormat::Grayscale => img.to_luma8().save(path)?,
            PixelFormat::Rgb => img.to_rgb8().save(path)?,
            PixelFormat::Rgba => img.save(path)?,
        }
        info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl PixelTarget for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Writes outside the canvas are ignored.
    #[inline(always)]
    fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.rgba[i..i + 4].copy_from_slice(&color.to_bytes());
        }
    }
}

/// Records every write in call order, including out-of-bounds ones.
/// Useful to inspect exactly what a rasterizer emitted.
#[derive(Debug, Clone, Default)]
pub struct WriteLog {
    pub width: u32,
    pub height: u32,
    pub writes: Vec<(Point2I, Color)>,
}

impl WriteLog {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, writes: Vec::new() }
    }

    pub fn points(&self) -> Vec<Point2I> {
        self.writes.iter().map(|(p, _)| *p).collect()
    }
}

impl PixelTarget for WriteLog {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        self.writes.push((Point2I::new(x, y), color));
    }
}
