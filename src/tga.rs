//! Truevision TGA encoding and decoding.
//!
//! Writes uncompressed or run-length encoded true-color / grayscale images
//! with an 18 byte header and the TGA 2.0 footer. Pixels are stored B,G,R(,A)
//! and rows top to bottom (descriptor bit 5 set).

use std::io::{Read, Write};

use crate::canvas::{Canvas, PixelFormat, PixelTarget};
use crate::color::Color;
use crate::error::{Error, Result};

const HEADER_LEN: usize = 18;
const TOP_LEFT_ORIGIN: u8 = 0x20;
const FOOTER_SIGNATURE: &[u8; 18] = b"TRUEVISION-XFILE.\0";
const MAX_PACKET: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TgaEncoding {
    #[default]
    Uncompressed,
    Rle,
}

fn image_type(format: PixelFormat, encoding: TgaEncoding) -> u8 {
    match (format, encoding) {
        (PixelFormat::Grayscale, TgaEncoding::Uncompressed) => 3,
        (PixelFormat::Grayscale, TgaEncoding::Rle) => 11,
        (_, TgaEncoding::Uncompressed) => 2,
        (_, TgaEncoding::Rle) => 10,
    }
}

/// Bytes of one pixel as they appear in the file.
fn pixel_bytes(color: Color, format: PixelFormat, out: &mut Vec<u8>) {
    match format {
        PixelFormat::Grayscale => out.push(color.luma()),
        PixelFormat::Rgb => out.extend_from_slice(&[color.b, color.g, color.r]),
        PixelFormat::Rgba => out.extend_from_slice(&[color.b, color.g, color.r, color.a]),
    }
}

pub fn encode<W: Write>(canvas: &Canvas, out: &mut W, encoding: TgaEncoding) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let format = canvas.format();
    let bpp = format.bytes_per_pixel();

    let mut header = [0u8; HEADER_LEN];
    header[2] = image_type(format, encoding);
    header[12..14].copy_from_slice(&(width as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(height as u16).to_le_bytes());
    header[16] = (bpp * 8) as u8;
    header[17] = TOP_LEFT_ORIGIN | if format == PixelFormat::Rgba { 8 } else { 0 };
    out.write_all(&header)?;

    let mut data = Vec::with_capacity(width as usize * height as usize * bpp);
    for color in canvas.pixels() {
        pixel_bytes(color, format, &mut data);
    }
    match encoding {
        TgaEncoding::Uncompressed => out.write_all(&data)?,
        TgaEncoding::Rle => write_rle(&data, bpp, out)?,
    }

    out.write_all(&[0u8; 8])?;
    out.write_all(FOOTER_SIGNATURE)?;
    Ok(())
}

fn write_rle<W: Write>(data: &[u8], bpp: usize, out: &mut W) -> Result<()> {
    let pixels: Vec<&[u8]> = data.chunks_exact(bpp).collect();
    let n = pixels.len();
    let mut i = 0;
    while i < n {
        let mut run = 1;
        while run < MAX_PACKET && i + run < n && pixels[i + run] == pixels[i] {
            run += 1;
        }
        if run > 1 {
            out.write_all(&[0x80 | (run - 1) as u8])?;
            out.write_all(pixels[i])?;
            i += run;
            continue;
        }

        // raw packet: stop where the next pixel starts a run
        let mut len = 1;
        while len < MAX_PACKET
            && i + len < n
            && !(i + len + 1 < n && pixels[i + len] == pixels[i + len + 1])
        {
            len += 1;
        }
        out.write_all(&[(len - 1) as u8])?;
        for p in &pixels[i..i + len] {
            out.write_all(p)?;
        }
        i += len;
    }
    Ok(())
}

fn read_exact_or_truncated<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<()> {
    input.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::TruncatedTga,
        _ => Error::Io(e),
    })
}

/// Reads uncompressed or RLE true-color and grayscale TGA images.
pub fn decode<R: Read>(input: &mut R) -> Result<Canvas> {
    let mut header = [0u8; HEADER_LEN];
    read_exact_or_truncated(input, &mut header)?;

    let id_len = header[0] as usize;
    if header[1] != 0 {
        return Err(Error::UnsupportedTga("color-mapped images".into()));
    }
    let rle = match header[2] {
        2 | 3 => false,
        10 | 11 => true,
        other => return Err(Error::UnsupportedTga(format!("image type {other}"))),
    };
    let width = u16::from_le_bytes([header[12], header[13]]) as u32;
    let height = u16::from_le_bytes([header[14], header[15]]) as u32;
    let format = match (header[2], header[16]) {
        (3 | 11, 8) => PixelFormat::Grayscale,
        (2 | 10, 24) => PixelFormat::Rgb,
        (2 | 10, 32) => PixelFormat::Rgba,
        (_, bits) => return Err(Error::UnsupportedTga(format!("{bits} bits per pixel"))),
    };
    let top_left = header[17] & TOP_LEFT_ORIGIN != 0;

    let mut id = vec![0u8; id_len];
    read_exact_or_truncated(input, &mut id)?;

    let mut canvas = Canvas::new(width, height, format)?;
    let bpp = format.bytes_per_pixel();
    let total = width as usize * height as usize;
    let mut data = vec![0u8; total * bpp];
    if rle {
        read_rle(input, &mut data, bpp)?;
    } else {
        read_exact_or_truncated(input, &mut data)?;
    }

    for (i, p) in data.chunks_exact(bpp).enumerate() {
        let color = match format {
            PixelFormat::Grayscale => Color::gray(p[0]),
            PixelFormat::Rgb => Color::rgb(p[2], p[1], p[0]),
            PixelFormat::Rgba => Color::rgba(p[2], p[1], p[0], p[3]),
        };
        let x = (i % width as usize) as i32;
        let y = (i / width as usize) as i32;
        canvas.set(x, y, color);
    }
    if !top_left {
        canvas.flip_vertically();
    }
    Ok(canvas)
}

fn read_rle<R: Read>(input: &mut R, data: &mut [u8], bpp: usize) -> Result<()> {
    let mut offset = 0;
    let mut packet = [0u8; 1];
    let mut pixel = [0u8; 4];
    while offset < data.len() {
        read_exact_or_truncated(input, &mut packet)?;
        let count = (packet[0] & 0x7f) as usize + 1;
        if offset + count * bpp > data.len() {
            return Err(Error::UnsupportedTga("packet overruns image data".into()));
        }
        if packet[0] & 0x80 != 0 {
            read_exact_or_truncated(input, &mut pixel[..bpp])?;
            for chunk in data[offset..offset + count * bpp].chunks_exact_mut(bpp) {
                chunk.copy_from_slice(&pixel[..bpp]);
            }
        } else {
            read_exact_or_truncated(input, &mut data[offset..offset + count * bpp])?;
        }
        offset += count * bpp;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded(canvas: &Canvas, encoding: TgaEncoding) -> Vec<u8> {
        let mut bytes = Vec::new();
        encode(canvas, &mut bytes, encoding).unwrap();
        bytes
    }

    #[test]
    fn test_header_fields() {
        let canvas = Canvas::new(300, 2, PixelFormat::Rgb).unwrap();
        let bytes = encoded(&canvas, TgaEncoding::Uncompressed);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[2], 2);
        assert_eq!(&bytes[12..14], &300u16.to_le_bytes());
        assert_eq!(&bytes[14..16], &2u16.to_le_bytes());
        assert_eq!(bytes[16], 24);
        assert_eq!(bytes[17], 0x20);
        assert_eq!(bytes.len(), 18 + 300 * 2 * 3 + 26);
        assert!(bytes.ends_with(b"TRUEVISION-XFILE.\0"));
    }

    #[test]
    fn test_bgr_byte_order() {
        let mut canvas = Canvas::new(1, 1, PixelFormat::Rgba).unwrap();
        canvas.set(0, 0, Color::rgba(10, 20, 30, 40));
        let bytes = encoded(&canvas, TgaEncoding::Uncompressed);
        assert_eq!(bytes[16], 32);
        assert_eq!(bytes[17], 0x28);
        assert_eq!(&bytes[18..22], &[30, 20, 10, 40]);
    }

    #[test]
    fn test_grayscale_uses_luma() {
        let mut canvas = Canvas::new(2, 1, PixelFormat::Grayscale).unwrap();
        canvas.set(0, 0, Color::WHITE);
        canvas.set(1, 0, Color::RED);
        let bytes = encoded(&canvas, TgaEncoding::Uncompressed);
        assert_eq!(bytes[2], 3);
        assert_eq!(bytes[16], 8);
        assert_eq!(&bytes[18..20], &[255, 76]);
    }

    #[test]
    fn test_rle_packets() {
        let mut canvas = Canvas::new(5, 1, PixelFormat::Grayscale).unwrap();
        canvas.clear(Color::gray(9));
        canvas.set(3, 0, Color::gray(1));
        canvas.set(4, 0, Color::gray(2));
        let bytes = encoded(&canvas, TgaEncoding::Rle);
        assert_eq!(bytes[2], 11);
        // run of three 9s, then a raw packet of [1, 2]
        assert_eq!(&bytes[18..23], &[0x82, 9, 0x01, 1, 2]);
    }

    #[test]
    fn test_rle_splits_long_runs() {
        let canvas = Canvas::new(300, 1, PixelFormat::Grayscale).unwrap();
        let bytes = encoded(&canvas, TgaEncoding::Rle);
        // 128 + 128 + 44
        assert_eq!(&bytes[18..24], &[0xff, 0, 0xff, 0, 0x80 | 43, 0]);
    }

    #[test]
    fn test_roundtrip_both_encodings() {
        let mut canvas = Canvas::new(7, 3, PixelFormat::Rgba).unwrap();
        canvas.clear(Color::BLUE);
        canvas.set(0, 0, Color::RED);
        canvas.set(6, 2, Color::rgba(1, 2, 3, 4));
        canvas.set(3, 1, Color::GREEN);
        for encoding in [TgaEncoding::Uncompressed, TgaEncoding::Rle] {
            let bytes = encoded(&canvas, encoding);
            let decoded = decode(&mut Cursor::new(bytes)).unwrap();
            assert_eq!(decoded, canvas);
        }
    }

    #[test]
    fn test_decode_bottom_left_origin() {
        // 1x2 grayscale stored bottom row first
        let mut bytes = vec![0u8; 18];
        bytes[2] = 3;
        bytes[12] = 1;
        bytes[14] = 2;
        bytes[16] = 8;
        bytes.extend_from_slice(&[10, 20]);
        let canvas = decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(canvas.get(0, 0), Some(Color::gray(20)));
        assert_eq!(canvas.get(0, 1), Some(Color::gray(10)));
    }

    #[test]
    fn test_decode_errors() {
        let canvas = Canvas::new(4, 4, PixelFormat::Rgb).unwrap();
        let bytes = encoded(&canvas, TgaEncoding::Uncompressed);
        let truncated = &bytes[..30];
        assert!(matches!(decode(&mut Cursor::new(truncated)), Err(Error::TruncatedTga)));

        let mut mapped = bytes.clone();
        mapped[1] = 1;
        assert!(matches!(decode(&mut Cursor::new(mapped)), Err(Error::UnsupportedTga(_))));

        let mut bits = bytes.clone();
        bits[16] = 16;
        assert!(matches!(decode(&mut Cursor::new(bits)), Err(Error::UnsupportedTga(_))));
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let canvas = Canvas::new(70_000, 1, PixelFormat::Grayscale).unwrap();
        let mut bytes = Vec::new();
        assert!(matches!(
            encode(&canvas, &mut bytes, TgaEncoding::Uncompressed),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
