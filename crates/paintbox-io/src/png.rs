//! PNG image format support
//!
//! Decodes PNG sources into RGBA surfaces and encodes surfaces back to
//! PNG. Because the surface has a single pixel representation, decoding
//! asks the codec to normalize every input to 8-bit channels (palettes
//! expanded, 16-bit samples stripped) and then widens the remaining
//! color types to RGBA.

use crate::{IoError, IoResult};
use paintbox_core::{Surface, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGBA surface
///
/// Grayscale and gray+alpha sources are widened to RGBA; indexed
/// sources are expanded through their palette; 16-bit samples are
/// reduced to 8-bit. Opaque sources get alpha 255.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Surface> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    match output_info.color_type {
        ColorType::Grayscale => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    pixels.push(color::compose_rgb(g, g, g));
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 2;
                    let (g, a) = (data[idx], data[idx + 1]);
                    pixels.push(color::compose_rgba(g, g, g, a));
                }
            }
        }
        ColorType::Rgb => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 3;
                    pixels.push(color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]));
                }
            }
        }
        ColorType::Rgba => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 4;
                    pixels.push(color::compose_rgba(
                        data[idx],
                        data[idx + 1],
                        data[idx + 2],
                        data[idx + 3],
                    ));
                }
            }
        }
        // normalize_to_color8 expands indexed sources before we see them
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output format: {:?}",
                other
            )));
        }
    }

    Surface::from_data(width, height, pixels).map_err(IoError::Core)
}

/// Write a surface as an 8-bit RGBA PNG
pub fn write_png<W: Write>(surface: &Surface, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, surface.width(), surface.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut bytes = Vec::with_capacity(surface.data().len() * 4);
    for &pixel in surface.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        bytes.extend_from_slice(&[r, g, b, a]);
    }

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
