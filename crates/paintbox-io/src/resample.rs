//! Resampling to the page resolution
//!
//! Source images arrive at arbitrary sizes; a coloring page works at a
//! fixed target resolution. Nearest-neighbor sampling is the right
//! tradeoff here: it is cheap, and unlike interpolating scalers it
//! introduces no new blended colors, so line-art edges stay exactly
//! fillable.

use crate::error::{IoError, IoResult};
use crate::png::read_png;
use paintbox_core::{Error, Surface};
use std::io::{BufRead, Seek};

/// Resample a surface to the given size by nearest-neighbor sampling.
///
/// Returns a cheap clone when the dimensions already match.
///
/// # Errors
///
/// Returns an error if `width` or `height` is 0.
pub fn sample_to_size(surface: &Surface, width: u32, height: u32) -> IoResult<Surface> {
    if width == 0 || height == 0 {
        return Err(IoError::Core(Error::InvalidDimension { width, height }));
    }
    if width == surface.width() && height == surface.height() {
        return Ok(surface.clone());
    }

    let src_w = surface.width() as u64;
    let src_h = surface.height() as u64;
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let sy = (y as u64 * src_h / height as u64) as u32;
        for x in 0..width {
            let sx = (x as u64 * src_w / width as u64) as u32;
            data.push(surface.get_pixel_unchecked(sx, sy));
        }
    }

    Surface::from_data(width, height, data).map_err(IoError::Core)
}

/// Read a PNG image and bring it to the given page resolution.
///
/// Decodes with [`read_png`], then resamples with [`sample_to_size`];
/// sources that already match the target pass through untouched.
pub fn read_png_fit<R: BufRead + Seek>(reader: R, width: u32, height: u32) -> IoResult<Surface> {
    let decoded = read_png(reader)?;
    sample_to_size(&decoded, width, height)
}
