//! Flood fill
//!
//! Recolors the maximal 4-connected region of same-colored pixels around
//! a seed point, leaving dark line-art strokes untouched. This is the
//! operation behind tapping a region of a coloring page.
//!
//! # Region membership
//!
//! A pixel belongs to the region iff its R, G and B channels exactly
//! equal the seed pixel's original channels. Alpha never participates in
//! the comparison, and the fill always writes fully opaque pixels.
//! Anti-aliased pixels blended between the line color and the interior
//! keep their blended color; that cosmetic gap is accepted behavior of
//! the exact-equality approach.

use crate::error::{FillError, FillResult};
use paintbox_core::{SurfaceMut, color};

/// Channel brightness below which a pixel counts as line art.
///
/// A pixel is a line pixel when every one of R, G and B is below this
/// value. The threshold is deliberately not configurable.
pub const LINE_THRESHOLD: u8 = 128;

/// Check whether a packed pixel is a line-art color.
///
/// Line pixels resist filling: they are never recolored, and a fill
/// seeded on one is a no-op. This is how outline strokes stay intact
/// without a separate mask.
#[inline]
pub fn is_line_color(pixel: u32) -> bool {
    let (r, g, b) = color::extract_rgb(pixel);
    r < LINE_THRESHOLD && g < LINE_THRESHOLD && b < LINE_THRESHOLD
}

/// Flood fill starting from a seed point
///
/// Recolors the 4-connected region of pixels whose RGB channels equal
/// the seed pixel's original channels, writing `fill_color` with alpha
/// forced to fully opaque. The surface is mutated in place.
///
/// Two conditions make the call a silent no-op (`Ok(0)`):
///
/// 1. the seed pixel's RGB already equals the fill color's RGB;
/// 2. the seed pixel is a line color (see [`is_line_color`]).
///
/// Uses an explicit stack rather than recursion, so large regions
/// cannot overflow the call stack. There is no visited set: a pixel is
/// overwritten the moment it matches, so any later pop of the same
/// coordinate fails the equality check. Total work is O(region size).
///
/// # Arguments
///
/// * `surface` - Mutable RGBA surface
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `fill_color` - Packed RGBA color to fill with
///
/// # Returns
///
/// The number of pixels that were recolored.
///
/// # Errors
///
/// Returns [`FillError::InvalidSeed`] if the seed lies outside the
/// surface bounds.
pub fn flood_fill(
    surface: &mut SurfaceMut,
    seed_x: u32,
    seed_y: u32,
    fill_color: u32,
) -> FillResult<u32> {
    let width = surface.width();
    let height = surface.height();

    let Some(original) = surface.get_pixel(seed_x, seed_y) else {
        return Err(FillError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    };

    let fill = fill_color | (0xFF << color::ALPHA_SHIFT);

    if color::rgb_equal(original, fill) {
        return Ok(0);
    }
    if is_line_color(original) {
        return Ok(0);
    }

    let mut filled = 0u32;
    let mut stack = vec![(seed_x, seed_y)];

    while let Some((x, y)) = stack.pop() {
        // Pixels overwritten by an earlier pop no longer match.
        if !color::rgb_equal(surface.get_pixel_unchecked(x, y), original) {
            continue;
        }

        surface.set_pixel_unchecked(x, y, fill);
        filled += 1;

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < width {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < height {
            stack.push((x, y + 1));
        }
    }

    Ok(filled)
}
