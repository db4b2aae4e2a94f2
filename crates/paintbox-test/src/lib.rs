//! paintbox-test - Test support for the paintbox workspace
//!
//! Builds small surfaces from ASCII "pattern art" so that fill and I/O
//! tests can state their fixtures visually:
//!
//! ```
//! use paintbox_test::surface_from_art;
//!
//! let surface = surface_from_art(&[
//!     "WWWWW",
//!     "WKKKW",
//!     "WKWKW",
//!     "WKKKW",
//!     "WWWWW",
//! ]);
//! assert_eq!(surface.width(), 5);
//! ```
//!
//! These helpers panic on malformed input; they are only meant to be
//! called from tests.

use paintbox_core::{Surface, color};

/// Map a pattern character to a packed RGBA pixel.
///
/// - `W` or `.` - white
/// - `K` or `#` - black (a line color)
/// - `D` - dark gray `(100, 100, 100)` (also a line color)
/// - `L` - light gray `(200, 200, 200)`
/// - `R`, `G`, `B` - full red / green / blue
/// - `Y` - yellow
///
/// # Panics
///
/// Panics on any other character.
pub fn art_color(c: char) -> u32 {
    match c {
        'W' | '.' => color::compose_rgb(255, 255, 255),
        'K' | '#' => color::compose_rgb(0, 0, 0),
        'D' => color::compose_rgb(100, 100, 100),
        'L' => color::compose_rgb(200, 200, 200),
        'R' => color::compose_rgb(255, 0, 0),
        'G' => color::compose_rgb(0, 255, 0),
        'B' => color::compose_rgb(0, 0, 255),
        'Y' => color::compose_rgb(255, 255, 0),
        _ => panic!("unknown pattern character: {c:?}"),
    }
}

/// Build a surface from rows of pattern characters (see [`art_color`]).
///
/// # Panics
///
/// Panics if `rows` is empty, any row is empty, or rows have unequal
/// lengths.
pub fn surface_from_art(rows: &[&str]) -> Surface {
    assert!(!rows.is_empty(), "pattern art needs at least one row");
    let width = rows[0].chars().count();
    assert!(width > 0, "pattern art rows must not be empty");

    let mut data = Vec::with_capacity(width * rows.len());
    for row in rows {
        assert_eq!(
            row.chars().count(),
            width,
            "pattern art rows must have equal lengths"
        );
        data.extend(row.chars().map(art_color));
    }

    Surface::from_data(width as u32, rows.len() as u32, data).unwrap()
}

/// Count the pixels whose packed value equals `pixel` exactly.
pub fn count_color(surface: &Surface, pixel: u32) -> usize {
    surface.data().iter().filter(|&&p| p == pixel).count()
}

/// Assert that two surfaces have identical dimensions and pixel bytes,
/// reporting the first mismatching coordinate on failure.
///
/// # Panics
///
/// Panics if the surfaces differ.
pub fn assert_surfaces_eq(actual: &Surface, expected: &Surface) {
    assert!(
        actual.sizes_equal(expected),
        "surface sizes differ: {}x{} vs {}x{}",
        actual.width(),
        actual.height(),
        expected.width(),
        expected.height()
    );
    for y in 0..actual.height() {
        for x in 0..actual.width() {
            let a = actual.get_pixel_unchecked(x, y);
            let e = expected.get_pixel_unchecked(x, y);
            assert_eq!(a, e, "pixel mismatch at ({x}, {y}): {a:#010x} vs {e:#010x}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_from_art_dimensions() {
        let surface = surface_from_art(&["WKW", "KWK"]);
        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 2);
    }

    #[test]
    #[should_panic(expected = "equal lengths")]
    fn test_ragged_rows_panic() {
        surface_from_art(&["WW", "W"]);
    }

    #[test]
    fn test_count_color() {
        let surface = surface_from_art(&["WKW"]);
        assert_eq!(count_color(&surface, art_color('K')), 1);
        assert_eq!(count_color(&surface, art_color('W')), 2);
    }

    #[test]
    fn test_assert_surfaces_eq_identical() {
        let a = surface_from_art(&["RGB"]);
        let b = surface_from_art(&["RGB"]);
        assert_surfaces_eq(&a, &b);
    }

    #[test]
    #[should_panic(expected = "pixel mismatch")]
    fn test_assert_surfaces_eq_mismatch() {
        let a = surface_from_art(&["RGB"]);
        let b = surface_from_art(&["RGW"]);
        assert_surfaces_eq(&a, &b);
    }
}
