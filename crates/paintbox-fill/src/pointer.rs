//! Pointer-to-surface coordinate mapping
//!
//! A page surface is displayed scaled into some rectangle of the screen.
//! Before a tap can seed a fill, its display-space position has to be
//! mapped into surface coordinates and validated against the surface
//! bounds. Positions outside the displayed rectangle are rejected rather
//! than clamped, so taps on surrounding chrome do nothing.

/// The displayed bounding rectangle of a surface, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Displayed width
    pub width: f32,
    /// Displayed height
    pub height: f32,
}

impl DisplayRect {
    /// Create a display rectangle.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        DisplayRect {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a display-space position to surface coordinates.
    ///
    /// Returns `None` when the position falls outside this rectangle,
    /// when the rectangle is degenerate (nonpositive width or height),
    /// or when the surface has zero pixels. The right and bottom edges
    /// are exclusive, matching the surface's half-open pixel ranges.
    pub fn map_to_surface(
        &self,
        px: f32,
        py: f32,
        surface_width: u32,
        surface_height: u32,
    ) -> Option<(u32, u32)> {
        if self.width <= 0.0 || self.height <= 0.0 || surface_width == 0 || surface_height == 0 {
            return None;
        }

        let rx = (px - self.left) / self.width;
        let ry = (py - self.top) / self.height;
        if !(0.0..1.0).contains(&rx) || !(0.0..1.0).contains(&ry) {
            return None;
        }

        // rx, ry < 1.0, but float rounding could still land on the edge.
        let x = ((rx * surface_width as f32) as u32).min(surface_width - 1);
        let y = ((ry * surface_height as f32) as u32).min(surface_height - 1);
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_corners() {
        let rect = DisplayRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.map_to_surface(10.0, 20.0, 200, 100), Some((0, 0)));
        // Just inside the far corner maps to the last pixel
        assert_eq!(
            rect.map_to_surface(109.9, 69.9, 200, 100),
            Some((199, 99))
        );
    }

    #[test]
    fn test_map_scales_position() {
        // 100x50 rect over a 200x100 surface: display units double
        let rect = DisplayRect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.map_to_surface(50.0, 25.0, 200, 100), Some((100, 50)));
    }

    #[test]
    fn test_outside_rejected() {
        let rect = DisplayRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.map_to_surface(9.9, 30.0, 200, 100), None);
        assert_eq!(rect.map_to_surface(30.0, 19.9, 200, 100), None);
        // Right/bottom edges are exclusive
        assert_eq!(rect.map_to_surface(110.0, 30.0, 200, 100), None);
        assert_eq!(rect.map_to_surface(30.0, 70.0, 200, 100), None);
    }

    #[test]
    fn test_degenerate_rect() {
        let rect = DisplayRect::new(0.0, 0.0, 0.0, 50.0);
        assert_eq!(rect.map_to_surface(0.0, 10.0, 10, 10), None);
    }
}
