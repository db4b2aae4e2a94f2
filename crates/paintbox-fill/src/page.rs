//! Coloring page lifecycle
//!
//! A [`ColoringPage`] owns the decoded source image and the working
//! surface that fills mutate. The working surface lives as long as the
//! page; it is recreated from the source whenever the source changes or
//! the user asks for a reset.

use crate::error::FillResult;
use crate::flood::flood_fill;
use crate::pointer::DisplayRect;
use paintbox_core::{Surface, SurfaceMut};

/// A source image plus the working surface being colored.
#[derive(Debug)]
pub struct ColoringPage {
    source: Surface,
    work: SurfaceMut,
}

impl ColoringPage {
    /// Create a page from a decoded source image.
    ///
    /// The working surface starts as a copy of the source.
    pub fn new(source: Surface) -> Self {
        let work = source.to_mut();
        ColoringPage { source, work }
    }

    /// Get the page width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.work.width()
    }

    /// Get the page height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.work.height()
    }

    /// Borrow the source image.
    pub fn source(&self) -> &Surface {
        &self.source
    }

    /// Borrow the working surface for display.
    pub fn surface(&self) -> &SurfaceMut {
        &self.work
    }

    /// Create an independent copy of the working surface, e.g. for
    /// export.
    pub fn snapshot(&self) -> Surface {
        self.work.snapshot()
    }

    /// Flood-fill the working surface at a surface coordinate.
    ///
    /// Returns the number of recolored pixels; `0` means the tap was a
    /// no-op (already that color, or a line pixel).
    ///
    /// # Errors
    ///
    /// Returns [`crate::FillError::InvalidSeed`] if `(x, y)` is out of
    /// bounds.
    pub fn fill(&mut self, x: u32, y: u32, fill_color: u32) -> FillResult<u32> {
        flood_fill(&mut self.work, x, y, fill_color)
    }

    /// Flood-fill from a display-space pointer position.
    ///
    /// Maps the position through `rect` into surface coordinates and
    /// fills there. Positions outside the rectangle are a no-op
    /// (`Ok(0)`), never an error: the mapping layer is what keeps
    /// out-of-bounds seeds away from the fill.
    pub fn fill_display(
        &mut self,
        rect: DisplayRect,
        px: f32,
        py: f32,
        fill_color: u32,
    ) -> FillResult<u32> {
        match rect.map_to_surface(px, py, self.width(), self.height()) {
            Some((x, y)) => self.fill(x, y, fill_color),
            None => Ok(0),
        }
    }

    /// Discard all fills and redraw the working surface from the source.
    pub fn reset(&mut self) {
        // Same dimensions by construction, so a plain copy suffices.
        self.work.data_mut().copy_from_slice(self.source.data());
    }

    /// Replace the source image, recreating the working surface.
    pub fn set_source(&mut self, source: Surface) {
        self.work = source.to_mut();
        self.source = source;
    }
}
