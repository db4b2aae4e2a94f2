//! Surface - The raster container
//!
//! A `Surface` is a width × height grid of 32-bit packed RGBA pixels,
//! stored row-major. It is the only pixel representation in paintbox:
//! line-art pages are decoded into it, fills mutate it in place, and
//! exports read it back out.
//!
//! # Pixel layout
//!
//! Each pixel is one `u32` of the form `0xRRGGBBAA` (red in the most
//! significant byte). See [`crate::color`] for composing and extracting
//! channels. The row stride equals the width; there is no padding.
//!
//! # Ownership model
//!
//! `Surface` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to [`SurfaceMut`] via
//! [`Surface::try_into_mut`] or [`Surface::to_mut`], then convert back
//! with `Into<Surface>`. A fill therefore always holds exclusive access
//! to the pixels it mutates.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal surface data
#[derive(Debug)]
struct SurfaceData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major packed RGBA pixels, `height * width` entries
    data: Vec<u32>,
}

impl SurfaceData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Immutable RGBA raster surface
///
/// Cloning is cheap (shared ownership via `Arc`).
///
/// # Examples
///
/// ```
/// use paintbox_core::{Surface, color};
///
/// let surface = Surface::new_filled(320, 240, color::compose_rgb(255, 255, 255)).unwrap();
/// assert_eq!(surface.width(), 320);
/// assert_eq!(surface.height(), 240);
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    inner: Arc<SurfaceData>,
}

impl Surface {
    /// Create a new surface with all pixels transparent black (`0`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new surface with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![pixel; width as usize * height as usize];
        Ok(Surface {
            inner: Arc::new(SurfaceData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a surface from row-major packed RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or if
    /// `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Surface {
            inner: Arc::new(SurfaceData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether `(x, y)` lies within the surface bounds.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get the number of strong references to this surface.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two surfaces have the same width and height.
    pub fn sizes_equal(&self, other: &Surface) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this surface.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Surface {
            inner: Arc::new(SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`SurfaceMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<SurfaceMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(SurfaceMut { inner: data }),
            Err(arc) => Err(Surface { inner: arc }),
        }
    }

    /// Create a mutable copy of this surface.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> SurfaceMut {
        SurfaceMut {
            inner: SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable RGBA raster surface
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Surface`] using `Into<Surface>`. Exclusive ownership of the pixels
/// is enforced at compile time, so no other reader can observe a surface
/// mid-mutation.
#[derive(Debug)]
pub struct SurfaceMut {
    inner: SurfaceData,
}

impl SurfaceMut {
    /// Get the surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether `(x, y)` lies within the surface bounds.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Set every pixel to `pixel`.
    pub fn set_all(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }

    /// Create an immutable deep copy of the current pixels.
    ///
    /// The working surface stays borrowed mutably elsewhere; the copy is
    /// independent and safe to hand to display or export code.
    pub fn snapshot(&self) -> Surface {
        Surface {
            inner: Arc::new(SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Overwrite this surface's pixels with those of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the dimensions differ.
    pub fn copy_from(&mut self, src: &Surface) -> Result<()> {
        if self.inner.width != src.width() || self.inner.height != src.height() {
            return Err(Error::IncompatibleSizes(
                self.inner.width,
                self.inner.height,
                src.width(),
                src.height(),
            ));
        }
        self.inner.data.copy_from_slice(src.data());
        Ok(())
    }
}

impl From<SurfaceMut> for Surface {
    fn from(surface_mut: SurfaceMut) -> Self {
        Surface {
            inner: Arc::new(surface_mut.inner),
        }
    }
}
