//! Paintbox - Coloring-page raster engine
//!
//! # Overview
//!
//! Paintbox provides the raster machinery behind a children's coloring
//! book view:
//!
//! - RGBA raster surfaces with exclusive-mutation discipline
//! - Tap-to-fill flood filling that respects dark line-art strokes
//! - A fixed fill palette
//! - PNG acquisition (with resampling to the page resolution) and export
//!
//! # Example
//!
//! ```
//! use paintbox::{ColoringPage, DisplayRect, Palette, Surface, color};
//!
//! let white = color::compose_rgb(255, 255, 255);
//! let source = Surface::new_filled(320, 240, white).unwrap();
//! let mut page = ColoringPage::new(source);
//!
//! let palette = Palette::standard();
//! let rect = DisplayRect::new(0.0, 0.0, 640.0, 480.0);
//! let filled = page
//!     .fill_display(rect, 100.0, 100.0, palette.get(0).unwrap().value)
//!     .unwrap();
//! assert_eq!(filled, 320 * 240);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use paintbox_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use paintbox_fill as fill;
pub use paintbox_io as io;

// The everyday operations at the root
pub use paintbox_fill::{ColoringPage, DisplayRect, flood_fill, is_line_color};
