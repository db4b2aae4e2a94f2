//! paintbox-fill - Flood-fill coloring engine
//!
//! This crate provides the region coloring used by the paintbox drawing
//! view:
//!
//! - **Flood fill** - 4-connected, exact-color region recoloring that
//!   respects dark line-art strokes
//! - **Coloring page** - source image + working surface lifecycle
//! - **Pointer mapping** - display-space tap positions to surface
//!   coordinates
//!
//! # Examples
//!
//! ```
//! use paintbox_core::{Surface, color};
//! use paintbox_fill::flood_fill;
//!
//! let white = color::compose_rgb(255, 255, 255);
//! let surface = Surface::new_filled(10, 10, white).unwrap();
//! let mut sm = surface.try_into_mut().unwrap();
//!
//! let red = color::compose_rgb(255, 0, 0);
//! let count = flood_fill(&mut sm, 5, 5, red).unwrap();
//! assert_eq!(count, 100); // All 100 pixels recolored
//! ```

pub mod error;
pub mod flood;
pub mod page;
pub mod pointer;

// Re-export core types
pub use paintbox_core;

pub use error::{FillError, FillResult};
pub use flood::{LINE_THRESHOLD, flood_fill, is_line_color};
pub use page::ColoringPage;
pub use pointer::DisplayRect;
