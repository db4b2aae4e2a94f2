//! paintbox-io - Surface acquisition and export
//!
//! Loads PNG line-art into RGBA surfaces (optionally resampled to the
//! fixed page resolution) and exports colored surfaces back to PNG for
//! save/share.
//!
//! # Examples
//!
//! ```no_run
//! use paintbox_io::{read_surface, write_surface};
//!
//! let page = read_surface("lion.png").unwrap();
//! // ... color it ...
//! write_surface(&page, "lion-colored.png").unwrap();
//! ```

pub mod error;
pub mod png;
pub mod resample;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};
pub use resample::{read_png_fit, sample_to_size};

use paintbox_core::Surface;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG file into an RGBA surface.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn read_surface<P: AsRef<Path>>(path: P) -> IoResult<Surface> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Read a PNG file and bring it to the given page resolution.
pub fn read_surface_fit<P: AsRef<Path>>(path: P, width: u32, height: u32) -> IoResult<Surface> {
    let file = File::open(path)?;
    read_png_fit(BufReader::new(file), width, height)
}

/// Write a surface to a PNG file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn write_surface<P: AsRef<Path>>(surface: &Surface, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(surface, BufWriter::new(file))
}
