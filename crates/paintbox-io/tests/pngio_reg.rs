//! PNG I/O regression tests

use paintbox_core::{Surface, color};
use paintbox_io::{read_png, read_png_fit, read_surface, write_png, write_surface};
use paintbox_test::{assert_surfaces_eq, surface_from_art};
use std::io::Cursor;

fn encode(surface: &Surface) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_png(surface, &mut bytes).unwrap();
    bytes
}

#[test]
fn test_rgba_roundtrip() {
    let surface = surface_from_art(&[
        "WKRG",
        "BYWK",
    ]);
    // Include a translucent pixel so alpha survives the trip too
    let mut sm = surface.to_mut();
    sm.set_pixel(0, 0, color::compose_rgba(12, 200, 34, 56)).unwrap();
    let surface: Surface = sm.into();

    let decoded = read_png(Cursor::new(encode(&surface))).unwrap();
    assert_surfaces_eq(&decoded, &surface);
}

#[test]
fn test_decode_grayscale_widens_to_rgba() {
    // Encode a 2x1 grayscale PNG directly with the codec
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 200]).unwrap();
        writer.finish().unwrap();
    }

    let decoded = read_png(Cursor::new(bytes)).unwrap();
    assert_eq!(decoded.get_rgba(0, 0), Some((0, 0, 0, 255)));
    assert_eq!(decoded.get_rgba(1, 0), Some((200, 200, 200, 255)));
}

#[test]
fn test_decode_rgb_gets_opaque_alpha() {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 1, 2);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[255, 0, 0, 10, 20, 30]).unwrap();
        writer.finish().unwrap();
    }

    let decoded = read_png(Cursor::new(bytes)).unwrap();
    assert_eq!(decoded.get_rgba(0, 0), Some((255, 0, 0, 255)));
    assert_eq!(decoded.get_rgba(0, 1), Some((10, 20, 30, 255)));
}

#[test]
fn test_decode_indexed_expands_palette() {
    // 2x1 indexed PNG with a two-entry palette
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![255, 255, 255, 0, 0, 0]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 1]).unwrap();
        writer.finish().unwrap();
    }

    let decoded = read_png(Cursor::new(bytes)).unwrap();
    assert_eq!(decoded.get_rgba(0, 0), Some((255, 255, 255, 255)));
    assert_eq!(decoded.get_rgba(1, 0), Some((0, 0, 0, 255)));
}

#[test]
fn test_read_png_fit_resamples_to_target() {
    let surface = surface_from_art(&[
        "WWKK",
        "WWKK",
    ]);

    let fitted = read_png_fit(Cursor::new(encode(&surface)), 2, 1).unwrap();
    assert_eq!(fitted.width(), 2);
    assert_eq!(fitted.height(), 1);
    assert_eq!(fitted.get_pixel(0, 0), Some(color::compose_rgb(255, 255, 255)));
    assert_eq!(fitted.get_pixel(1, 0), Some(color::compose_rgb(0, 0, 0)));
}

#[test]
fn test_truncated_data_is_decode_error() {
    let surface = surface_from_art(&["WK"]);
    let mut bytes = encode(&surface);
    bytes.truncate(bytes.len() / 2);

    assert!(read_png(Cursor::new(bytes)).is_err());
}

#[test]
fn test_path_roundtrip() {
    let surface = surface_from_art(&[
        "RGB",
        "WKY",
    ]);
    let path = std::env::temp_dir().join("paintbox_pngio_reg.png");

    write_surface(&surface, &path).unwrap();
    let decoded = read_surface(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_surfaces_eq(&decoded, &surface);
}
