//! End-to-end engine regression test: decode, color, export, reload.

use paintbox::fill::ColoringPage;
use paintbox::io::{read_png, read_png_fit, write_png};
use paintbox::{DisplayRect, Palette, color};
use paintbox_test::{art_color, count_color, surface_from_art};
use std::io::Cursor;

#[test]
fn test_color_a_page_and_export() {
    // A tiny "coloring page": a closed shape on a white background
    let art = surface_from_art(&[
        "WWWWWW",
        "WKKKKW",
        "WKWWKW",
        "WKKKKW",
        "WWWWWW",
    ]);

    // Ship it through PNG like a real asset, at its native resolution
    let mut encoded = Vec::new();
    write_png(&art, &mut encoded).unwrap();
    let source = read_png_fit(Cursor::new(encoded), 6, 5).unwrap();

    let mut page = ColoringPage::new(source);
    let palette = Palette::standard();
    let blue = palette
        .iter()
        .find(|entry| entry.name == "blue")
        .unwrap()
        .value;

    // Tap the interior through a 10x-scaled display rect
    let rect = DisplayRect::new(0.0, 0.0, 60.0, 50.0);
    let filled = page.fill_display(rect, 25.0, 25.0, blue).unwrap();
    assert_eq!(filled, 2);

    // Tapping the outline does nothing
    assert_eq!(page.fill_display(rect, 15.0, 15.0, blue).unwrap(), 0);

    // Export and reload; the colored interior survives, the line art
    // is untouched
    let mut exported = Vec::new();
    write_png(&page.snapshot(), &mut exported).unwrap();
    let reloaded = read_png(Cursor::new(exported)).unwrap();

    assert_eq!(count_color(&reloaded, blue), 2);
    assert_eq!(count_color(&reloaded, art_color('K')), 10);
    assert_eq!(
        reloaded.get_pixel(0, 0),
        Some(color::compose_rgb(255, 255, 255))
    );
}
