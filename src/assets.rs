//! Baked-in status screens.
//!
//! Two 32 × 32 icons shown when there is no image to stream: an error
//! triangle on a red background and a wifi symbol on white, for when the
//! device waits to be put on a network.

use crate::image::StaticImage;
use crate::TriColor;

/// Width of the status icons in pixels
pub const ICON_WIDTH: u16 = 32;
/// Height of the status icons in pixels
pub const ICON_HEIGHT: u16 = 32;

/// Warning triangle
#[rustfmt::skip]
const ERROR_BLACK: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x06, 0x60, 0x00,
    0x00, 0x06, 0x60, 0x00,
    0x00, 0x0C, 0x30, 0x00,
    0x00, 0x0C, 0x30, 0x00,
    0x00, 0x18, 0x18, 0x00,
    0x00, 0x30, 0x0C, 0x00,
    0x00, 0x30, 0x0C, 0x00,
    0x00, 0x60, 0x06, 0x00,
    0x00, 0x60, 0x06, 0x00,
    0x00, 0xC0, 0x03, 0x00,
    0x00, 0xC0, 0x03, 0x00,
    0x01, 0x80, 0x01, 0x80,
    0x01, 0x80, 0x01, 0x80,
    0x03, 0x00, 0x00, 0xC0,
    0x06, 0x00, 0x00, 0x60,
    0x06, 0x00, 0x00, 0x60,
    0x0C, 0x00, 0x00, 0x30,
    0x0C, 0x00, 0x00, 0x30,
    0x18, 0x00, 0x00, 0x18,
    0x1F, 0xFF, 0xFF, 0xF8,
    0x3F, 0xFF, 0xFF, 0xFC,
    0x3F, 0xFF, 0xFF, 0xFC,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Exclamation mark
#[rustfmt::skip]
const ERROR_RED: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Signal arcs
#[rustfmt::skip]
const WIFI_BLACK: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0xFF, 0xFF, 0x00,
    0x03, 0xFF, 0xFF, 0xC0,
    0x0F, 0xC0, 0x03, 0xF0,
    0x1F, 0x00, 0x00, 0xF8,
    0x3C, 0x00, 0x00, 0x3C,
    0x78, 0x0F, 0xF0, 0x1E,
    0x20, 0x7F, 0xFE, 0x04,
    0x00, 0xFF, 0xFF, 0x00,
    0x03, 0xE0, 0x07, 0xC0,
    0x07, 0x80, 0x01, 0xE0,
    0x03, 0x00, 0x00, 0xC0,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x38, 0x1C, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Access point dot
#[rustfmt::skip]
const WIFI_RED: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x01, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Shown after a failed update
pub const ERROR_SCREEN: StaticImage<'static> = StaticImage::new(
    &ERROR_BLACK,
    &ERROR_RED,
    ICON_WIDTH,
    ICON_HEIGHT,
    TriColor::Red,
);

/// Shown while the device waits for wifi credentials
pub const WIFI_SETUP_SCREEN: StaticImage<'static> = StaticImage::new(
    &WIFI_BLACK,
    &WIFI_RED,
    ICON_WIDTH,
    ICON_HEIGHT,
    TriColor::White,
);
