//! Paged streaming renderer for tri-color (black/white/red) e-paper panels.
//!
//! ## How paged e-paper drivers work
//!
//! A tri-color panel needs two bits of state per pixel (a black/white plane
//! and a red plane). A 400 × 300 panel therefore wants 30 KB of framebuffer,
//! which is more RAM than a small microcontroller can spare next to a network
//! stack. Paged panel drivers solve this by buffering only a horizontal band
//! of `page_height` rows at a time:
//!
//! 1. `first_page()` arms the driver's cursor at band 0 and clears the band
//!    buffer.
//! 2. The caller draws in full-panel coordinates. Only the pixels that fall
//!    inside the current band are kept, everything else is clipped.
//! 3. `next_page()` ships the band to the controller RAM and moves the cursor
//!    down one band. It returns `false` once the last band was sent.
//!
//! The consequence for a streaming source is strict: pixels must arrive in
//! raster order, and the band must be flushed right after its bottom-right
//! pixel was written. Flushing earlier drops the rest of the band; flushing
//! later writes the next rows outside the buffered band.
//!
//! ## Input format
//!
//! Streamed images are packed at two bits per pixel, four pixels per byte,
//! most significant pair first:
//!
//! | bits | pixel code | color |
//! |------|------------|-------|
//! | `00` | 0          | black |
//! | `01` | 1          | white |
//! | `11` | 3          | red   |
//! | `10` | 2          | *invalid*, rendered black and logged |
//!
//! See [`decode`] for the decoder and [`renderer::PagedRenderer::load`] for
//! the raster mapping.
//!
//! ## Usage
//!
//! Implement [`panel::PagedPanel`] for the concrete driver binding, build a
//! [`renderer::PagedRenderer`] over it and either stream an image with
//! [`renderer::PagedRenderer::stream`] or show one of the full-screen
//! [`image::StaticImage`]s.
//!
//! ## Available Feature Flags
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the public value types so they can be
//! emitted with the `defmt` logging framework. No functional changes.
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::{Point, Size};

pub mod assets;
pub mod config;
pub mod decode;
pub mod error;
pub mod image;
pub mod panel;
pub mod renderer;
pub mod stream;

#[cfg(test)]
mod testing;

pub use error::{BuilderError, Error};

/// Number of pixels packed into one input byte
pub const PIXELS_PER_BYTE: usize = 4;

/// The three colors a tri-color panel can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriColor {
    /// Black ink
    Black,
    /// No ink
    White,
    /// Red (chromatic) ink
    Red,
}

impl PixelColor for TriColor {
    type Raw = ();
}

/// Computes the number of page bands a panel is flushed in
///
/// # Arguments
///
/// * `height` - Panel height in rows
/// * `page_height` - Rows buffered per band
///
/// # Returns
///
/// Number of bands, or 0 for a zero `page_height`
#[must_use]
pub const fn compute_page_count(height: u16, page_height: u16) -> u16 {
    if page_height == 0 {
        0
    } else {
        height / page_height
    }
}

/// Computes the packed stream length in bytes of a full-panel image
///
/// # Arguments
///
/// * `width` - Panel width in pixels
/// * `height` - Panel height in pixels
#[must_use]
pub const fn compute_stream_len(width: u16, height: u16) -> usize {
    width as usize * height as usize / PIXELS_PER_BYTE
}

/// Panel dimensions as reported by the driver
///
/// Fixed for the lifetime of a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelGeometry {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Rows held by the driver's band buffer
    pub page_height: u16,
}

impl PanelGeometry {
    /// Create a geometry without validating it
    #[must_use]
    pub const fn new(width: u16, height: u16, page_height: u16) -> Self {
        Self {
            width,
            height,
            page_height,
        }
    }

    /// Check that the geometry can be streamed into.
    ///
    /// Every dimension must be non-zero and `page_height` must divide
    /// `height`, otherwise the last band would never see its bottom-right
    /// pixel and would never be flushed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] when one of the above fails.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0
            || self.height == 0
            || self.page_height == 0
            || self.height % self.page_height != 0
        {
            return Err(Error::InvalidGeometry {
                width: self.width,
                height: self.height,
                page_height: self.page_height,
            });
        }
        Ok(())
    }

    /// Full panel size
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }

    /// Number of page bands
    #[must_use]
    pub const fn page_count(&self) -> u16 {
        compute_page_count(self.height, self.page_height)
    }

    /// Total number of pixels on the panel
    #[must_use]
    pub const fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Number of packed bytes that cover the full panel
    #[must_use]
    pub const fn stream_len(&self) -> usize {
        compute_stream_len(self.width, self.height)
    }

    /// Map a linear raster index to panel coordinates (row-major).
    #[inline]
    #[must_use]
    pub fn point_for_index(&self, index: u32) -> Point {
        let width = u32::from(self.width);
        Point::new((index % width) as i32, (index / width) as i32)
    }

    /// Whether the pixel at `index` is the bottom-right pixel of a band.
    #[inline]
    #[must_use]
    pub fn ends_page(&self, index: u32) -> bool {
        let width = u32::from(self.width);
        let page_height = u32::from(self.page_height);
        index % width == width - 1 && (index / width) % page_height == page_height - 1
    }
}
