//! Capability interface of a paged tri-color panel driver
//!
//! [`PagedPanel`] is everything the renderer needs from the driver: its
//! geometry, a handful of drawing primitives addressed in full-panel
//! coordinates, the page cursor and power control. The hardware binding
//! (SPI framing, busy waits, command sequencing) lives behind it.
//!
//! Drawing is infallible at this level. Coordinates outside the current
//! page band, or outside the panel, are the driver's to clip.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::{Error, PanelGeometry, TriColor};

/// A paged panel driver
///
/// Only `draw_pixel`, the page cursor, the power calls and the geometry
/// getters are required. The fill and bitmap primitives fall back to
/// `draw_pixel` and should be overridden when the driver can do better.
pub trait PagedPanel {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Rows held by the band buffer
    fn page_height(&self) -> u16;

    /// Set one pixel
    fn draw_pixel(&mut self, point: Point, color: TriColor);

    /// Arm the cursor at the first band
    fn first_page(&mut self);

    /// Flush the current band and advance the cursor.
    ///
    /// Returns `true` while more bands remain.
    fn next_page(&mut self) -> bool;

    /// Power up the controller and allocate the band buffer
    fn init(&mut self, serial_speed: u32);

    /// Enter deep sleep and release the band buffer
    fn hibernate(&mut self);

    /// Geometry as one value
    fn geometry(&self) -> PanelGeometry {
        PanelGeometry::new(self.width(), self.height(), self.page_height())
    }

    /// Fill `area` with `color`
    fn fill_rect(&mut self, area: Rectangle, color: TriColor) {
        for point in area.points() {
            self.draw_pixel(point, color);
        }
    }

    /// Fill the whole panel with `color`
    fn fill_screen(&mut self, color: TriColor) {
        let size = Size::new(u32::from(self.width()), u32::from(self.height()));
        self.fill_rect(Rectangle::new(Point::zero(), size), color);
    }

    /// Draw the set bits of `bitmap` at `origin` in `color`. Clear bits are
    /// left untouched.
    fn draw_bitmap(&mut self, origin: Point, bitmap: &Bitmap<'_>, color: TriColor) {
        for point in bitmap.set_points() {
            self.draw_pixel(origin + point, color);
        }
    }
}

impl<P: PagedPanel + ?Sized> PagedPanel for &mut P {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn height(&self) -> u16 {
        (**self).height()
    }

    fn page_height(&self) -> u16 {
        (**self).page_height()
    }

    fn draw_pixel(&mut self, point: Point, color: TriColor) {
        (**self).draw_pixel(point, color);
    }

    fn first_page(&mut self) {
        (**self).first_page();
    }

    fn next_page(&mut self) -> bool {
        (**self).next_page()
    }

    fn init(&mut self, serial_speed: u32) {
        (**self).init(serial_speed);
    }

    fn hibernate(&mut self) {
        (**self).hibernate();
    }

    fn fill_rect(&mut self, area: Rectangle, color: TriColor) {
        (**self).fill_rect(area, color);
    }

    fn fill_screen(&mut self, color: TriColor) {
        (**self).fill_screen(color);
    }

    fn draw_bitmap(&mut self, origin: Point, bitmap: &Bitmap<'_>, color: TriColor) {
        (**self).draw_bitmap(origin, bitmap, color);
    }
}

/// A 1-bit plane
///
/// Rows are padded to whole bytes, the most significant bit of each byte is
/// the leftmost pixel and a set bit marks a foreground pixel.
///
/// ```text
///                width      unused
///  <------------------------><--->
/// [76543210][76543210]...[76543XXX] ^
/// [76543210][76543210]...[76543XXX] | height
/// [76543210][76543210]...[76543XXX] v
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
}

impl<'a> Bitmap<'a> {
    /// Wrap a plane buffer. The length is checked by [`Bitmap::validate`].
    #[must_use]
    pub const fn new(data: &'a [u8], width: u16, height: u16) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Size in pixels
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }

    /// Raw plane bytes
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes per row
    #[must_use]
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes the plane needs for its dimensions
    #[must_use]
    pub const fn required_len(&self) -> usize {
        self.stride() * self.height as usize
    }

    /// Check the buffer covers the dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::BitmapTooShort`] if it does not.
    pub fn validate(&self) -> Result<(), Error> {
        let required = self.required_len();
        if self.data.len() < required {
            return Err(Error::BitmapTooShort {
                required,
                provided: self.data.len(),
            });
        }
        Ok(())
    }

    /// Whether the pixel at `(x, y)` is set. Out of range reads as clear.
    #[must_use]
    pub fn is_set(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = usize::from(y) * self.stride() + usize::from(x / 8);
        self.data
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }

    /// Offsets of the set pixels, in raster order
    pub fn set_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.is_set(x, y))
                .map(move |x| Point::new(i32::from(x), i32::from(y)))
        })
    }
}
