//! Full-screen static images made of a black and a red plane.

use embedded_graphics::prelude::{Point, Size};

use crate::panel::Bitmap;
use crate::{Error, TriColor};

/// A static image centered on a background
///
/// Both planes cover the same area. Inside it, a pixel is red when set in
/// the red plane, otherwise black when set in the black plane, otherwise
/// white. Outside it the panel shows `background`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticImage<'a> {
    /// Pixels drawn black
    pub black: Bitmap<'a>,
    /// Pixels drawn red, composited over the black plane
    pub red: Bitmap<'a>,
    /// Color around the image
    pub background: TriColor,
}

impl<'a> StaticImage<'a> {
    /// Build an image from two planes of `width` × `height` pixels
    #[must_use]
    pub const fn new(
        black: &'a [u8],
        red: &'a [u8],
        width: u16,
        height: u16,
        background: TriColor,
    ) -> Self {
        Self {
            black: Bitmap::new(black, width, height),
            red: Bitmap::new(red, width, height),
            background,
        }
    }

    /// Image size in pixels
    #[must_use]
    pub const fn size(&self) -> Size {
        self.black.size()
    }

    /// Check both planes agree in size and hold enough bytes
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaneSizeMismatch`] or [`Error::BitmapTooShort`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.black.size() != self.red.size() {
            return Err(Error::PlaneSizeMismatch {
                black: (self.black.width(), self.black.height()),
                red: (self.red.width(), self.red.height()),
            });
        }
        self.black.validate()?;
        self.red.validate()
    }

    /// Top-left corner that centers the image on a `panel` sized screen.
    ///
    /// Odd margins round toward the top-left. An image larger than the panel
    /// gets a negative origin and is clipped evenly on both sides.
    #[must_use]
    pub fn centered_origin(&self, panel: Size) -> Point {
        let x = (panel.width as i32 - i32::from(self.black.width())) / 2;
        let y = (panel.height as i32 - i32::from(self.black.height())) / 2;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::*;

    #[test]
    fn test_centered_origin() {
        let plane = vec![0u8; 100];
        let image = StaticImage::new(&plane, &plane, 40, 20, TriColor::White);
        assert_eq!(image.centered_origin(Size::new(128, 64)), Point::new(44, 22));
    }

    #[test]
    fn test_centered_origin_truncates() {
        let plane = vec![0u8; 4];
        let image = StaticImage::new(&plane, &plane, 3, 3, TriColor::White);
        assert_eq!(image.centered_origin(Size::new(8, 8)), Point::new(2, 2));
    }

    #[test]
    fn test_centered_origin_larger_than_panel() {
        let plane = vec![0u8; 30];
        let image = StaticImage::new(&plane, &plane, 16, 15, TriColor::Red);
        // (10 - 16) / 2 = -3, (10 - 15) / 2 truncates toward zero to -2
        assert_eq!(image.centered_origin(Size::new(10, 10)), Point::new(-3, -2));
    }

    #[test]
    fn test_validate() {
        let plane = vec![0u8; 100];
        let image = StaticImage::new(&plane, &plane, 40, 20, TriColor::White);
        assert_eq!(image.validate(), Ok(()));
        assert_eq!(image.size(), Size::new(40, 20));
    }

    #[test]
    fn test_validate_plane_mismatch() {
        let plane = vec![0u8; 100];
        let image = StaticImage {
            black: Bitmap::new(&plane, 40, 20),
            red: Bitmap::new(&plane, 40, 16),
            background: TriColor::White,
        };
        assert_eq!(
            image.validate(),
            Err(Error::PlaneSizeMismatch {
                black: (40, 20),
                red: (40, 16),
            })
        );
    }

    #[test]
    fn test_validate_short_red_plane() {
        let black = vec![0u8; 100];
        let red = vec![0u8; 60];
        let image = StaticImage::new(&black, &red, 40, 20, TriColor::White);
        assert_eq!(
            image.validate(),
            Err(Error::BitmapTooShort {
                required: 100,
                provided: 60,
            })
        );
    }
}
