//! Decoder for the packed 2-bit-per-pixel input stream.
//!
//! Each input byte carries four pixels, most significant pair first:
//!
//! ```text
//!  bit  7 6   5 4   3 2   1 0
//!      [ p0 ][ p1 ][ p2 ][ p3 ]
//! ```
//!
//! The pair values map to colors as `00` black, `01` white, `11` red. The
//! value `10` is not a valid encoding. It does not abort rendering: the pixel
//! is drawn black and a warning naming the value is logged.

use bitfield::bitfield;

use crate::TriColor;

/// A 2-bit pixel code extracted from a packed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PixelCode {
    /// `00`
    Black = 0b00,
    /// `01`
    White = 0b01,
    /// `10`, not produced by any encoder
    Invalid = 0b10,
    /// `11`
    Red = 0b11,
}

impl PixelCode {
    /// Interpret the two low bits of `bits`
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Black,
            0b01 => Self::White,
            0b10 => Self::Invalid,
            _ => Self::Red,
        }
    }

    /// Encoding of a color
    #[must_use]
    pub const fn from_color(color: TriColor) -> Self {
        match color {
            TriColor::Black => Self::Black,
            TriColor::White => Self::White,
            TriColor::Red => Self::Red,
        }
    }

    /// Raw 2-bit value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Location of one pixel inside a packed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelField {
    /// Bits belonging to the pixel
    pub mask: u8,
    /// Right shift that brings the masked bits down to bit 0
    pub shift: u8,
}

/// The four pixel fields of a byte, in raster order
pub const PIXEL_FIELDS: [PixelField; 4] = [
    PixelField {
        mask: 0xC0,
        shift: 6,
    },
    PixelField {
        mask: 0x30,
        shift: 4,
    },
    PixelField {
        mask: 0x0C,
        shift: 2,
    },
    PixelField {
        mask: 0x03,
        shift: 0,
    },
];

/// Map an extracted pixel value to its color.
///
/// Anything other than `00`, `01` and `11` is logged and drawn black.
#[inline]
#[must_use]
pub fn decode_value(value: u8) -> TriColor {
    match value {
        0x0 => TriColor::Black,
        0x1 => TriColor::White,
        0x3 => TriColor::Red,
        _ => {
            log::warn!("Unknown pixel value: {value:#06x}");
            TriColor::Black
        }
    }
}

/// Extract the field selected by `mask`/`shift` from `input` and decode it.
#[inline]
#[must_use]
pub fn decode_field(input: u8, mask: u8, shift: u8) -> TriColor {
    decode_value((input & mask) >> shift)
}

/// Decode the four pixels of one packed byte, in raster order.
#[inline]
#[must_use]
pub fn decode_byte(input: u8) -> [TriColor; 4] {
    PIXEL_FIELDS.map(|field| decode_field(input, field.mask, field.shift))
}

bitfield! {
    /// One packed input byte.
    ///
    /// The bit layout is as follows:
    /// - Bits 7-6: pixel 0 (leftmost)
    /// - Bits 5-4: pixel 1
    /// - Bits 3-2: pixel 2
    /// - Bits 1-0: pixel 3 (rightmost)
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct PackedPixels(u8);
    impl Debug;
    /// Code of the leftmost pixel
    pub pixel0, set_pixel0: 7, 6;
    /// Code of the second pixel
    pub pixel1, set_pixel1: 5, 4;
    /// Code of the third pixel
    pub pixel2, set_pixel2: 3, 2;
    /// Code of the rightmost pixel
    pub pixel3, set_pixel3: 1, 0;
}

impl PackedPixels {
    /// Wrap a raw input byte
    #[must_use]
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// Pack four colors, leftmost first
    #[must_use]
    pub fn pack(colors: [TriColor; 4]) -> Self {
        let [p0, p1, p2, p3] = colors.map(|color| PixelCode::from_color(color).bits());
        let mut packed = Self::default();
        packed.set_pixel0(p0);
        packed.set_pixel1(p1);
        packed.set_pixel2(p2);
        packed.set_pixel3(p3);
        packed
    }

    /// Raw byte as it appears in the stream
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Pixel codes, leftmost first
    #[must_use]
    pub fn codes(&self) -> [PixelCode; 4] {
        [self.pixel0(), self.pixel1(), self.pixel2(), self.pixel3()].map(PixelCode::from_bits)
    }

    /// Decoded colors, leftmost first
    #[must_use]
    pub fn colors(&self) -> [TriColor; 4] {
        [self.pixel0(), self.pixel1(), self.pixel2(), self.pixel3()].map(decode_value)
    }
}
