//! Error types for the renderer
//!
//! - [`BuilderError`] - Errors while building a [`DisplayConfig`](crate::config::DisplayConfig)
//! - [`Error`] - Errors rejected before any panel call is made
//!
//! Nothing on the streaming path returns an error. Anomalies there are either
//! logged (unknown pixel codes) or left to the panel driver (out-of-range
//! coordinates).

/// Errors detected before the panel is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The panel reports a geometry that cannot be streamed into
    ///
    /// All dimensions must be non-zero and `page_height` must divide `height`.
    InvalidGeometry {
        /// Reported width
        width: u16,
        /// Reported height
        height: u16,
        /// Reported band height
        page_height: u16,
    },
    /// The black and red planes of a static image differ in size
    PlaneSizeMismatch {
        /// Black plane `(width, height)`
        black: (u16, u16),
        /// Red plane `(width, height)`
        red: (u16, u16),
    },
    /// A bitmap buffer is shorter than its dimensions require
    BitmapTooShort {
        /// Required length in bytes
        required: usize,
        /// Provided length in bytes
        provided: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidGeometry {
                width,
                height,
                page_height,
            } => write!(
                f,
                "Invalid panel geometry {width}x{height} with page height {page_height}"
            ),
            Error::PlaneSizeMismatch { black, red } => write!(
                f,
                "Plane size mismatch: black {}x{}, red {}x{}",
                black.0, black.1, red.0, red.1
            ),
            Error::BitmapTooShort { required, provided } => write!(
                f,
                "Bitmap too short: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for Error {}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuilderError {
    /// The same GPIO is assigned to two SPI signals
    PinConflict {
        /// The GPIO number used twice
        pin: u8,
    },
    /// Serial speed must be non-zero
    InvalidSerialSpeed,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::PinConflict { pin } => {
                write!(f, "GPIO {pin} is assigned to more than one signal")
            }
            BuilderError::InvalidSerialSpeed => write!(f, "Serial speed must be non-zero"),
        }
    }
}

impl core::error::Error for BuilderError {}
