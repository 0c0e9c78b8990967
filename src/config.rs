//! Display wiring and power-up configuration

pub use crate::error::BuilderError;

/// Serial speed handed to the panel driver's `init` by default
pub const DEFAULT_SERIAL_SPEED: u32 = 115_200;

/// GPIO assignment of the panel's SPI bus and control lines
///
/// The renderer does not drive these itself. They are carried so the
/// transport binding that builds the panel driver reads them from one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    /// SPI Master In Slave Out
    pub miso: u8,
    /// SPI Clock
    pub sck: u8,
    /// SPI Master Out Slave In
    pub mosi: u8,
    /// Chip Select
    pub cs: u8,
    /// Busy status (high while the controller is busy)
    pub busy: u8,
    /// Reset
    pub rst: u8,
    /// Data/Command select
    pub dc: u8,
}

impl SpiPins {
    /// Wiring of the Waveshare ESP32 e-paper driver board, whose SPI pins
    /// differ from the ESP32 defaults.
    pub const WAVESHARE_ESP32: Self = Self {
        miso: 12,
        sck: 13,
        mosi: 14,
        cs: 15,
        busy: 25,
        rst: 26,
        dc: 27,
    };

    fn as_array(&self) -> [u8; 7] {
        [
            self.miso, self.sck, self.mosi, self.cs, self.busy, self.rst, self.dc,
        ]
    }

    /// First GPIO that is assigned to more than one signal
    #[must_use]
    pub fn find_conflict(&self) -> Option<u8> {
        let pins = self.as_array();
        pins.iter()
            .enumerate()
            .find(|&(i, pin)| pins[i + 1..].contains(pin))
            .map(|(_, pin)| *pin)
    }
}

impl Default for SpiPins {
    fn default() -> Self {
        Self::WAVESHARE_ESP32
    }
}

/// Renderer configuration
///
/// Use [`ConfigBuilder`] to create one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// SPI wiring
    pub pins: SpiPins,
    /// Speed passed to the driver's `init`
    pub serial_speed: u32,
}

impl DisplayConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pins: SpiPins::default(),
            serial_speed: DEFAULT_SERIAL_SPEED,
        }
    }
}

/// Builder for [`DisplayConfig`]
///
/// # Example
///
/// ```
/// use tricolor_pager::config::{DisplayConfig, SpiPins};
///
/// let config = DisplayConfig::builder()
///     .pins(SpiPins { cs: 5, ..SpiPins::WAVESHARE_ESP32 })
///     .serial_speed(9600)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.pins.cs, 5);
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    pins: SpiPins,
    serial_speed: Option<u32>,
}

impl ConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SPI wiring
    pub fn pins(mut self, pins: SpiPins) -> Self {
        self.pins = pins;
        self
    }

    /// Set the speed passed to the driver's `init`
    pub fn serial_speed(mut self, speed: u32) -> Self {
        self.serial_speed = Some(speed);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::PinConflict` if a GPIO is assigned twice and
    /// `BuilderError::InvalidSerialSpeed` for a zero speed.
    pub fn build(self) -> Result<DisplayConfig, BuilderError> {
        if let Some(pin) = self.pins.find_conflict() {
            return Err(BuilderError::PinConflict { pin });
        }
        let serial_speed = self.serial_speed.unwrap_or(DEFAULT_SERIAL_SPEED);
        if serial_speed == 0 {
            return Err(BuilderError::InvalidSerialSpeed);
        }
        Ok(DisplayConfig {
            pins: self.pins,
            serial_speed,
        })
    }
}
