//! Paged renderer for tri-color panels.
//!
//! [`PagedRenderer`] owns one panel driver and runs two kinds of render
//! cycle on it:
//!
//! - **Streaming**: [`initialize`](PagedRenderer::initialize), any number of
//!   [`load`](PagedRenderer::load) calls carrying consecutive slices of a
//!   packed image, then [`finalize`](PagedRenderer::finalize). Each page band
//!   is flushed as soon as its bottom-right pixel was written, so the image
//!   may arrive in chunks of any size.
//! - **Static**: [`show_static`](PagedRenderer::show_static) opens and closes
//!   its own session and draws a centered two-plane image once per band.
//!
//! # Session preconditions
//!
//! `initialize` and `finalize` must be paired, and `load` is only meaningful
//! between them. The renderer tracks whether a session is open and logs a
//! warning on misuse, but still forwards the call to the driver: a second
//! `finalize` is not a no-op. Skipping `finalize` leaves the panel powered
//! with its band buffer allocated.
//!
//! # Example
//!
//! ```rust
//! # use embedded_graphics::prelude::Point;
//! # use tricolor_pager::{TriColor, panel::PagedPanel};
//! # struct Driver;
//! # impl PagedPanel for Driver {
//! #     fn width(&self) -> u16 { 8 }
//! #     fn height(&self) -> u16 { 4 }
//! #     fn page_height(&self) -> u16 { 2 }
//! #     fn draw_pixel(&mut self, _: Point, _: TriColor) {}
//! #     fn first_page(&mut self) {}
//! #     fn next_page(&mut self) -> bool { false }
//! #     fn init(&mut self, _: u32) {}
//! #     fn hibernate(&mut self) {}
//! # }
//! use tricolor_pager::config::DisplayConfig;
//! use tricolor_pager::renderer::PagedRenderer;
//!
//! let mut renderer = PagedRenderer::new(Driver, DisplayConfig::default()).unwrap();
//!
//! // 8 x 4 pixels, 4 pixels per byte, delivered in two chunks
//! let image = [0x55u8; 8];
//! renderer.initialize();
//! renderer.load(&image[..3], 0);
//! renderer.load(&image[3..], 3);
//! renderer.finalize();
//! ```

use crate::config::DisplayConfig;
use crate::decode::decode_byte;
use crate::image::StaticImage;
use crate::panel::PagedPanel;
use crate::stream::PixelStream;
use crate::{assets, Error, PanelGeometry, TriColor, PIXELS_PER_BYTE};

use embedded_graphics::primitives::Rectangle;

/// Whether a render session is open on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Panel asleep, no band buffer
    Closed,
    /// Panel powered, page cursor armed
    Open,
}

/// Streams packed images and static screens onto a paged panel
///
/// # Type Parameters
/// - `P`: The panel driver binding
pub struct PagedRenderer<P> {
    panel: P,
    config: DisplayConfig,
    geometry: PanelGeometry,
    state: SessionState,
}

impl<P: PagedPanel> PagedRenderer<P> {
    /// Take ownership of `panel`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if the panel's band height does
    /// not evenly divide its height, or any dimension is zero.
    pub fn new(panel: P, config: DisplayConfig) -> Result<Self, Error> {
        let geometry = panel.geometry();
        geometry.validate()?;
        Ok(Self {
            panel,
            config,
            geometry,
            state: SessionState::Closed,
        })
    }

    /// Panel width in pixels
    #[must_use]
    pub fn width(&self) -> u16 {
        self.geometry.width
    }

    /// Panel height in pixels
    #[must_use]
    pub fn height(&self) -> u16 {
        self.geometry.height
    }

    /// Panel geometry captured at construction
    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// Configuration the renderer was built with
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current session state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Borrow the panel driver
    #[must_use]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Give the panel driver back
    #[must_use]
    pub fn into_inner(self) -> P {
        self.panel
    }

    /// Power up the panel and arm its page cursor at the first band.
    pub fn initialize(&mut self) {
        log::info!("Initializing display");
        if self.state == SessionState::Open {
            log::warn!("Display initialized while a session is open");
        }
        self.panel.init(self.config.serial_speed);
        self.panel.first_page();
        self.state = SessionState::Open;
    }

    /// Draw a chunk of the packed image stream.
    ///
    /// `offset` is the number of bytes (4-pixel groups) of the image that
    /// earlier calls already drew. Consecutive calls must be contiguous:
    /// nothing checks it and a gap shifts the rest of the image. Use
    /// [`PagedRenderer::stream`] to have the offset tracked.
    ///
    /// Whenever the bottom-right pixel of the current band is written the
    /// band is flushed with `next_page`, before the next pixel is drawn.
    pub fn load(&mut self, data: &[u8], offset: u32) {
        log::info!("Loading image data: {} bytes", data.len());
        if self.state == SessionState::Closed {
            log::warn!("Loading image data without an open session");
        }

        for (i, &input) in data.iter().enumerate() {
            // Indices past u32::MAX wrap, the driver clips whatever lands off-panel
            let group = offset.wrapping_add(i as u32);
            for (sub, color) in decode_byte(input).into_iter().enumerate() {
                let index = group
                    .wrapping_mul(PIXELS_PER_BYTE as u32)
                    .wrapping_add(sub as u32);
                self.panel
                    .draw_pixel(self.geometry.point_for_index(index), color);

                if self.geometry.ends_page(index) {
                    log::debug!("Updating display");
                    self.panel.next_page();
                }
            }
        }
    }

    /// Put the panel to sleep and release its band buffer.
    pub fn finalize(&mut self) {
        log::info!("Suspending display");
        if self.state == SessionState::Closed {
            log::warn!("Finalizing display without an open session");
        }
        self.panel.hibernate();
        self.state = SessionState::Closed;
    }

    /// Open a session and start streaming at the first byte of the image.
    ///
    /// The stream does not close the session, call
    /// [`PixelStream::finish`] or [`PagedRenderer::finalize`] when done.
    pub fn stream(&mut self) -> PixelStream<'_, P> {
        self.initialize();
        PixelStream::resume(self, 0)
    }

    /// Run a complete render cycle of `image` centered on its background.
    ///
    /// The image is validated first. An invalid image returns an error
    /// without touching the panel.
    ///
    /// # Errors
    ///
    /// See [`StaticImage::validate`].
    pub fn show_static(&mut self, image: &StaticImage<'_>) -> Result<(), Error> {
        image.validate()?;
        log::info!("Showing static image");

        self.initialize();

        let origin = image.centered_origin(self.geometry.size());
        let area = Rectangle::new(origin, image.size());
        loop {
            self.panel.fill_screen(image.background);
            self.panel.fill_rect(area, TriColor::White);
            self.panel.draw_bitmap(origin, &image.black, TriColor::Black);
            self.panel.draw_bitmap(origin, &image.red, TriColor::Red);
            if !self.panel.next_page() {
                break;
            }
        }

        self.finalize();
        Ok(())
    }

    /// Show the error screen
    ///
    /// # Errors
    ///
    /// See [`PagedRenderer::show_static`].
    pub fn show_error(&mut self) -> Result<(), Error> {
        self.show_static(&assets::ERROR_SCREEN)
    }

    /// Show the wifi setup screen
    ///
    /// # Errors
    ///
    /// See [`PagedRenderer::show_static`].
    pub fn show_wifi_setup(&mut self) -> Result<(), Error> {
        self.show_static(&assets::WIFI_SETUP_SCREEN)
    }
}

impl<P> core::fmt::Debug for PagedRenderer<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagedRenderer")
            .field("geometry", &self.geometry)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
