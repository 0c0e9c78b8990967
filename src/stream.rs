//! Offset tracking for chunked image streams.
//!
//! [`PagedRenderer::load`] takes the number of bytes already drawn as an
//! argument and trusts it. A [`PixelStream`] keeps that count itself, so
//! chunks pushed through it are always contiguous.

use crate::panel::PagedPanel;
use crate::renderer::PagedRenderer;

/// A packed image being streamed onto the panel
///
/// Created with [`PagedRenderer::stream`], which also opens the session.
pub struct PixelStream<'r, P> {
    renderer: &'r mut PagedRenderer<P>,
    consumed: u32,
}

impl<'r, P: PagedPanel> PixelStream<'r, P> {
    /// Continue a stream whose first `consumed` bytes were already drawn.
    ///
    /// The session must already be open.
    pub fn resume(renderer: &'r mut PagedRenderer<P>, consumed: u32) -> Self {
        Self { renderer, consumed }
    }

    /// Draw the next chunk of the image
    pub fn push(&mut self, data: &[u8]) {
        self.renderer.load(data, self.consumed);
        self.consumed = self.consumed.wrapping_add(data.len() as u32);
    }

    /// Bytes drawn so far
    #[must_use]
    pub fn consumed(&self) -> u32 {
        self.consumed
    }

    /// Bytes still needed to cover the panel
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.renderer
            .geometry()
            .stream_len()
            .saturating_sub(self.consumed as usize)
    }

    /// Whether the full panel has been drawn
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Close the session
    pub fn finish(self) {
        if !self.is_complete() {
            log::warn!(
                "Finishing image stream with {} bytes missing",
                self.remaining()
            );
        }
        self.renderer.finalize();
    }
}
