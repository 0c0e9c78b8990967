//! Test doubles: a recording panel and a capturing logger.

extern crate std;

use core::cell::RefCell;
use std::format;
use std::string::String;
use std::sync::Once;
use std::vec::Vec;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::panel::{Bitmap, PagedPanel};
use crate::{PanelGeometry, TriColor};

/// Every call a [`MockPanel`] received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Init(u32),
    FirstPage,
    Pixel(Point, TriColor),
    FillRect(Rectangle, TriColor),
    FillScreen(TriColor),
    Bitmap(Point, Size, TriColor),
    NextPage,
    Hibernate,
}

/// Panel that records calls and tracks its page cursor.
///
/// Pixel writes whose row falls outside the current band are counted as out
/// of band, which is what a real driver would silently clip.
pub struct MockPanel {
    geometry: PanelGeometry,
    events: Vec<PanelEvent>,
    page: u16,
    out_of_band: usize,
}

impl MockPanel {
    pub fn new(geometry: PanelGeometry) -> Self {
        Self {
            geometry,
            events: Vec::new(),
            page: 0,
            out_of_band: 0,
        }
    }

    pub fn events(&self) -> &[PanelEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn count(&self, matches: impl Fn(&PanelEvent) -> bool) -> usize {
        self.events.iter().filter(|e| matches(e)).count()
    }

    pub fn pixels(&self) -> Vec<(Point, TriColor)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                PanelEvent::Pixel(p, c) => Some((p, c)),
                _ => None,
            })
            .collect()
    }

    /// Number of pixels written before each flush
    pub fn flush_points(&self) -> Vec<usize> {
        let mut written = 0;
        let mut flushes = Vec::new();
        for event in &self.events {
            match event {
                PanelEvent::Pixel(..) => written += 1,
                PanelEvent::NextPage => flushes.push(written),
                _ => {}
            }
        }
        flushes
    }

    pub fn page(&self) -> u16 {
        self.page
    }

    pub fn out_of_band(&self) -> usize {
        self.out_of_band
    }
}

impl PagedPanel for MockPanel {
    fn width(&self) -> u16 {
        self.geometry.width
    }

    fn height(&self) -> u16 {
        self.geometry.height
    }

    fn page_height(&self) -> u16 {
        self.geometry.page_height
    }

    fn draw_pixel(&mut self, point: Point, color: TriColor) {
        let top = i32::from(self.page) * i32::from(self.geometry.page_height);
        if point.y < top || point.y >= top + i32::from(self.geometry.page_height) {
            self.out_of_band += 1;
        }
        self.events.push(PanelEvent::Pixel(point, color));
    }

    fn first_page(&mut self) {
        self.page = 0;
        self.events.push(PanelEvent::FirstPage);
    }

    fn next_page(&mut self) -> bool {
        self.page += 1;
        self.events.push(PanelEvent::NextPage);
        self.page < self.geometry.page_count()
    }

    fn init(&mut self, serial_speed: u32) {
        self.events.push(PanelEvent::Init(serial_speed));
    }

    fn hibernate(&mut self) {
        self.events.push(PanelEvent::Hibernate);
    }

    fn fill_rect(&mut self, area: Rectangle, color: TriColor) {
        self.events.push(PanelEvent::FillRect(area, color));
    }

    fn fill_screen(&mut self, color: TriColor) {
        self.events.push(PanelEvent::FillScreen(color));
    }

    fn draw_bitmap(&mut self, origin: Point, bitmap: &Bitmap<'_>, color: TriColor) {
        self.events.push(PanelEvent::Bitmap(origin, bitmap.size(), color));
    }
}

std::thread_local! {
    static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Keeps warning records per test thread
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn {
            WARNINGS.with(|w| w.borrow_mut().push(format!("{}", record.args())));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub fn init_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

/// Warnings logged on this thread since the last call
pub fn take_warnings() -> Vec<String> {
    WARNINGS.with(RefCell::take)
}
