// Run with: cargo bench --bench show_static

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use embedded_graphics::prelude::Point;
use std::hint::black_box;
use tricolor_pager::config::DisplayConfig;
use tricolor_pager::panel::PagedPanel;
use tricolor_pager::renderer::PagedRenderer;
use tricolor_pager::TriColor;

/// Panel that relies on the default fill and bitmap primitives
struct NullPanel {
    page_height: u16,
    page: u16,
    drawn: u64,
}

impl PagedPanel for NullPanel {
    fn width(&self) -> u16 {
        400
    }

    fn height(&self) -> u16 {
        300
    }

    fn page_height(&self) -> u16 {
        self.page_height
    }

    fn draw_pixel(&mut self, point: Point, _color: TriColor) {
        // Only pixels inside the band survive, like on a real driver
        let top = i32::from(self.page * self.page_height);
        if point.y >= top && point.y < top + i32::from(self.page_height) {
            self.drawn += 1;
        }
    }

    fn first_page(&mut self) {
        self.page = 0;
    }

    fn next_page(&mut self) -> bool {
        self.page += 1;
        self.page < 300 / self.page_height
    }

    fn init(&mut self, _serial_speed: u32) {}

    fn hibernate(&mut self) {}
}

fn show_static(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_static");

    for page_height in [10u16, 50, 300] {
        group.bench_with_input(
            BenchmarkId::new("error_screen", page_height),
            &page_height,
            |b, &page_height| {
                let panel = NullPanel {
                    page_height,
                    page: 0,
                    drawn: 0,
                };
                let mut renderer = PagedRenderer::new(panel, DisplayConfig::default()).unwrap();
                b.iter(|| black_box(&mut renderer).show_error().unwrap());
                black_box(renderer.panel().drawn);
            },
        );
    }

    group.finish();
}

criterion_group!(benches, show_static);
criterion_main!(benches);
