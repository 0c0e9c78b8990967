// Run with: cargo bench --bench load_stream

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use embedded_graphics::prelude::Point;
use std::hint::black_box;
use std::time::Duration;
use tricolor_pager::config::DisplayConfig;
use tricolor_pager::panel::PagedPanel;
use tricolor_pager::renderer::PagedRenderer;
use tricolor_pager::{compute_stream_len, TriColor};

const WIDTH: u16 = 400;
const HEIGHT: u16 = 300;
const PAGE_HEIGHT: u16 = 100;
const STREAM_LEN: usize = compute_stream_len(WIDTH, HEIGHT);

/// Panel that only keeps enough state to stop the optimizer
#[derive(Default)]
struct NullPanel {
    checksum: u32,
    pages: u32,
}

impl PagedPanel for NullPanel {
    fn width(&self) -> u16 {
        WIDTH
    }

    fn height(&self) -> u16 {
        HEIGHT
    }

    fn page_height(&self) -> u16 {
        PAGE_HEIGHT
    }

    fn draw_pixel(&mut self, point: Point, color: TriColor) {
        self.checksum = self
            .checksum
            .wrapping_add(point.x as u32 ^ point.y as u32 ^ color as u32);
    }

    fn first_page(&mut self) {
        self.pages = 0;
    }

    fn next_page(&mut self) -> bool {
        self.pages += 1;
        self.pages < u32::from(HEIGHT / PAGE_HEIGHT)
    }

    fn init(&mut self, _serial_speed: u32) {}

    fn hibernate(&mut self) {}
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
}

// Network reads hand over chunks of very different sizes
const CHUNK_SIZES: &[usize] = &[64, 1024, STREAM_LEN];

fn load_stream(c: &mut Criterion) {
    // Cycle through all valid codes so every decode branch is taken
    let image: Vec<u8> = (0..STREAM_LEN)
        .map(|i| [0b00_01_11_00, 0b01_11_00_01, 0b11_00_01_11][i % 3])
        .collect();

    let mut group = c.benchmark_group("load_stream");
    group.throughput(Throughput::Elements(u64::from(WIDTH) * u64::from(HEIGHT)));

    for &chunk_size in CHUNK_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                let mut renderer =
                    PagedRenderer::new(NullPanel::default(), DisplayConfig::default()).unwrap();
                b.iter(|| {
                    let mut stream = renderer.stream();
                    for chunk in image.chunks(chunk_size) {
                        stream.push(black_box(chunk));
                    }
                    stream.finish();
                });
                black_box(renderer.panel().checksum);
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = load_stream
}
criterion_main!(benches);
