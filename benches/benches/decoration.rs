// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_decoration::{
    Decoration, DividerStyle, GridSpan, LayoutMetadata, MarginConfig, Orientation, SkipSingleItem,
};

struct Host {
    items: usize,
    columns: u32,
}

impl LayoutMetadata for Host {
    fn item_count(&self) -> usize {
        self.items
    }

    fn orientation(&self) -> Orientation {
        Orientation::Vertical
    }

    fn reverse_layout(&self) -> bool {
        false
    }

    fn column_count(&self) -> Option<u32> {
        Some(self.columns)
    }

    fn span(&self, position: usize) -> Option<GridSpan> {
        // A full-width header every 16 items, single cells otherwise.
        if position % 16 == 0 {
            Some(GridSpan::new(0, self.columns))
        } else {
            let column = (position % 16 - 1) % self.columns as usize;
            Some(GridSpan::single(column as u32))
        }
    }
}

fn decorations(columns: u32) -> Vec<(&'static str, Decoration)> {
    let margins = MarginConfig::uniform(12);
    let divider = MarginConfig::divider(DividerStyle {
        size: 1,
        width_margin: 4,
        height_margin: 8,
    });
    vec![
        ("linear_margin", Decoration::linear_margin(margins)),
        ("grid_margin", Decoration::grid_margin(margins, columns)),
        ("grid_span_margin", Decoration::grid_span_margin(margins)),
        (
            "linear_divider",
            Decoration::linear_divider(divider).with_filter(SkipSingleItem),
        ),
        ("grid_divider", Decoration::grid_divider(divider, columns)),
    ]
}

fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoration/layout_pass");

    for items in [1_000_usize, 100_000] {
        let host = Host { items, columns: 4 };
        group.throughput(Throughput::Elements(items as u64));

        for (name, decoration) in decorations(host.columns) {
            group.bench_with_input(BenchmarkId::new(name, items), &host, |b, host| {
                b.iter(|| {
                    let mut reserved = 0_u64;
                    for position in 0..host.items {
                        let insets = decoration.item_insets(host, Some(position)).unwrap();
                        reserved += u64::from(insets.top + insets.bottom);
                    }
                    black_box(reserved)
                });
            });
        }
    }

    group.finish();
}

fn bench_paint_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoration/paint_pass");

    // Roughly one screen of visible cells.
    let host = Host {
        items: 10_000,
        columns: 4,
    };
    let visible: Vec<(usize, Rect)> = (5_000..5_064)
        .map(|position| {
            let row = (position / 4) as f64;
            let column = (position % 4) as f64;
            (
                position,
                Rect::new(column * 90.0, row * 90.0, column * 90.0 + 90.0, row * 90.0 + 90.0),
            )
        })
        .collect();
    group.throughput(Throughput::Elements(visible.len() as u64));

    for (name, decoration) in decorations(host.columns) {
        if !decoration.kind().is_divider() {
            continue;
        }
        group.bench_function(name, |b| {
            b.iter(|| {
                let rects = decoration
                    .draw_pass(&host, visible.iter().copied())
                    .unwrap();
                black_box(rects)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout_pass, bench_paint_pass);
criterion_main!(benches);
