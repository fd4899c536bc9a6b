// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hot-path benchmarks: one pipeline run, and range compression.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use overstory_anchor::middleware::{Arrow, Flip, Offset, PositionInput, Shift, compute_position};
use overstory_pagination::compress_range;

fn pipeline(c: &mut Criterion) {
    let reference = [Rect::new(700.0, 500.0, 760.0, 530.0)];
    let input = PositionInput {
        reference: &reference,
        floating: Size::new(240.0, 180.0),
        placement: "bottom-start".parse().unwrap(),
        boundary: Rect::new(0.0, 0.0, 1280.0, 640.0),
        pointer: None,
    };
    let arrow = Arrow {
        size: 12.0,
        padding: 4.0,
    };

    c.bench_function("compute_position/offset_flip_shift_arrow", |b| {
        b.iter(|| {
            compute_position(
                black_box(&input),
                &[&Offset(8.0), &Flip, &Shift::default(), &arrow],
            )
        });
    });
}

fn pagination(c: &mut Criterion) {
    c.bench_function("compress_range/1000_pages", |b| {
        b.iter(|| compress_range(black_box(1_000), black_box(500), 2, 1));
    });
}

criterion_group!(benches, pipeline, pagination);
criterion_main!(benches);
