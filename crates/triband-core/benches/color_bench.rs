//! Criterion benchmarks for knob feedback color math
//!
//! Run with: cargo bench -p triband-core
#![allow(missing_docs)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use triband_core::{
    EqParam, MID_FREQ_MAX_HZ, MID_FREQ_MIN_HZ, Palette, ParameterState, Rgba, color_bright,
    color_mid,
};

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    let base = Rgba::from_hsv(2.04 / 3.6, 0.83, 0.64);
    group.bench_function("color_bright", |b| {
        b.iter(|| black_box(color_bright(black_box(base), black_box(6.5))));
    });

    let low = Rgba::from_hsv(0.03 / 3.6, 0.76, 0.44);
    let mid = Rgba::from_hsv(1.6 / 3.6, 0.77, 0.44);
    let high = Rgba::from_hsv(2.04 / 3.6, 0.83, 0.44);
    group.bench_function("color_mid_sweep", |b| {
        b.iter(|| {
            let mut f = MID_FREQ_MIN_HZ;
            while f < MID_FREQ_MAX_HZ {
                black_box(color_mid(low, mid, high, black_box(f)));
                f *= 1.05;
            }
        });
    });

    // One frame's worth of knob colors
    let palette = Palette::default();
    let state = ParameterState::default();
    group.bench_function("feedback_frame", |b| {
        b.iter(|| {
            for param in EqParam::ALL {
                black_box(palette.feedback_colors(param, black_box(&state)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
