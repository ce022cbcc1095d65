//! Performance benchmarks for the preprocessing pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stratum_prep::io::sampler::sample;
use stratum_prep::preprocessing::filter::low_pass;
use stratum_prep::preprocessing::resample::resample;
use stratum_prep::{Pipeline, PipelineConfig};

fn synth_bytes(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (128.0 + 100.0 * (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 16000.0).sin()) as u8)
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    // 30 seconds of 8-bit audio at 16 kHz
    let bytes = synth_bytes(16000 * 30);
    let pipeline = Pipeline::new(PipelineConfig::default());

    c.bench_function("pipeline_30s", |b| {
        b.iter(|| {
            let _ = pipeline.process(black_box(&bytes));
        });
    });
}

fn bench_stages(c: &mut Criterion) {
    let buffer = sample(&synth_bytes(16000 * 30), 16000).expect("valid sample rate");

    c.bench_function("resample_16k_to_48k_30s", |b| {
        b.iter(|| {
            let _ = resample(black_box(buffer.clone()), 48000);
        });
    });

    c.bench_function("low_pass_30s", |b| {
        b.iter(|| {
            let _ = low_pass(black_box(buffer.clone()), 4000.0);
        });
    });
}

criterion_group!(benches, bench_pipeline, bench_stages);
criterion_main!(benches);
