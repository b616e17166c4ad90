//! Performance benchmarks for sample-array preprocessing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stratum_scope::preprocessing::mid_side::{mid_side, MidSideDirection};
use stratum_scope::preprocessing::silence::trim;
use stratum_scope::{preprocess, PreprocessConfig, SampleArray, Step};

/// 30 seconds of stereo audio at 44.1kHz with a second of silence on each side
///
/// The tone is a cosine so its first frame is loud and trimming leaves exactly
/// 28 seconds of frames.
fn padded_stereo() -> SampleArray {
    let pad = vec![[0.0, 0.0]; 44100];
    let mut frames = pad.clone();
    frames.extend((0..44100 * 28).map(|i| {
        let t = i as f64 / 44100.0;
        let s = (t * 440.0 * 2.0 * std::f64::consts::PI).cos() * 0.5;
        [s, s * 0.8]
    }));
    frames.extend(pad);
    SampleArray::stereo(frames)
}

fn bench_transforms(c: &mut Criterion) {
    let samples = padded_stereo();

    c.bench_function("trim_30s_stereo", |b| {
        b.iter(|| trim(black_box(&samples)));
    });

    c.bench_function("mid_side_encode_30s_stereo", |b| {
        b.iter(|| mid_side(black_box(&samples), MidSideDirection::Encode));
    });
}

fn bench_preprocess(c: &mut Criterion) {
    let samples = padded_stereo();
    let config = PreprocessConfig {
        steps: vec![
            Step::Trim,
            Step::Normalize,
            Step::MidSide {
                direction: MidSideDirection::Encode,
            },
            Step::Reverse { subdivision: 4 },
        ],
        reject_silent: false,
    };

    c.bench_function("preprocess_chain_30s_stereo", |b| {
        b.iter(|| {
            preprocess(black_box(&samples), black_box(44100), black_box(&config))
                .expect("benchmark chain should succeed")
        });
    });
}

criterion_group!(benches, bench_transforms, bench_preprocess);
criterion_main!(benches);
