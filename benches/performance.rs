// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for PRODKIT
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Key detection scan throughput (the 96-candidate search)
//! - Chord construction
//! - Tap session BPM recomputation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use prodkit::analysis::detect_key;
use prodkit::music::{Chord, ChordQuality, Note};
use prodkit::timing::TapSession;

/// Benchmark the exhaustive key detection scan
fn bench_detect_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_key");

    let triad = [Note::C, Note::E, Note::G];
    let naturals = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
    ];

    group.bench_with_input(BenchmarkId::new("notes", 3), &triad[..], |b, notes| {
        b.iter(|| detect_key(black_box(notes)))
    });
    group.bench_with_input(BenchmarkId::new("notes", 7), &naturals[..], |b, notes| {
        b.iter(|| detect_key(black_box(notes)))
    });

    group.finish();
}

/// Benchmark chord construction across the full catalog
fn bench_build_chords(c: &mut Criterion) {
    c.bench_function("build_all_chords", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for root in Note::ALL {
                for quality in ChordQuality::ALL {
                    count += Chord::build(black_box(root), quality).notes().len();
                }
            }
            black_box(count)
        })
    });
}

/// Benchmark tap session updates with a long tap history
fn bench_tap_session(c: &mut Criterion) {
    c.bench_function("tap_session_64_taps", |b| {
        b.iter(|| {
            let mut session = TapSession::new();
            let mut t = 0u64;
            for _ in 0..64 {
                session.tap(black_box(t));
                t += 500;
            }
            black_box(session.bpm())
        })
    });
}

criterion_group!(benches, bench_detect_key, bench_build_chords, bench_tap_session);
criterion_main!(benches);
