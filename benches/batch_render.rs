// this_file: benches/batch_render.rs

//! Many posters sharing one font set, sequentially and in parallel

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use posterline::{FontSet, LayoutConfig, Typesetter, Weight};
use rayon::prelude::*;

#[path = "../tests/common/mod.rs"]
mod common;

fn fonts() -> FontSet {
    let loaded = FontSet::load(Weight::Regular);
    if loaded.is_empty() {
        common::poster_fonts()
    } else {
        loaded
    }
}

fn album(i: usize) -> (String, Vec<String>) {
    let title = format!("Album {i}: 夜明けの Sessions Vol. {}", i % 7);
    let tracks = (1..=(8 + i % 12))
        .map(|n| format!("Track {n} - Live at Budokan {}", "!".repeat(n % 5)))
        .collect();
    (title, tracks)
}

fn typeset(typesetter: &Typesetter<'_>, (title, tracks): &(String, Vec<String>)) -> usize {
    let fit = typesetter.fit_heading(title, 1760, 160);
    let layout = typesetter.pack_tracklist(tracks, true);
    fit.size as usize + layout.columns.len()
}

fn bench_parallel_vs_sequential(c: &mut Criterion) {
    let fonts = fonts();
    let albums: Vec<_> = (0..100).map(album).collect();

    let mut group = c.benchmark_group("parallel_comparison");
    group.throughput(Throughput::Elements(albums.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let typesetter = Typesetter::new(&fonts);
            albums
                .iter()
                .map(|album| typeset(&typesetter, black_box(album)))
                .sum::<usize>()
        });
    });

    group.bench_function("parallel_shared", |b| {
        b.iter(|| {
            let typesetter = Typesetter::new(&fonts);
            albums
                .par_iter()
                .map(|album| typeset(&typesetter, black_box(album)))
                .sum::<usize>()
        });
    });

    group.bench_function("parallel_per_poster", |b| {
        b.iter(|| {
            albums
                .par_iter()
                .map(|album| typeset(&Typesetter::new(&fonts), black_box(album)))
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_cache_capacity(c: &mut Criterion) {
    let fonts = fonts();
    let albums: Vec<_> = (0..20).map(album).collect();
    let mut group = c.benchmark_group("cache_capacity");

    for capacity in [1, 64, 4096] {
        let config = LayoutConfig {
            measure_cache_size: capacity,
            ..LayoutConfig::default()
        };
        group.bench_function(format!("capacity_{capacity}"), |b| {
            let typesetter = Typesetter::with_config(&fonts, config.clone());
            b.iter(|| {
                albums
                    .iter()
                    .map(|album| typeset(&typesetter, black_box(album)))
                    .sum::<usize>()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parallel_vs_sequential, bench_cache_capacity);
criterion_main!(benches);
