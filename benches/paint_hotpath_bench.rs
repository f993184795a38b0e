//! Benchmark für die Mal-Hotpaths.
//!
//! Misst die Kosten pro Pointer-Move bzw. pro Store-Änderung:
//! - Index-Aufbau über den gesamten Cell-Store
//! - Rahmenableitung für alle Zellen (Neuzeichnen der Karte)
//! - Diagonal-Pfad-Vorschau entlang einer langen Treppe

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rpg_map_painter::app::tools::diagonal_fill::diagonal_path;
use rpg_map_painter::core::calculate_borders_for;
use rpg_map_painter::{CellCoord, CellGeometry, CellStore, Corner, SegmentName, SegmentSet};
use std::hint::black_box;

/// Schachbrett aus vollen und halb gefüllten Zellen.
fn build_synthetic_store(side: i32) -> CellStore {
    let half = SegmentSet::from_segments(&[
        SegmentName::N,
        SegmentName::Ne,
        SegmentName::E,
        SegmentName::Se,
    ]);
    let mut store = CellStore::new();
    for y in 0..side {
        for x in 0..side {
            let coord = CellCoord::new(x, y);
            if (x + y) % 2 == 0 {
                store.apply_cell(coord, "#444444", None);
            } else {
                store.apply_segments(coord, half, "#888888", Some(0.5));
            }
        }
    }
    store
}

/// Treppe aus `steps` Stufen, deren leere Zellen gültige TL-Ecken sind.
fn build_staircase(steps: i32) -> CellStore {
    let mut store = CellStore::new();
    for i in 0..=steps {
        store.apply_cell(CellCoord::new(steps - i, i), "#aaaaaa", None);
    }
    store
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_index_build");

    for &side in &[32i32, 128, 256] {
        let store = build_synthetic_store(side);
        group.bench_with_input(BenchmarkId::new("build", side * side), &store, |b, store| {
            b.iter(|| black_box(store.index().len()))
        });
    }

    group.finish();
}

fn bench_border_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("border_derivation");
    let geometry = CellGeometry::new(32.0);

    for &side in &[32i32, 128] {
        let store = build_synthetic_store(side);
        let coords: Vec<CellCoord> = store.cells().map(|cell| cell.coord).collect();

        group.bench_with_input(
            BenchmarkId::new("all_cells", side * side),
            &coords,
            |b, coords| {
                let index = store.index();
                b.iter(|| {
                    let borders =
                        calculate_borders_for(black_box(coords).iter().copied(), &index, geometry);
                    black_box(borders.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_diagonal_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagonal_preview");

    for &steps in &[8i32, 64, 512] {
        let store = build_staircase(steps);
        let index = store.index();
        let start = CellCoord::new(steps, 1);
        let target = CellCoord::new(1, steps);

        group.bench_with_input(BenchmarkId::new("path", steps), &target, |b, &target| {
            b.iter(|| {
                let path = diagonal_path(&index, start, Corner::TopLeft, black_box(target));
                black_box(path.len())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_border_derivation,
    bench_diagonal_preview
);
criterion_main!(benches);
