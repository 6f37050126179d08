//! Commit engine throughput at roster sizes well past interactive scale.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use relink_widgets::commit::apply_pairings;
use relink_widgets::item::{Item, ItemId};
use relink_widgets::session::Pairing;

fn roster(start: u64, len: u64) -> Vec<Item> {
    (start..start + len)
        .map(|id| Item::new(id, format!("item-{id}"), id as i64, "bench"))
        .collect()
}

fn bench_apply_pairings(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_pairings");
    for &n in &[100u64, 1_000, 10_000] {
        let left = roster(0, n);
        let right = roster(n, n);
        // Pair every other item across the batch.
        let pairings: Vec<Pairing> = (0..n / 2)
            .map(|i| Pairing {
                left: ItemId(i * 2),
                right: ItemId(n + i * 2),
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| apply_pairings(black_box(&pairings), black_box(&left), black_box(&right)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_apply_pairings);
criterion_main!(benches);
