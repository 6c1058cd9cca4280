use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_containers::{AvlMap, AvlSet};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("map_insert", |b| {
        let mut map = AvlMap::new();
        b.iter(|| {
            for value in &values {
                map.insert(*value, *value);
            }
        })
    });

    let mut map = AvlMap::new();
    for value in &values {
        map.insert(*value, *value);
    }

    c.bench_function("map_get", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.get(value));
            }
        })
    });

    c.bench_function("map_lower_bound", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.lower_bound(&value.wrapping_add(1)).get());
            }
        })
    });

    c.bench_function("map_iter", |b| {
        b.iter(|| {
            for (k, v) in &map {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_cursor_walk_back", |b| {
        b.iter(|| {
            let mut cursor = map.end();
            for _ in 0..map.len() {
                cursor.move_prev();
                black_box(cursor.get());
            }
        })
    });

    c.bench_function("map_remove", |b| {
        let mut map = map.clone();
        b.iter(|| {
            for value in &values {
                map.remove(value);
            }
        })
    });

    let evens: AvlSet<i32> = values.iter().map(|value| value & !1).collect();
    let odds: AvlSet<i32> = values.iter().map(|value| value | 1).collect();

    c.bench_function("set_merge", |b| {
        b.iter(|| {
            let mut set = evens.clone();
            let mut other = odds.clone();
            set.merge(&mut other);
            black_box((set.len(), other.len()));
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
