use arclist::core::marker::{Directed, EdgeKind, Undirected};
use arclist::prelude::*;
use arclist::storage::AdjList;
use fastrand::Rng;

const RANDOM_SEED: u64 = 0xab1cd20de25;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 500], types = [Directed, Undirected], args = [0.05, 0.5])]
fn add_remove<const N: usize, K: EdgeKind>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = AdjList::<u32, i64, K>::new();

    graph.ensure_vertices(0..N as u32);

    let target = ((N * N) as f32 * density) as usize;

    for _ in 0..target {
        let u = rng.u32(0..N as u32);
        let v = rng.u32(0..N as u32);
        graph.add_weighted_edges([(u, v, rng.i64(-100..100))]);
    }

    for _ in 0..N / 4 {
        graph.remove_vertices([rng.u32(0..N as u32)]);
    }

    for _ in 0..target / 4 {
        let u = rng.u32(0..N as u32);
        let v = rng.u32(0..N as u32);
        graph.remove_edges([(u, v)]);
    }
}

#[divan::bench(consts = [100, 500], types = [Directed, Undirected], args = [0.05, 0.5])]
fn enumerate<const N: usize, K: EdgeKind>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = AdjList::<u32, i64, K>::new();

    graph.ensure_vertices(0..N as u32);

    let target = ((N * N) as f32 * density) as usize;

    for _ in 0..target {
        let u = rng.u32(0..N as u32);
        let v = rng.u32(0..N as u32);
        graph.add_weighted_edges([(u, v, rng.i64(-100..100))]);
    }

    bencher.bench_local(|| {
        let mut edges = 0usize;
        graph.each_weighted_edge(|_| {
            edges += 1;
            false
        });
        divan::black_box(edges)
    });
}
