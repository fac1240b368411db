use coinsearch::cs::combinatorial::min_coin_search::{MinCoinSearch, SearchConfig, SearchOrder};
use coinsearch::cs::dynamic::coin_change::min_coin_count;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const DENOMINATIONS: [u64; 4] = [25, 10, 5, 1];
const AWKWARD_DENOMINATIONS: [u64; 3] = [10, 9, 1];

fn bench_search_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_coin_search_order");

    for target in [37u64, 99, 150] {
        for order in [SearchOrder::LargestFirst, SearchOrder::SmallestFirst] {
            let search = MinCoinSearch::with_config(&DENOMINATIONS, SearchConfig { order }).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", order), target),
                &target,
                |b, &target| b.iter(|| search.solve(black_box(target)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_search_vs_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_coin_search_vs_table");
    let search = MinCoinSearch::new(&AWKWARD_DENOMINATIONS).unwrap();

    for target in [37u64, 80, 160] {
        group.bench_with_input(BenchmarkId::new("branch_and_bound", target), &target, |b, &t| {
            b.iter(|| search.solve(black_box(t)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("table", target), &target, |b, &t| {
            b.iter(|| min_coin_count(&AWKWARD_DENOMINATIONS, black_box(t)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search_orders, bench_search_vs_table);
criterion_main!(benches);
