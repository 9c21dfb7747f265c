use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ledger::{
    portfolio_snapshot, InstrumentTable, Ledger, OrderKind, OrderRequest, Side,
};

fn request(symbol: &str, side: Side, qty: f64) -> OrderRequest {
    OrderRequest {
        symbol: symbol.to_string(),
        side,
        qty,
        kind: OrderKind::Market,
        limit_price: None,
    }
}

fn bench_execute(c: &mut Criterion) {
    let instruments = InstrumentTable::nepse();
    let mut group = c.benchmark_group("execute");

    for &rounds in [100, 1_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("buy_sell_cycle", rounds),
            &rounds,
            |b, &rounds| {
                b.iter(|| {
                    let mut ledger = Ledger::default();
                    for _ in 0..rounds {
                        black_box(
                            ledger.execute(&request("NABIL", Side::Buy, 10.0), &instruments),
                        )
                        .ok();
                        black_box(
                            ledger.execute(&request("NABIL", Side::Sell, 10.0), &instruments),
                        )
                        .ok();
                    }
                })
            },
        );
    }

    // Rejections short-circuit in the validation chain
    group.bench_function("rejected_oversell", |b| {
        let mut ledger = Ledger::default();
        b.iter(|| black_box(ledger.execute(&request("NABIL", Side::Sell, 10.0), &instruments)))
    });

    group.finish();
}

fn bench_snapshots(c: &mut Criterion) {
    let instruments = InstrumentTable::nepse();
    let mut group = c.benchmark_group("snapshots");

    // Populate every symbol and a full history before timing reads
    let mut ledger = Ledger::default();
    let symbols: Vec<String> = instruments
        .instruments()
        .iter()
        .map(|i| i.symbol.clone())
        .collect();
    for _ in 0..5 {
        for symbol in &symbols {
            ledger
                .execute(&request(symbol, Side::Buy, 2.0), &instruments)
                .unwrap();
        }
    }

    group.bench_function("portfolio_snapshot", |b| {
        b.iter(|| black_box(portfolio_snapshot(&ledger, &instruments)))
    });

    group.bench_function("market_snapshot", |b| {
        b.iter(|| black_box(ledger::market_snapshot(&instruments)))
    });

    group.finish();
}

criterion_group!(benches, bench_execute, bench_snapshots);
criterion_main!(benches);
