use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rust_decimal::Decimal;
use rusty_ledger::{FixedClock, Money, Transaction, TransactionStore};

const RECORDS: i32 = 1_000;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn transactions() -> Vec<Transaction> {
    (0..RECORDS)
        .map(|id| Transaction {
            id,
            money: Money::new(Decimal::from(id), "EUR"),
            date: now() - Duration::minutes(i64::from(id)),
            description: None,
        })
        .collect()
}

fn filled_store() -> TransactionStore<FixedClock> {
    let mut store = TransactionStore::with_clock(FixedClock(now()));
    for transaction in transactions() {
        store.add(transaction);
    }
    store
}

fn store_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(RECORDS as u64));

    // Each add scans every stored record for a duplicate id
    group.bench_function("add_1K_transactions", |b| {
        b.iter_batched(
            transactions,
            |batch| {
                let mut store = TransactionStore::with_clock(FixedClock(now()));
                for transaction in batch {
                    store.add(transaction);
                }
                store
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("update_1K_transactions", |b| {
        b.iter_batched(
            || (filled_store(), transactions()),
            |(mut store, batch)| {
                for transaction in batch {
                    store.update(transaction);
                }
                store
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("delete_1K_transactions", |b| {
        b.iter_batched(
            filled_store,
            |mut store| {
                for id in 0..RECORDS {
                    store.delete(id);
                }
                store
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, store_operations);
criterion_main!(benches);
