use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pocketledger_parties::Person;
use pocketledger_products::Product;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn funded(name: &str, amount: Decimal) -> Person {
    let mut person = Person::new(name, "USD").expect("USD is recognized");
    person.wallet_mut().add_fund(amount).expect("non-negative amount");
    person
}

/// Ping-pong the same amount between two people.
fn bench_transfer(c: &mut Criterion) {
    let mut a = funded("A", dec!(1000));
    let mut b = funded("B", dec!(1000));

    c.bench_function("transfer_fund", |bencher| {
        bencher.iter(|| {
            a.transfer_fund(black_box(dec!(12.34)), &mut b).unwrap();
            b.transfer_fund(black_box(dec!(12.34)), &mut a).unwrap();
        })
    });
}

fn bench_buy_product(c: &mut Criterion) {
    let phone =
        Product::new("Phone", [("EUR", dec!(45.00)), ("USD", dec!(49.99))], "tech").unwrap();

    c.bench_function("buy_product", |bencher| {
        bencher.iter_batched(
            || funded("Customer", dec!(100)),
            |mut customer| customer.buy_product(black_box(&phone)).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Division cost as the number of participants grows.
fn bench_divide_wallet(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide_wallet");

    for participants in [2usize, 10, 100, 1000] {
        group.throughput(Throughput::Elements(participants as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(participants),
            &participants,
            |bencher, &participants| {
                bencher.iter_batched(
                    || {
                        let source = funded("Source", dec!(1000000));
                        let others: Vec<Person> = (1..participants)
                            .map(|i| funded(&format!("P{i}"), Decimal::ZERO))
                            .collect();
                        (source, others)
                    },
                    |(mut source, mut others)| {
                        let mut refs: Vec<&mut Person> = others.iter_mut().collect();
                        source.divide_wallet(&mut refs).unwrap()
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_buy_product, bench_divide_wallet);
criterion_main!(benches);
