// SPDX-License-Identifier: MIT
//
// Criterion benchmarks for the encoding hot path: checksum, barcode
// composition, and digitable-line formatting for a single instrument.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use boletokit_core::types::{BankCode, Currency, DueDate, FreeField, MoneyAmount};
use boletokit_encoding::{checksum, compose_barcode, format_digitable_line};

const PAYLOAD_43: &str = "0019988100000001000000002221967000000000717";

fn bench_checksums(c: &mut Criterion) {
    c.bench_function("mod10 (10 digits)", |b| {
        b.iter(|| checksum::mod10(black_box("0222196700")).unwrap());
    });
    c.bench_function("mod11 (43 digits)", |b| {
        b.iter(|| checksum::mod11(black_box(PAYLOAD_43)).unwrap());
    });
}

fn bench_compose_and_format(c: &mut Criterion) {
    let bank = BankCode::new("001").unwrap();
    let due = DueDate::from_ymd(2024, 10, 26).unwrap();
    let amount = MoneyAmount::from_centavos(100);
    let free = FreeField::new("0000002221967000000000717".to_owned()).unwrap();

    c.bench_function("compose_barcode", |b| {
        b.iter(|| {
            compose_barcode(
                black_box(&bank),
                Currency::Real,
                due,
                amount,
                black_box(&free),
            )
            .unwrap()
        });
    });

    let barcode = compose_barcode(&bank, Currency::Real, due, amount, &free).unwrap();
    c.bench_function("format_digitable_line", |b| {
        b.iter(|| format_digitable_line(black_box(&barcode)).unwrap());
    });
}

criterion_group!(benches, bench_checksums, bench_compose_and_format);
criterion_main!(benches);
