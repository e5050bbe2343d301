// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use fastdate_format::{DateTimeFields, FastDateFormat, Zone};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let format = FastDateFormat::new("yyyy-MM-dd'T'HH:mm:ss", Zone::UTC, "en-US").unwrap();

    let mut fields = DateTimeFields::new();
    fields.year = 2024;
    fields.month = 3;
    fields.day_of_month = 15;
    fields.hour_of_day = 14;
    fields.minute = 30;
    fields.second = 45;

    c.bench_function("format", |b| {
        b.iter(|| format.format(black_box(&fields)))
    });

    c.bench_function("parse", |b| {
        b.iter(|| format.parse(black_box("2024-03-15T14:30:45")).unwrap())
    });

    c.bench_function("compile", |b| {
        b.iter(|| {
            FastDateFormat::new(black_box("yyyy-MM-dd'T'HH:mm:ss"), Zone::UTC, "en-US").unwrap()
        })
    });

    c.bench_function("cached_instance", |b| {
        b.iter(|| FastDateFormat::get_instance(black_box("yyyy-MM-dd"), Zone::UTC, "en-US").unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
