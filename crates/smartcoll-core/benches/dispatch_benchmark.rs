// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use smartcoll_core::arithmetic::operation::{BinaryOperation, ADDITION, MULTIPLICATION};
use smartcoll_core::{BigInt, Decimal, NumericValue};
use std::hint::black_box;

const N: usize = 10_000;

fn static_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_dispatch");
    group.throughput(Throughput::Elements(N as u64));

    let ints: Vec<i64> = (0..N as i64).collect();
    group.bench_function(BenchmarkId::new("sum", "i64"), |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for v in &ints {
                acc = ADDITION.apply(&acc, v).unwrap_or(acc);
            }
            black_box(acc)
        })
    });

    let decimals: Vec<Decimal> = (0..N as i64).map(|v| Decimal::new(v, 2)).collect();
    group.bench_function(BenchmarkId::new("sum", "Decimal"), |b| {
        b.iter(|| {
            let mut acc = Decimal::ZERO;
            for v in &decimals {
                acc = ADDITION.apply(&acc, v).unwrap_or(acc);
            }
            black_box(acc)
        })
    });

    group.finish();
}

fn runtime_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("runtime_dispatch");
    group.throughput(Throughput::Elements(N as u64));

    let ints: Vec<NumericValue> = (0..N as i64).map(NumericValue::I64).collect();
    group.bench_function(BenchmarkId::new("sum", "i64"), |b| {
        b.iter(|| {
            let mut acc = NumericValue::I64(0);
            for v in &ints {
                if let Ok(next) = ADDITION.apply_value(&acc, v) {
                    acc = next;
                }
            }
            black_box(acc)
        })
    });

    let bigs: Vec<NumericValue> = (1..=64)
        .map(|v| NumericValue::BigInt(BigInt::from(v)))
        .collect();
    group.bench_function(BenchmarkId::new("product", "BigInt"), |b| {
        b.iter(|| {
            let mut acc = NumericValue::BigInt(BigInt::from(1));
            for v in &bigs {
                if let Ok(next) = MULTIPLICATION.apply_value(&acc, v) {
                    acc = next;
                }
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group!(benches, static_dispatch, runtime_dispatch);
criterion_main!(benches);
