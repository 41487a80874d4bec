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
use smartcoll_collections::prelude::*;
use std::hint::black_box;

const N: usize = 10_000;

fn sequence_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_algebra");
    group.throughput(Throughput::Elements(N as u64));

    let seq: SmartSeq<i64> = (0..N as i64).collect();
    group.bench_function(BenchmarkId::new("filter_transform", N), |b| {
        b.iter(|| black_box(seq.filter(|x| x % 3 == 0).transform(|x| x * 2)))
    });
    group.bench_function(BenchmarkId::new("sum", N), |b| {
        b.iter(|| black_box(seq.sum()))
    });

    let dupes: SmartSeq<i64> = (0..N as i64).map(|x| x % 97).collect();
    group.bench_function(BenchmarkId::new("remove_duplicates", N), |b| {
        b.iter(|| {
            let mut local = dupes.clone();
            local.remove_duplicates();
            black_box(local)
        })
    });

    group.finish();
}

fn set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");
    group.throughput(Throughput::Elements(N as u64));

    let evens: SmartSet<u32> = (0..N as u32).step_by(2).collect();
    let thirds: SmartSet<u32> = (0..N as u32).step_by(3).collect();
    group.bench_function(BenchmarkId::new("intersection", N), |b| {
        b.iter(|| {
            let mut local = evens.clone();
            local.intersection(&thirds);
            black_box(local)
        })
    });
    group.bench_function(BenchmarkId::new("is_subset_of", N), |b| {
        b.iter(|| black_box(thirds.is_subset_of(&evens)))
    });

    group.finish();
}

fn map_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_algebra");
    group.throughput(Throughput::Elements(N as u64));

    let map: SmartMap<u32, u64> = (0..N as u32).map(|k| (k, u64::from(k) * 7)).collect();
    group.bench_function(BenchmarkId::new("swap", N), |b| {
        b.iter(|| black_box(map.swap()))
    });
    group.bench_function(BenchmarkId::new("merge_with", N), |b| {
        b.iter(|| black_box(map.merge_with(&map, |a, b| a + b)))
    });

    group.finish();
}

criterion_group!(benches, sequence_algebra, set_algebra, map_algebra);
criterion_main!(benches);
