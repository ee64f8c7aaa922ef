//! Benchmarks for building service definitions

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use service_definition::{Argument, MethodCall, ServiceDefinition};
use std::collections::BTreeMap;
use std::hint::black_box;

#[allow(dead_code)]
struct SmallFactory {
    value: i32,
}

#[allow(dead_code)]
struct LargeFactory {
    data: Vec<u8>,
    config: BTreeMap<String, String>,
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    group.bench_function("singleton_small", |b| {
        b.iter(|| black_box(ServiceDefinition::new("small", SmallFactory { value: 42 })))
    });

    group.bench_function("transient_large", |b| {
        b.iter(|| {
            black_box(ServiceDefinition::with_singleton(
                "large",
                LargeFactory {
                    data: vec![0; 1024],
                    config: BTreeMap::new(),
                },
                false,
            ))
        })
    });

    group.finish();
}

fn bench_arguments(c: &mut Criterion) {
    let mut group = c.benchmark_group("arguments");

    for count in [1usize, 8, 64] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("add_argument", count), &count, |b, &n| {
            b.iter(|| {
                let mut definition = ServiceDefinition::new("svc", SmallFactory { value: 0 });
                for i in 0..n {
                    definition.add_argument(i as i64);
                }
                black_box(definition)
            })
        });

        group.bench_with_input(BenchmarkId::new("add_arguments", count), &count, |b, &n| {
            b.iter(|| {
                let mut definition = ServiceDefinition::new("svc", SmallFactory { value: 0 });
                definition.add_arguments((0..n).map(|i| i as i64));
                black_box(definition)
            })
        });
    }

    group.finish();
}

fn bench_method_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_calls");

    group.bench_function("add_method_call_with_args", |b| {
        b.iter(|| {
            let mut definition = ServiceDefinition::new("svc", SmallFactory { value: 0 });
            definition
                .add_method_call_with_args("setLevel", ["info"])
                .add_method_call_with_args("setSink", [Argument::reference("stdout")])
                .add_method_call("init");
            black_box(definition)
        })
    });

    group.bench_function("add_method_calls_batch", |b| {
        let calls: Vec<MethodCall> = (0..16)
            .map(|i| MethodCall::with_args(format!("set{}", i), [i]))
            .collect();

        b.iter(|| {
            let mut definition = ServiceDefinition::new("svc", SmallFactory { value: 0 });
            definition.add_method_calls(calls.iter().cloned());
            black_box(definition)
        })
    });

    group.finish();
}

fn bench_references(c: &mut Criterion) {
    let mut definition = ServiceDefinition::new("svc", SmallFactory { value: 0 });
    for i in 0..32 {
        definition.add_argument(Argument::List(vec![
            Argument::reference(format!("dep{}", i)),
            Argument::Int(i),
        ]));
    }

    c.bench_function("referenced_services", |b| {
        b.iter(|| black_box(definition.referenced_services()))
    });
}

criterion_group!(
    benches,
    bench_create,
    bench_arguments,
    bench_method_calls,
    bench_references,
);

criterion_main!(benches);
