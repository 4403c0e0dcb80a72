mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_schema_tools::NormalizeOptions;
use graphql_schema_tools::PrintSdlOptions;
use graphql_schema_tools::Schema;
use graphql_schema_tools::minify;
use graphql_schema_tools::normalize;
use graphql_schema_tools::print_sdl;

fn normalize_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_schema");

    group.throughput(Throughput::Bytes(fixtures::SMALL_SCHEMA.len() as u64));
    group.bench_function("small (pretty)", |b| {
        b.iter(|| {
            black_box(normalize(
                black_box(fixtures::SMALL_SCHEMA),
                &NormalizeOptions::default(),
            ))
        })
    });
    group.bench_function("small (minified)", |b| {
        b.iter(|| {
            black_box(normalize(
                black_box(fixtures::SMALL_SCHEMA),
                &NormalizeOptions::minified(),
            ))
        })
    });

    for count in [100, 1_000] {
        let input = fixtures::reversed_schema(count);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("reversed", count),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(normalize(input, &NormalizeOptions::default()))
                })
            },
        );
    }

    group.finish();
}

fn minify_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("minify");
    let input = fixtures::reversed_schema(1_000);
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("reversed (1000 types)", |b| {
        b.iter(|| black_box(minify(black_box(&input))))
    });
    group.finish();
}

fn print_schema_sdl(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_sdl");
    let input = fixtures::reversed_schema(1_000);
    let schema = Schema::from_sdl(&input).unwrap();
    group.bench_function("reversed (1000 types)", |b| {
        b.iter(|| {
            black_box(print_sdl(&schema, &PrintSdlOptions::default()).unwrap())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    normalize_schema,
    minify_text,
    print_schema_sdl,
);
criterion_main!(benches);
