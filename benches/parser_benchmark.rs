//! Benchmarks for curl command parsing and generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rest_client_core::curl::{generate_curl_command, parse_curl_command};

/// A curl command with `num_headers` headers and a JSON body.
fn generate_curl(num_headers: usize) -> String {
    let mut cmd = String::from("curl -X POST 'https://api.example.com/v1/users?page=1' \\\n");
    for i in 0..num_headers {
        cmd.push_str(&format!("  -H 'X-Custom-Header-{}: value number {}' \\\n", i, i));
    }
    cmd.push_str(r#"  --data-raw '{"name":"John Doe","email":"john@example.com","tags":["a","b"]}'"#);
    cmd
}

fn bench_parse_simple(c: &mut Criterion) {
    let cmd = "curl https://api.example.com/users";
    c.bench_function("parse_simple", |b| b.iter(|| parse_curl_command(black_box(cmd))));
}

fn bench_parse_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_headers");

    for num_headers in [1, 10, 50, 200].iter() {
        let cmd = generate_curl(*num_headers);
        group.throughput(Throughput::Bytes(cmd.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_headers),
            num_headers,
            |b, _| b.iter(|| parse_curl_command(black_box(&cmd))),
        );
    }

    group.finish();
}

fn bench_parse_pasted_unicode(c: &mut Criterion) {
    let cmd = "curl\u{00a0}-H \u{201c}Accept: application/json\u{201d}\r\n  -d \u{2018}{\"a\":1}\u{2019}\u{00a0}https://h/x";
    c.bench_function("parse_pasted_unicode", |b| {
        b.iter(|| parse_curl_command(black_box(cmd)))
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let parsed = parse_curl_command(&generate_curl(10)).unwrap();
    c.bench_function("generate_then_parse", |b| {
        b.iter(|| parse_curl_command(&generate_curl_command(black_box(&parsed))))
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_headers,
    bench_parse_pasted_unicode,
    bench_round_trip
);
criterion_main!(benches);
