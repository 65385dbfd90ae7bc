use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_tree::{
    from_str, from_str_with_options, json, parse_all, to_string, to_string_pretty, to_value,
    Deserializer, ParserOptions, Value,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Value {
    let items: Vec<Product> = (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect();
    to_value(&items).unwrap_or_default()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = json!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true
    });

    c.bench_function("serialize_simple_object", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = r#"{"id":123,"name":"Alice","email":"alice@example.com","active":true}"#;

    c.bench_function("parse_simple_object", |b| {
        b.iter(|| from_str(black_box(text)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let value = products(*size);

        group.bench_with_input(BenchmarkId::new("compact", size), &value, |b, value| {
            b.iter(|| to_string(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("pretty", size), &value, |b, value| {
            b.iter(|| to_string_pretty(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&products(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_wide_object(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_wide_object");
    let options = ParserOptions::unlimited();

    for size in [1_000, 10_000, 40_000].iter() {
        let members: Vec<String> = (0..*size).map(|i| format!("\"key{}\":{}", i, i)).collect();
        let text = format!("{{{}}}", members.join(","));

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str_with_options(black_box(text), &options))
        });
    }
    group.finish();
}

fn benchmark_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let plain = Value::from("This is a medium length string with some content");
    let escaped = Value::from("line one\nline \"two\"\t\\ tab\u{1}");
    let plain_text = to_string(&plain);
    let escaped_text = to_string(&escaped);

    group.bench_function("serialize_plain", |b| b.iter(|| to_string(black_box(&plain))));
    group.bench_function("serialize_escaped", |b| {
        b.iter(|| to_string(black_box(&escaped)))
    });
    group.bench_function("parse_plain", |b| b.iter(|| from_str(black_box(&plain_text))));
    group.bench_function("parse_escaped", |b| {
        b.iter(|| from_str(black_box(&escaped_text)))
    });

    group.finish();
}

fn benchmark_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    let unsigned: Value = (0..100u32).map(Value::from).collect();
    let signed: Value = (0..100i64).map(|i| Value::from(-i)).collect();
    let doubles: Value = (0..100).map(|i| Value::from(f64::from(i) * 1.5)).collect();

    for (name, value) in [("unsigned", &unsigned), ("signed", &signed), ("doubles", &doubles)] {
        let text = to_string(value);
        group.bench_function(format!("serialize_{}", name), |b| {
            b.iter(|| to_string(black_box(value)))
        });
        group.bench_function(format!("parse_{}", name), |b| {
            b.iter(|| from_str(black_box(&text)))
        });
    }

    group.finish();
}

fn benchmark_multi_document(c: &mut Criterion) {
    let text: String = (0..100)
        .map(|i| format!("{{\"seq\":{},\"ok\":true}}\n", i))
        .collect();

    let mut group = c.benchmark_group("multi_document");

    group.bench_function("parse_all", |b| b.iter(|| parse_all(black_box(&text))));
    group.bench_function("deserializer_feed", |b| {
        b.iter(|| {
            let mut de = Deserializer::new();
            de.feed(black_box(&text));
            de.len()
        })
    });

    group.finish();
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let value = products(100);
    let text = to_string(&value);

    let mut group = c.benchmark_group("comparison");

    group.bench_function("json_tree_serialize", |b| {
        b.iter(|| to_string(black_box(&value)))
    });

    group.bench_function("serde_json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&value)))
    });

    group.bench_function("json_tree_parse", |b| b.iter(|| from_str(black_box(&text))));

    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<Value>(black_box(&text)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let value = products(10);

    c.bench_function("roundtrip_products", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&value));
            let _parsed = from_str(black_box(&serialized));
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_parse_simple,
    benchmark_serialize_array,
    benchmark_parse_array,
    benchmark_parse_wide_object,
    benchmark_strings,
    benchmark_numbers,
    benchmark_multi_document,
    benchmark_comparison_with_serde_json,
    benchmark_roundtrip
);
criterion_main!(benches);
