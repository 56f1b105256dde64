use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typed_qs::{QueryMap, Value};

fn parse_flat(c: &mut Criterion) {
    let query = "page=2&exact=true&q=hello&ratio=0.5&token=abc123";

    c.bench_function("parse_flat", |b| {
        b.iter(|| typed_qs::parse(black_box(query)).unwrap())
    });
}

fn parse_encoded_strings(c: &mut Criterion) {
    let query = "q=hello%20world%20this%20is%20a%20fairly%20long%20search%20phrase&\
                 title=caf%C3%A9%20au%20lait&path=%2Fusr%2Flocal%2Fbin";

    c.bench_function("parse_encoded_strings", |b| {
        b.iter(|| typed_qs::parse(black_box(query)).unwrap())
    });
}

fn parse_with_full_url(c: &mut Criterion) {
    let url = "https://example.com/search?page=2&exact=true&q=hello&ratio=0.5";

    c.bench_function("parse_with_full_url", |b| {
        b.iter(|| typed_qs::parse(black_box(url)).unwrap())
    });
}

fn parse_many_pairs(c: &mut Criterion) {
    let query = (0..100)
        .map(|i| format!("key{}={}", i, i))
        .collect::<Vec<_>>()
        .join("&");

    c.bench_function("parse_many_pairs", |b| {
        b.iter(|| typed_qs::parse(black_box(&query)).unwrap())
    });
}

fn stringify_flat(c: &mut Criterion) {
    let mut params = QueryMap::new();
    params.insert("page".to_owned(), Value::Int(2));
    params.insert("exact".to_owned(), Value::Bool(true));
    params.insert("q".to_owned(), Value::String("hello".to_owned()));
    params.insert("ratio".to_owned(), Value::Float(0.5));

    c.bench_function("stringify_flat", |b| {
        b.iter(|| typed_qs::stringify(black_box(&params)).unwrap())
    });
}

fn stringify_string_heavy(c: &mut Criterion) {
    let mut params = QueryMap::new();
    params.insert(
        "q".to_owned(),
        Value::String("hello world this is a fairly long search phrase".to_owned()),
    );
    params.insert("title".to_owned(), Value::String("café au lait".to_owned()));
    params.insert("path".to_owned(), Value::String("/usr/local/bin".to_owned()));

    c.bench_function("stringify_string_heavy", |b| {
        b.iter(|| typed_qs::stringify(black_box(&params)).unwrap())
    });
}

criterion_group!(
    parse,
    parse_flat,
    parse_encoded_strings,
    parse_with_full_url,
    parse_many_pairs
);

criterion_group!(stringify, stringify_flat, stringify_string_heavy);

criterion_main!(parse, stringify);
