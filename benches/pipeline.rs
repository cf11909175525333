//! Benchmarks for the palette-to-colormap pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coolors_colormap::{build_colormap, convert, encode_colormap, parse_palette_xml, JsonStyle};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A synthetic palette with `count` colours.
fn large_palette(count: usize) -> String {
    let mut source = String::from("<palette>\n");
    for i in 0..count {
        let v = (i % 256) as u8;
        source.push_str(&format!(
            "  <color name=\"c{i}\" hex=\"{v:02x}{v:02x}{v:02x}\" r=\"{v}\" g=\"{v}\" b=\"{v}\" />\n"
        ));
    }
    source.push_str("</palette>\n");
    source
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let fixture = load_fixture("sunset.xml");
    let large = large_palette(1024);

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_palette_xml(black_box(&fixture)).unwrap())
    });

    group.bench_function("parse_1024", |b| {
        b.iter(|| parse_palette_xml(black_box(&large)).unwrap())
    });

    group.finish();
}

fn bench_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("building");

    let colours = parse_palette_xml(&large_palette(1024)).unwrap();
    let colormap = build_colormap(&colours, None).unwrap();

    group.bench_function("build_1024", |b| {
        b.iter(|| build_colormap(black_box(&colours), None).unwrap())
    });

    group.bench_function("encode_compact_1024", |b| {
        b.iter(|| encode_colormap(black_box(&colormap), JsonStyle::Compact).unwrap())
    });

    group.bench_function("encode_pretty_1024", |b| {
        b.iter(|| encode_colormap(black_box(&colormap), JsonStyle::Pretty).unwrap())
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let fixture = load_fixture("sunset.xml");

    c.bench_function("convert_fixture", |b| {
        b.iter(|| convert(black_box(&fixture), None).unwrap())
    });
}

criterion_group!(benches, bench_parsing, bench_building, bench_pipeline);
criterion_main!(benches);
