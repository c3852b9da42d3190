use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gcode_line_parser::parser::{decompose, numeric_span_end, strip_line};
use gcode_line_parser::{GcodeParser, ParseResult};
use std::hint::black_box;

/// Generate G-code content of different patterns for benchmarking
fn generate_gcode_content(lines: usize, pattern: &str) -> String {
    let mut content = String::new();

    match pattern {
        "movement_heavy" => {
            for i in 0..lines {
                content.push_str(&format!(
                    "G1 X{:.3} Y{:.3} Z{:.3} E{:.3} F1500\n",
                    (i as f32) * 0.1,
                    (i as f32) * 0.2,
                    (i as f32) * 0.05,
                    (i as f32) * 0.02
                ));
            }
        }
        "comment_heavy" => {
            for i in 0..lines {
                content.push_str(&format!(
                    "G1 X{:.1} Y{:.1} ; Move to position {}, layer {}\n",
                    (i as f32) * 0.1,
                    (i as f32) * 0.1,
                    i,
                    i / 100
                ));
            }
        }
        _ => {
            for i in 0..lines {
                match i % 5 {
                    0 => content.push_str(&format!(
                        "G1 X{:.3} Y{:.3} F1500\n",
                        (i as f32) * 0.1,
                        (i as f32) * 0.2
                    )),
                    1 => content.push_str(&format!("; Layer {}\n", i / 5)),
                    2 => content.push_str(&format!("M104 S{} T0\n", 200 + (i % 50))),
                    3 => content.push_str(&format!("M117 Layer {} of {}\n", i / 5, lines / 5)),
                    4 => content.push_str(&format!("T{}\n", i % 3)),
                    _ => unreachable!(),
                }
            }
        }
    }

    content
}

/// Benchmark parsing single lines of each shape
fn bench_single_line_parsing(c: &mut Criterion) {
    let parser = GcodeParser::default();
    let test_lines = vec![
        ("simple_move", "G1 X10 Y20"),
        ("complex_move", "G1 X123.456 Y789.012 Z0.3 E2.85714 F1500"),
        ("with_comment", "G1 X10 Y20 ; Move to next position"),
        ("comment_only", "; This is a comment line with some detailed information"),
        ("temperature", "M104 S210 T0"),
        ("tool_change", "T1"),
        ("display_message", "M117 Printing layer 12 of 240"),
        ("unparsed", "M851 X1.23 Y-2.45 Z0.67"),
    ];

    let mut group = c.benchmark_group("single_line_parsing");

    for (name, line) in test_lines {
        group.bench_with_input(BenchmarkId::new("parse", name), &line, |b, line| {
            b.iter(|| black_box(parser.parse(black_box(line))))
        });
    }

    group.finish();
}

/// Benchmark parsing documents of different sizes
fn bench_document_parsing(c: &mut Criterion) {
    let parser = GcodeParser::default();
    let sizes = vec![1_000, 10_000, 100_000];
    let patterns = vec!["movement_heavy", "comment_heavy", "mixed"];

    let mut group = c.benchmark_group("document_parsing");

    for &size in &sizes {
        for pattern in &patterns {
            let content = generate_gcode_content(size, pattern);

            group.throughput(Throughput::Bytes(content.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(*pattern, size),
                &content,
                |b, content| {
                    b.iter(|| {
                        let results: Vec<ParseResult> = content
                            .lines()
                            .map(|line| black_box(parser.parse(black_box(line))))
                            .collect();
                        black_box(results)
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the parsing stages separately
fn bench_stages(c: &mut Criterion) {
    let line = "G1 X123.456 Y789.012 Z0.3 E2.85714 F1500 ; Complex move";
    let cleaned = strip_line(line);

    let mut group = c.benchmark_group("stages");
    group.bench_function("strip", |b| b.iter(|| black_box(strip_line(black_box(line)))));
    group.bench_function("scan", |b| {
        b.iter(|| black_box(numeric_span_end(black_box(&cleaned), 3)))
    });
    group.bench_function("decompose", |b| {
        b.iter(|| black_box(decompose(black_box(&cleaned), 2)))
    });
    group.finish();
}

criterion_group!(
    parsing_benches,
    bench_single_line_parsing,
    bench_document_parsing,
    bench_stages
);

criterion_main!(parsing_benches);
