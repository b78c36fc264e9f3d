use std::fmt::Write;
use std::hint::black_box;

use bibcorpus::BibParser;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a synthetic bibliography with N well-formed entries
fn generate_bibliography(num_entries: usize) -> String {
    let mut bib = String::with_capacity(num_entries * 160);

    for i in 0..num_entries {
        let year = 1950 + (i % 75);
        write!(
            bib,
            "@article{{entry{i},\n    title = {{Synthetic Title {i}}},\n    author = {{Author {}}},\n    year = {{{year}}}\n}}\n\n",
            i % 100
        )
        .unwrap();
    }

    bib
}

/// Generate a bibliography where every fifth entry is missing its opening brace
fn generate_bibliography_with_failures(num_entries: usize) -> String {
    let mut bib = String::with_capacity(num_entries * 160);

    for i in 0..num_entries {
        if i % 5 == 4 {
            writeln!(bib, "@article entry{i}, title = {{Broken {i}}}}}\n").unwrap();
        } else {
            let year = 1950 + (i % 75);
            write!(
                bib,
                "@article{{entry{i},\n    title = {{Synthetic Title {i}}},\n    author = {{Author {}}},\n    year = {{{year}}}\n}}\n\n",
                i % 100
            )
            .unwrap();
        }
    }

    bib
}

fn bench_parse_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_corpus");

    for size in [100, 1_000, 10_000].iter() {
        let bibliography = generate_bibliography(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &bibliography,
            |b, bib| {
                let parser = BibParser::with_progress(false);
                b.iter(|| parser.parse_str(black_box(bib)));
            },
        );
    }

    group.finish();
}

fn bench_parse_with_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_corpus_with_recovery");

    for size in [1_000, 10_000].iter() {
        let bibliography = generate_bibliography_with_failures(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &bibliography,
            |b, bib| {
                let parser = BibParser::with_progress(false);
                b.iter(|| parser.parse_str(black_box(bib)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_corpus, bench_parse_with_recovery);
criterion_main!(benches);
