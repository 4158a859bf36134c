use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use math_syntax::{math_constructs, MathOptions};
use scan_framework::{DefaultContext, Scanner};

// --- Input Generators ---

fn generate_inline(size_kb: usize) -> String {
    let chunk = "text \\( a + b \\) more \\(x^2\\) and \\\\( escaped \\* plain \\(\n  wrapped\n\\) ";
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        s.push_str(chunk);
    }
    s
}

fn generate_unterminated(size_kb: usize) -> String {
    // Every opener scans to the end of its run before rejecting.
    let chunk = "\\( never closed \\) \\(";
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        s.push_str("plain words between openers ");
    }
    s.push_str(chunk);
    s
}

fn generate_blocks(size_kb: usize) -> String {
    let chunk = "\\[ latex\n  x = \\frac{a}{b}\n\n  y = 2\n  \\]\nA paragraph line.\n\\[\ne^{i\\pi} + 1 = 0\n\\]\n\n";
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        s.push_str(chunk);
    }
    s
}

// --- Benchmarks ---

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("math_scan");

    let size_kb = 100;

    let inline_text = generate_inline(size_kb);
    let unterminated_text = generate_unterminated(size_kb);
    let block_text = generate_blocks(size_kb);

    group.throughput(Throughput::Bytes(inline_text.len() as u64));
    group.bench_function("inline_100kb", |b| {
        b.iter(|| {
            let table = math_constructs(&MathOptions::default()).unwrap();
            let mut scanner = Scanner::new(DefaultContext::new(inline_text.as_str()), table);
            let _items = scanner.scan_text();
        })
    });

    group.throughput(Throughput::Bytes(unterminated_text.len() as u64));
    group.bench_function("unterminated_100kb", |b| {
        b.iter(|| {
            let table = math_constructs(&MathOptions::default()).unwrap();
            let mut scanner =
                Scanner::new(DefaultContext::new(unterminated_text.as_str()), table);
            let _items = scanner.scan_text();
        })
    });

    group.throughput(Throughput::Bytes(block_text.len() as u64));
    group.bench_function("blocks_100kb", |b| {
        b.iter(|| {
            let table = math_constructs(&MathOptions::default()).unwrap();
            let mut scanner = Scanner::new(DefaultContext::new(block_text.as_str()), table);
            let _items = scanner.scan_flow();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
