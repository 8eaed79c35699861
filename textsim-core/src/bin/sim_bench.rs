//! Similarity Benchmarking Tool
//!
//! Measures the text similarity pipeline on a large text file, such as a
//! dump of student submissions or Wikipedia abstracts, one document per line.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: lowercasing and stripping the whole file
//! 2. **Tokenization**: normalization + splitting into owned tokens
//! 3. **Compare**: a pairwise comparison of the file's two halves
//! 4. **Corpus**: every line stored as a document, then a sample of lines
//!    checked against the full corpus
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release --features bench-bin --bin sim_bench
//!
//! # Rank corpus matches by cosine (default)
//! ./target/release/sim_bench /path/to/submissions.txt
//!
//! # Rank corpus matches by jaccard
//! ./target/release/sim_bench /path/to/submissions.txt jaccard
//! ```
//!
//! Set `RUST_LOG=debug` to see per-check corpus logging (slow on big files).
//!
//! ## Example Output
//!
//! ```text
//! --------------------------------
//! Mode        : Compare
//! Elapsed     : 0.452 s
//! Throughput  : 0.218 GiB/s
//! Tokens      : 154_892_341
//! Tokens/sec  : 342_654_789
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use textsim_core::analyzer::normalizer::TextNormalizer;
use textsim_core::analyzer::tokenizer::Tokenizer;
use textsim_core::{CompareConfig, Corpus, Metric, SimilarityEngine};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;
const CORPUS_SAMPLE: usize = 100;

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sim_bench <path> [jaccard|cosine]");
        std::process::exit(1);
    }

    let path = &args[1];

    let metric = match args.get(2).map(String::as_str) {
        Some("jaccard") => Metric::Jaccard,
        Some("cosine") | None => Metric::Cosine,
        Some(other) => {
            warn!(metric = other, "unknown metric, using cosine");
            Metric::Cosine
        }
    };

    info!(path = %path, "loading file");
    let bytes = fs::read(path)?;
    let input = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Metric:    {}\n", metric);

    bench_normalize(&input);
    bench_tokenize(&input);
    bench_compare(&input);
    bench_corpus(&input, metric);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::default();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
        std::hint::black_box(&out);
    });

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str) {
    let tokenizer = Tokenizer::default();

    println!("=== Tokenize (materialized) ===");

    warmup(|| {
        std::hint::black_box(tokenizer.tokenize(input));
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let out = tokenizer.tokenize(input);
        tokens = out.len() as u64;
        std::hint::black_box(out);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_compare(input: &str) {
    let engine = SimilarityEngine::default();
    let (a, b) = split_halves(input);

    println!("=== Compare (halves) ===");

    warmup(|| {
        std::hint::black_box(engine.compare(a, b));
    });

    let mut tokens = 0u64;
    let mut last = None;
    let elapsed = measure(|| {
        let result = engine.compare(a, b);
        tokens = (result.length_a + result.length_b) as u64;
        last = Some(std::hint::black_box(result));
    });

    print_perf("Compare", input.len(), elapsed, tokens);
    if let Some(result) = last {
        println!("Result      : {}\n", result);
    }
}

fn bench_corpus(input: &str, metric: Metric) {
    let mut corpus = Corpus::with_config(CompareConfig {
        metric,
        threshold: 0.0,
    });

    println!("=== Corpus ===");

    let start = Instant::now();
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    let (added, failed, last_error) = corpus.add_batch(&lines);
    let build = start.elapsed();

    if let Some(err) = last_error {
        warn!(failed, error = %err, "some documents were rejected");
    }

    println!("Documents   : {}", fmt_count(added as u64));
    println!("Build       : {:.3} s", build.as_secs_f64());
    println!("Stats       : {}", corpus.stats());

    if corpus.is_empty() {
        println!();
        return;
    }

    let step = (lines.len() / CORPUS_SAMPLE).max(1);
    let sample: Vec<&str> = lines.iter().step_by(step).take(CORPUS_SAMPLE).copied().collect();
    let sample_bytes: usize = sample.iter().map(|s| s.len()).sum();

    let mut matches = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        for submission in &sample {
            local += corpus.check(submission, 10).len() as u64;
        }
        matches = local;
    });

    println!("Checks      : {}", sample.len());
    println!("Matches     : {}", fmt_count(matches));
    println!(
        "Checks/sec  : {}",
        fmt_count((sample.len() as f64 / elapsed.as_secs_f64()) as u64)
    );
    print_perf("Corpus", sample_bytes, elapsed, 0);
}

/// Splits at the char boundary nearest the middle.
fn split_halves(input: &str) -> (&str, &str) {
    let mut mid = input.len() / 2;
    while !input.is_char_boundary(mid) {
        mid += 1;
    }
    input.split_at(mid)
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
