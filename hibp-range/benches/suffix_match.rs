use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hibp_range::{RangeResponse, hash_password, occurrences};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Character set for password generation, restricted to accepted bytes.
const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Typical number of suffixes returned for a single prefix.
const RANGE_SIZE: usize = 1000;

/// Generates random passwords with a fixed seed for reproducible results.
fn generate_random_passwords(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            (0..length)
                .map(|_| ALL_CHARS[rng.gen_range(0..ALL_CHARS.len())] as char)
                .collect()
        })
        .collect()
}

/// Builds a sorted, CRLF separated range body resembling a real API response.
fn generate_range_body(rng: &mut StdRng, extra: &[String]) -> String {
    let mut lines: Vec<String> = (0..RANGE_SIZE)
        .map(|_| {
            let suffix: String =
                (0..35).map(|_| HEX[rng.gen_range(0..HEX.len())] as char).collect();
            format!("{}:{}", suffix, rng.gen_range(1..100_000))
        })
        .chain(extra.iter().cloned())
        .collect();
    lines.sort();
    lines.join("\r\n")
}

fn bench_suffix_match(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let passwords = generate_random_passwords(&mut rng, 20);
    let hashes: Vec<_> = passwords.iter().map(|p| hash_password(p.as_bytes())).collect();

    let present: Vec<String> = hashes.iter().map(|h| format!("{}:7", h.suffix())).collect();
    let range = RangeResponse::new(generate_range_body(&mut rng, &present));
    let empty = RangeResponse::new(generate_range_body(&mut rng, &[]));

    let mut group = c.benchmark_group("suffix_match");

    group.bench_function("present", |b| {
        b.iter(|| {
            for hash in &hashes {
                let count = occurrences(range.lines(), black_box(hash.suffix())).unwrap();
                black_box(count);
            }
        })
    });

    group.bench_function("absent", |b| {
        b.iter(|| {
            for hash in &hashes {
                let count = occurrences(empty.lines(), black_box(hash.suffix())).unwrap();
                black_box(count);
            }
        })
    });

    group.bench_function("hash_and_split", |b| {
        b.iter(|| {
            for password in &passwords {
                let hash = hash_password(black_box(password.as_bytes()));
                black_box((hash.prefix().len(), hash.suffix().len()));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_suffix_match);
criterion_main!(benches);
