// std imports
use std::hint::black_box;
use std::time::Duration;

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

criterion_group!(benches, bench);
criterion_main!(benches);

fn bench(c: &mut Criterion) {
    bench_with::<wildcard::Pattern>(c, "dfa");
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
    bench_many_stars(c);
}

fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group("wildcard");
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("prefix", "git-*", "git-commit", true),
        ("prefix", "git-*", "gitk", false),
        ("suffix", "*-get", "apt-get", true),
        ("middle", "*-*", "docker-compose", true),
        ("literal", "docker-compose", "docker-compose", true),
        ("long", "*_NAME", "TEST_SOME_VERY_VERY_LONG_NAME", true),
        ("long", "*_NAMES", "TEST_SOME_VERY_VERY_LONG_NAME", false),
    ];

    for (name, pattern, input, expected) in variants {
        let param = format!("{}:{}:{}", name, if expected { "pos" } else { "neg" }, input.len());
        let pattern = Pattern::new(pattern);

        assert_eq!(pattern.matches(input), expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(title, param), |b| {
            b.iter(|| black_box(&pattern).matches(black_box(input)));
        });
    }
}

fn bench_many_stars(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcard:stars");
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let input = "a".repeat(4096);
    for stars in [1, 8, 64] {
        let pattern = wildcard::Pattern::new(format!("{}b", "a*".repeat(stars))).unwrap();
        assert!(!pattern.matches(&input));

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new("dfa", stars), |b| {
            b.iter(|| black_box(&pattern).matches(black_box(&input)));
        });
    }
}

// ---

trait Wildcard {
    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

impl Wildcard for wildcard::Pattern {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self::new(pattern).unwrap()
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}

impl Wildcard for wildmatch::WildMatch {
    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}
