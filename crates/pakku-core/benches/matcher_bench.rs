use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pakku_core::{PacklistMatcher, compress};

fn sample_packlist() -> String {
    // A few hundred announcement lines shaped like a real arutha feed.
    let mut text = String::new();
    for i in 0..400u32 {
        let (title, res) = match i % 4 {
            0 => ("Tokyo Revengers", "(1080p)"),
            1 => ("Golden Kamuy S3", "(1080p)"),
            2 => ("Vinland Saga S2", "(720p)"),
            _ => ("Yahari Ore no Seishun", "[1080p]"),
        };
        text.push_str(&format!(
            "#{n}  {dl}x [1.2G] [SubsPlease] {title} - {ep:02} {res} [F00D1E55].mkv\n",
            n = 1000 + i,
            dl = 500 - i,
            ep = i / 4 + 1,
        ));
    }
    text
}

fn bench_scan(c: &mut Criterion) {
    let text = sample_packlist();
    let matcher = PacklistMatcher::new("tokyo revengers", "1080p").unwrap();
    let fallback = PacklistMatcher::new("yahari", "1080p").unwrap();

    c.bench_function("scan_primary_layout", |b| {
        b.iter(|| matcher.scan(black_box(&text)));
    });

    c.bench_function("scan_with_fallback", |b| {
        b.iter(|| fallback.scan(black_box(&text)));
    });
}

fn bench_compress(c: &mut Criterion) {
    let packs: Vec<String> = (0..1000u64)
        .map(|n| format!("#{}", n * 2 / 3)) // mix of runs and gaps
        .collect();

    c.bench_function("compress_1000", |b| {
        b.iter(|| compress(black_box(&packs)).unwrap());
    });
}

criterion_group!(benches, bench_scan, bench_compress);
criterion_main!(benches);
