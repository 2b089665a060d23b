// benches/aggregate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use vacancy_stats::core::{finalize, ingest, RawRecord};

const REGIONS: [&str; 12] = [
    "Москва", "Санкт-Петербург", "Казань", "Новосибирск", "Екатеринбург", "Россия",
    "Нижний Новгород", "Самара", "Омск", "Уфа", "Пермь", "Воронеж",
];
const CURRENCIES: [&str; 4] = ["RUR", "USD", "EUR", "KZT"];
const NAMES: [&str; 4] = ["Программист", "Аналитик", "Старший программист", "Тестировщик"];

/// Deterministic synthetic dataset.
fn synthetic(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| RawRecord {
            name: NAMES[i % NAMES.len()].to_string(),
            salary_from: (10_000 + (i * 37) % 90_000).to_string(),
            salary_to: (100_000 + (i * 53) % 150_000).to_string(),
            salary_currency: CURRENCIES[i % 7 % CURRENCIES.len()].to_string(),
            area_name: REGIONS[(i * 31) % REGIONS.len()].to_string(),
            published_at: format!("{}-03-01T10:00:00+0300", 2007 + i % 16),
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let records = synthetic(100_000);

    c.bench_function("ingest_100k", |b| {
        b.iter(|| {
            let groups = ingest(black_box(&records), "программист").unwrap();
            black_box(groups.total_count)
        })
    });

    let groups = ingest(&records, "Программист").unwrap();
    c.bench_function("finalize_100k", |b| {
        b.iter(|| {
            let t = finalize(black_box(&groups));
            black_box(t.share_by_region_top10.len())
        })
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
