//! Benchmarks for date cutoff checks.
//!
//! These benchmarks compare comparing stored `YYYY-MM-DD` strings directly
//! against parsing them into dates first.
//!
//! The string comparison mirrors the date rules in
//! `state::form::validate_record` and must be kept in step with them.

use chrono::{NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DATE_OF_POST: &str = "2024-01-05";
const LAST_DATE: &str = "2024-02-01";

fn bench_format_today(c: &mut Criterion) {
    c.bench_function("format_today_iso", |b| {
        b.iter(|| Utc::now().date_naive().format("%Y-%m-%d").to_string())
    });
}

// Same cutoffs as `validate_record`: date of post <= today <= last date.
fn bench_string_compare(c: &mut Criterion) {
    let today = "2024-01-10".to_string();
    c.bench_function("date_compare_lexicographic", |b| {
        b.iter(|| {
            let post_ok = !DATE_OF_POST.is_empty() && black_box(DATE_OF_POST) <= today.as_str();
            let last_ok = !LAST_DATE.is_empty() && black_box(LAST_DATE) >= today.as_str();
            post_ok && last_ok
        })
    });
}

fn bench_parsed_compare(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    c.bench_function("date_compare_parsed", |b| {
        b.iter(|| {
            let post = NaiveDate::parse_from_str(black_box(DATE_OF_POST), "%Y-%m-%d");
            let last = NaiveDate::parse_from_str(black_box(LAST_DATE), "%Y-%m-%d");
            matches!((post, last), (Ok(post), Ok(last)) if post <= today && last >= today)
        })
    });
}

criterion_group!(
    benches,
    bench_format_today,
    bench_string_compare,
    bench_parsed_compare
);
criterion_main!(benches);
