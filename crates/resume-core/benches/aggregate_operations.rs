#![allow(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

//! Benchmark resume aggregate operations.
//!
//! Measures how the career overlap scan and copy-on-write updates scale with
//! the number of careers already on the resume.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resume_core::{Career, ErrorCollector, Resume, ResumeDraft, UserId, YearMonth};

const SIZES: [i32; 4] = [1, 10, 50, 200];

// ============================================================================
// FIXTURES
// ============================================================================

/// A closed career covering one calendar year.
fn career_in(year: i32) -> Career {
    let mut errors = ErrorCollector::new();
    Career::create(
        &mut errors,
        format!("Company {year}"),
        YearMonth::new(year, 1).expect("valid"),
        Some(YearMonth::new(year, 12).expect("valid")),
        false,
    )
}

/// A resume holding `count` consecutive, non-overlapping careers.
fn resume_with(count: i32) -> Resume {
    let draft = (0..count).fold(
        ResumeDraft::new(
            UserId::generate(),
            "Bench",
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            "Yamada",
            "Taro",
        ),
        |draft, offset| draft.with_career(career_in(1700 + offset)),
    );
    Resume::create(&mut ErrorCollector::new(), draft).expect("valid resume")
}

// ============================================================================
// BENCHMARKS: Career insertion
// ============================================================================

fn bench_add_career(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_career");

    for size in SIZES {
        let resume = resume_with(size);
        let fits = career_in(1700 + size);
        let clashes = career_in(1700);

        group.bench_with_input(BenchmarkId::new("accepted", size), &resume, |b, resume| {
            b.iter(|| {
                let mut errors = ErrorCollector::new();
                black_box(resume.add_career(&mut errors, black_box(fits.clone())))
            });
        });

        group.bench_with_input(BenchmarkId::new("rejected", size), &resume, |b, resume| {
            b.iter(|| {
                let mut errors = ErrorCollector::new();
                black_box(resume.add_career(&mut errors, black_box(clashes.clone())))
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARKS: Update and remove
// ============================================================================

fn bench_update_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_remove_career");

    for size in SIZES {
        let resume = resume_with(size);
        let last = resume.careers().back().cloned().expect("at least one career");
        let mut errors = ErrorCollector::new();
        let renamed = last.change_company_name(&mut errors, "Renamed");

        group.bench_with_input(BenchmarkId::new("update", size), &resume, |b, resume| {
            b.iter(|| {
                let mut errors = ErrorCollector::new();
                black_box(resume.update_career(&mut errors, black_box(renamed.clone())))
            });
        });

        group.bench_with_input(BenchmarkId::new("remove", size), &resume, |b, resume| {
            b.iter(|| black_box(resume.remove_career(black_box(last.id()))));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARKS: Snapshot
// ============================================================================

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in SIZES {
        let resume = resume_with(size);

        group.bench_with_input(BenchmarkId::new("to_json", size), &resume, |b, resume| {
            b.iter(|| black_box(resume.to_snapshot().to_json()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_career,
    bench_update_and_remove,
    bench_snapshot
);
criterion_main!(benches);
