use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waypoint_tracker::models::{Position, SportDetails, Workout};
use waypoint_tracker::services::{persistence, WorkoutLog};
use waypoint_tracker::store::LocalStore;

/// Build a mixed log of the given size with deterministic ids.
fn build_log(count: u32) -> WorkoutLog {
    let mut log = WorkoutLog::new();
    for i in 0..count {
        let created_at = Utc
            .timestamp_millis_opt(1_700_000_000_000 + i64::from(i) * 60_000)
            .unwrap();
        let details = if i % 2 == 0 {
            SportDetails::Running {
                cadence_spm: 160 + i % 30,
            }
        } else {
            SportDetails::Cycling {
                elevation_gain_m: f64::from(i % 800) - 100.0,
            }
        };
        let workout = Workout::rehydrated(
            format!("{i:010}"),
            created_at,
            details,
            Position::new(39.0 + f64::from(i % 100) * 0.001, -12.0),
            3.0 + f64::from(i % 40),
            20.0 + f64::from(i % 90),
        )
        .expect("bench workout should be valid");
        log.append(workout).expect("bench ids are unique");
    }
    log
}

fn benchmark_round_trip(c: &mut Criterion) {
    let log = build_log(1000);
    let store = LocalStore::in_memory();
    persistence::save(&log, &store).expect("seed save");

    let mut group = c.benchmark_group("persistence_round_trip");

    group.bench_function("save_1000", |b| {
        b.iter(|| persistence::save(black_box(&log), &store))
    });

    group.bench_function("load_1000", |b| {
        b.iter(|| persistence::load(black_box(&store)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_round_trip);
criterion_main!(benches);
