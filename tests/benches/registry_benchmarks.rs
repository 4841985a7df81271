//! # Registry Benchmarks
//!
//! - Booking: doctor lookup, duplicate check, id generation, insert
//! - Id generation: content hash vs random UUID
//! - Listing: materialized views and rendered text at several sizes
//! - Shared handle: booking through the mutex

use clinic_registry::algorithms::random_id;
use clinic_registry::{
    content_hash_id, AppointmentRegistry, AppointmentRegistryApi, IdStrategy, RegistryConfig,
    SharedRegistry,
};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;
use std::time::Duration;

const SIZES: [usize; 3] = [10, 1_000, 10_000];

fn registry_with(strategy: IdStrategy, bookings: usize) -> AppointmentRegistry {
    let mut registry = AppointmentRegistry::with_config(RegistryConfig {
        id_strategy: strategy,
        ..Default::default()
    });
    registry.add_doctor("Dr. Bench").unwrap();
    for i in 0..bookings {
        registry
            .book_appointment(&format!("patient-{}", i), "Dr. Bench", "2025-05-01 10:00")
            .unwrap();
    }
    registry
}

fn bench_booking(c: &mut Criterion) {
    let mut group = c.benchmark_group("clinic/booking");

    for strategy in [IdStrategy::ContentHash, IdStrategy::Random] {
        let label = match strategy {
            IdStrategy::ContentHash => "content_hash",
            IdStrategy::Random => "random",
        };
        group.throughput(Throughput::Elements(1_000));
        group.bench_function(BenchmarkId::new("book_1000", label), |b| {
            b.iter_batched(
                || registry_with(strategy, 0),
                |mut registry| {
                    for i in 0..1_000 {
                        let patient = format!("p{}", i);
                        black_box(
                            registry
                                .book_appointment(&patient, "Dr. Bench", "09:30")
                                .unwrap(),
                        );
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("duplicate_rejection", |b| {
        let mut registry = registry_with(IdStrategy::ContentHash, 1_000);
        b.iter(|| black_box(registry.book_appointment("patient-500", "Dr. Bench", "11:00")))
    });

    group.finish();
}

fn bench_id_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("clinic/appointment_id");
    let mut rng = rand::thread_rng();

    for len in [8usize, 64, 512] {
        let patient: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("content_hash", len), &patient, |b, p| {
            b.iter(|| content_hash_id(black_box(p), "Dr. Bench", "2025-05-01 10:00"))
        });
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function(BenchmarkId::new("random", "uuid_v4"), |b| {
        b.iter(|| black_box(random_id()))
    });

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("clinic/listing");

    for size in SIZES {
        let registry = registry_with(IdStrategy::ContentHash, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("views", size), &registry, |b, r| {
            b.iter(|| black_box(r.list_appointments()))
        });
        group.bench_with_input(BenchmarkId::new("render", size), &registry, |b, r| {
            b.iter(|| black_box(r.render_listing()))
        });
    }

    group.finish();
}

fn bench_shared_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("clinic/shared");

    group.bench_function("book_confirm", |b| {
        b.iter_batched(
            || {
                let shared = SharedRegistry::default();
                shared.add_doctor("Dr. Bench").unwrap();
                shared
            },
            |shared| {
                let id = shared
                    .book_appointment("P1", "Dr. Bench", "10:00")
                    .unwrap()
                    .appointment_id;
                black_box(shared.confirm_appointment(id.as_str()).unwrap());
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    name = registry_benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets =
        bench_booking,
        bench_id_generation,
        bench_listing,
        bench_shared_registry
);

criterion_main!(registry_benches);
