//! `clinic_doctors_registered` across several registries.
//!
//! The gauge is process-global. This binary holds a single test so no other
//! registry moves it in between the checks.

use clinic_registry::{AppointmentRegistry, AppointmentRegistryApi, SharedRegistry};
use clinic_telemetry::metrics::DOCTORS_REGISTERED;

#[test]
fn test_gauge_sums_live_registries() {
    let base = DOCTORS_REGISTERED.get();

    let mut a = AppointmentRegistry::new();
    let mut b = AppointmentRegistry::new();
    for doctor in ["D1", "D2", "D3"] {
        a.add_doctor(doctor).unwrap();
    }
    b.add_doctor("X").unwrap();
    // Re-adding is a no-op.
    a.add_doctor("D1").unwrap();

    let total = (a.doctor_count() + b.doctor_count()) as i64;
    assert_eq!(total, 4);
    assert_eq!(DOCTORS_REGISTERED.get() - base, total);

    b.remove_doctor("X").unwrap();
    assert!(b.remove_doctor("X").is_err());
    assert_eq!(DOCTORS_REGISTERED.get() - base, 3);

    b.add_doctor("Y").unwrap();
    drop(a);
    assert_eq!(DOCTORS_REGISTERED.get() - base, 1);
    drop(b);
    assert_eq!(DOCTORS_REGISTERED.get(), base);

    // A shared registry counts once, however many handles exist.
    let shared = SharedRegistry::default();
    let other = shared.clone();
    shared.add_doctor("S1").unwrap();
    other.add_doctor("S2").unwrap();
    assert_eq!(DOCTORS_REGISTERED.get() - base, 2);
    drop(shared);
    assert_eq!(DOCTORS_REGISTERED.get() - base, 2);
    drop(other);
    assert_eq!(DOCTORS_REGISTERED.get(), base);
}
