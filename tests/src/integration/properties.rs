//! # Registry Properties
//!
//! proptest checks over arbitrary doctor names, patient names and time
//! strings. Each property builds a fresh registry per case.

#[cfg(test)]
mod tests {
    use clinic_registry::{
        AppointmentRegistry, AppointmentRegistryApi, AppointmentStatus, IdStrategy,
        RegistryConfig, RegistryError,
    };
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z .'-]{0,23}"
    }

    fn time() -> impl Strategy<Value = String> {
        "20[0-9]{2}-[01][0-9]-[0-3][0-9] [0-2][0-9]:[0-5][0-9]"
    }

    fn registry_for(strategy: IdStrategy) -> AppointmentRegistry {
        AppointmentRegistry::with_config(RegistryConfig {
            id_strategy: strategy,
            ..Default::default()
        })
    }

    fn id_strategy() -> impl Strategy<Value = IdStrategy> {
        prop_oneof![Just(IdStrategy::ContentHash), Just(IdStrategy::Random)]
    }

    proptest! {
        #[test]
        fn prop_registered_doctor_accepts_new_patient(
            doctor in name(),
            patient in name(),
            at in time(),
            strategy in id_strategy(),
        ) {
            let mut registry = registry_for(strategy);
            registry.add_doctor(&doctor).unwrap();

            let receipt = registry.book_appointment(&patient, &doctor, &at).unwrap();
            let stored = registry.get_appointment(receipt.appointment_id.as_str()).unwrap();
            prop_assert_eq!(stored.status, AppointmentStatus::Booked);
            prop_assert_eq!(&stored.patient, &patient);
            prop_assert_eq!(&stored.time, &at);
        }

        #[test]
        fn prop_unknown_or_removed_doctor_rejected(
            doctor in name(),
            patient in name(),
            at in time(),
            removed in any::<bool>(),
        ) {
            let mut registry = AppointmentRegistry::new();
            if removed {
                registry.add_doctor(&doctor).unwrap();
                registry.remove_doctor(&doctor).unwrap();
            }

            prop_assert_eq!(
                registry.book_appointment(&patient, &doctor, &at),
                Err(RegistryError::DoctorNotFound(doctor.clone()))
            );
            prop_assert_eq!(registry.appointment_count(), 0);
            prop_assert!(!registry.has_patient(&patient));
        }

        #[test]
        fn prop_second_booking_always_duplicate(
            patient in name(),
            first in (name(), time()),
            second in (name(), time()),
            strategy in id_strategy(),
        ) {
            let mut registry = registry_for(strategy);
            registry.add_doctor(&first.0).unwrap();
            registry.add_doctor(&second.0).unwrap();

            registry.book_appointment(&patient, &first.0, &first.1).unwrap();
            let before = registry.list_appointments();

            prop_assert_eq!(
                registry.book_appointment(&patient, &second.0, &second.1),
                Err(RegistryError::DuplicateBooking(patient.clone()))
            );
            prop_assert_eq!(registry.list_appointments(), before);
        }

        #[test]
        fn prop_status_leaves_booked_once(
            doctor in name(),
            patient in name(),
            at in time(),
            confirm_first in any::<bool>(),
            confirm_second in any::<bool>(),
        ) {
            let mut registry = AppointmentRegistry::new();
            registry.add_doctor(&doctor).unwrap();
            let id = registry.book_appointment(&patient, &doctor, &at).unwrap().appointment_id;

            let first = if confirm_first {
                registry.confirm_appointment(id.as_str())
            } else {
                registry.cancel_appointment(id.as_str())
            };
            prop_assert!(first.is_ok());
            let settled = registry.get_appointment(id.as_str()).unwrap().status;
            prop_assert_eq!(
                settled,
                if confirm_first { AppointmentStatus::Confirmed } else { AppointmentStatus::Canceled }
            );

            let second = if confirm_second {
                registry.confirm_appointment(id.as_str())
            } else {
                registry.cancel_appointment(id.as_str())
            };
            let is_invalid = matches!(second, Err(RegistryError::InvalidTransition { .. }));
            prop_assert!(is_invalid);
            prop_assert_eq!(registry.get_appointment(id.as_str()).unwrap().status, settled);
        }

        #[test]
        fn prop_unknown_id_not_found(id in "[0-9a-f]{64}|[a-z]{1,12}") {
            let mut registry = AppointmentRegistry::new();
            prop_assert_eq!(
                registry.cancel_appointment(&id),
                Err(RegistryError::AppointmentNotFound(id.as_str().into()))
            );
            prop_assert_eq!(
                registry.confirm_appointment(&id),
                Err(RegistryError::AppointmentNotFound(id.as_str().into()))
            );
        }

        #[test]
        fn prop_ids_unique_and_listing_ordered(
            patients in prop::collection::hash_set(name(), 1..24),
            at in time(),
            strategy in id_strategy(),
        ) {
            let mut registry = registry_for(strategy);
            registry.add_doctor("A").unwrap();

            let patients: Vec<String> = patients.into_iter().collect();
            let mut ids = Vec::new();
            for patient in &patients {
                ids.push(registry.book_appointment(patient, "A", &at).unwrap().appointment_id);
            }

            let distinct: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(distinct.len(), ids.len());

            let listed: Vec<_> = registry.appointments().map(|view| view.id).collect();
            prop_assert_eq!(listed, ids);
        }

        #[test]
        fn prop_add_doctor_idempotent(doctor in name(), repeats in 1usize..5) {
            let mut registry = AppointmentRegistry::new();
            for _ in 0..repeats {
                prop_assert!(registry.add_doctor(&doctor).is_ok());
            }
            prop_assert_eq!(registry.doctor_count(), 1);
            prop_assert!(registry.remove_doctor(&doctor).is_ok());
            prop_assert!(registry.remove_doctor(&doctor).is_err());
        }
    }
}
