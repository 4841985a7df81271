//! IPC Handler for the Appointment Registry
//!
//! Boundary between the presentation layer and the registry.
//!
//! ## Responsibilities
//!
//! - Reject requests with blank required fields before touching state
//! - Delegate everything else to the registry unchanged
//! - Turn typed results into responses carrying a displayable message

use crate::domain::{ErrorKind, RegistryError};
use crate::ipc::payloads::{RegistryRequest, RegistryResponse};
use crate::ports::inbound::AppointmentRegistryApi;
use clinic_telemetry::log_event;
use clinic_telemetry::metrics::REGISTRY_ERRORS;
use uuid::Uuid;

/// Shown when a booking or id request has a blank field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Shown when a doctor request has a blank name.
pub const MISSING_DOCTOR_MESSAGE: &str = "Please enter a doctor's name.";

const SUBSYSTEM: &str = "clinic-registry";

/// IPC Handler for the Appointment Registry.
pub struct RegistryHandler<R> {
    registry: R,
}

impl<R: AppointmentRegistryApi> RegistryHandler<R> {
    /// Create a handler over `registry`.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Borrow the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Consume the handler, returning the registry.
    pub fn into_inner(self) -> R {
        self.registry
    }

    /// Handle one request.
    pub fn handle(&mut self, request: RegistryRequest) -> RegistryResponse {
        let correlation_id = Uuid::new_v4();
        let op = request.op_name();

        let blank = request.blank_fields();
        if !blank.is_empty() {
            log_event!(
                warn,
                SUBSYSTEM,
                "Request rejected: blank fields",
                op = op,
                fields = ?blank,
                correlation_id = %correlation_id
            );
            REGISTRY_ERRORS
                .with_label_values(&[ErrorKind::MissingField.as_label()])
                .inc();
            let message = match request {
                RegistryRequest::AddDoctor { .. } | RegistryRequest::RemoveDoctor { .. } => {
                    MISSING_DOCTOR_MESSAGE
                }
                _ => MISSING_FIELDS_MESSAGE,
            };
            return RegistryResponse::error(correlation_id, ErrorKind::MissingField, message);
        }

        log_event!(
            debug,
            SUBSYSTEM,
            "Handling request",
            op = op,
            correlation_id = %correlation_id
        );

        match request {
            RegistryRequest::AddDoctor { name } => {
                Self::reply(correlation_id, self.registry.add_doctor(&name).map(|r| r.message))
            }
            RegistryRequest::RemoveDoctor { name } => Self::reply(
                correlation_id,
                self.registry.remove_doctor(&name).map(|r| r.message),
            ),
            RegistryRequest::BookAppointment {
                patient,
                doctor,
                time,
            } => match self.registry.book_appointment(&patient, &doctor, &time) {
                Ok(receipt) => {
                    let mut response = RegistryResponse::ok(correlation_id, receipt.message);
                    response.appointment_id = Some(receipt.appointment_id);
                    response
                }
                Err(err) => Self::failure(correlation_id, err),
            },
            RegistryRequest::ConfirmAppointment { id } => Self::reply(
                correlation_id,
                self.registry.confirm_appointment(&id).map(|r| r.message),
            ),
            RegistryRequest::CancelAppointment { id } => Self::reply(
                correlation_id,
                self.registry.cancel_appointment(&id).map(|r| r.message),
            ),
            RegistryRequest::ListAppointments => {
                let appointments = self.registry.list_appointments();
                let mut response = RegistryResponse::ok(
                    correlation_id,
                    crate::algorithms::render_listing(&appointments),
                );
                response.appointments = appointments;
                response
            }
        }
    }

    fn reply(correlation_id: Uuid, result: Result<String, RegistryError>) -> RegistryResponse {
        match result {
            Ok(message) => RegistryResponse::ok(correlation_id, message),
            Err(err) => Self::failure(correlation_id, err),
        }
    }

    fn failure(correlation_id: Uuid, err: RegistryError) -> RegistryResponse {
        RegistryResponse::error(correlation_id, err.kind(), err.to_string())
    }
}
