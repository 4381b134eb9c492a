//! Appointment payloads reuse the shared record shapes: a request body is an
//! [`AppointmentFilter`] until required-field validation completes it into an
//! [`Appointment`].

pub use shared_models::records::{Appointment, AppointmentFilter};
