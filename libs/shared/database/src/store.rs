use anyhow::Result;
use async_trait::async_trait;

use shared_models::records::{Appointment, AppointmentFilter, Doctor};

/// Persistence operations backing the scheduling services.
///
/// Implemented by [`crate::mongo::MongoStore`] in production and by the
/// in-memory store in `shared-utils` for tests. One instance is constructed
/// at startup and injected into every cell router; nothing reaches for a
/// global connection.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn list_doctors(&self) -> Result<Vec<Doctor>>;

    async fn find_doctors_by_name(&self, name: &str) -> Result<Vec<Doctor>>;

    async fn insert_doctor(&self, doctor: Doctor) -> Result<()>;

    /// Deletes the first doctor with the given name. An absent name is a
    /// no-op, not an error.
    async fn delete_doctor(&self, name: &str) -> Result<()>;

    async fn find_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>>;

    /// Number of appointments already booked for a (date, time) slot, across
    /// all doctors.
    async fn count_slot(&self, date: &str, time: &str) -> Result<u64>;

    async fn insert_appointment(&self, appointment: Appointment) -> Result<()>;

    /// Deletes the first appointment matching every field exactly. An absent
    /// record is a no-op, not an error.
    async fn delete_appointment(&self, appointment: &Appointment) -> Result<()>;
}
