use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::store::ScheduleStore;
use shared_models::error::AppError;
use shared_models::records::{Appointment, AppointmentFilter};

use crate::services::validation::{validate_date, validate_required_fields, validate_time};

/// Appointments allowed to share one (date, time) slot, across all doctors.
const SLOT_CAPACITY: u64 = 3;

pub struct AppointmentSchedulingService {
    store: Arc<dyn ScheduleStore>,
}

impl AppointmentSchedulingService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Appointments matching the set fields of `filter`; an empty filter
    /// returns everything.
    pub async fn get_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppError> {
        Ok(self.store.find_appointments(&filter).await?)
    }

    /// Validates and books an appointment.
    ///
    /// The slot count is a read followed by an insert, not an atomic
    /// operation: concurrent bookings for the same slot can land more than
    /// [`SLOT_CAPACITY`] records. Accepted consistency gap.
    pub async fn create_appointment(&self, details: AppointmentFilter) -> Result<(), AppError> {
        let appointment = validate_required_fields(&details)?;
        validate_time(&appointment.time)?;
        validate_date(&appointment.date)?;

        let doctors = self.store.find_doctors_by_name(&appointment.doctor).await?;
        if doctors.is_empty() {
            return Err(AppError::NotFound(appointment.doctor));
        }

        let booked = self
            .store
            .count_slot(&appointment.date, &appointment.time)
            .await?;
        debug!(
            "slot {} {} holds {} appointment(s)",
            appointment.date, appointment.time, booked
        );
        if booked >= SLOT_CAPACITY {
            warn!("slot {} {} is full", appointment.date, appointment.time);
            return Err(AppError::Capacity(format!(
                "{} {}",
                appointment.date, appointment.time
            )));
        }

        self.store.insert_appointment(appointment).await?;

        info!("appointment created successfully");
        Ok(())
    }

    /// Cancels an appointment. Every field is required so that only the one
    /// intended record can match; partial payloads are rejected before any
    /// delete is attempted.
    pub async fn delete_appointment(&self, details: AppointmentFilter) -> Result<(), AppError> {
        let appointment = validate_required_fields(&details)?;
        validate_time(&appointment.time)?;
        validate_date(&appointment.date)?;

        self.store.delete_appointment(&appointment).await?;

        info!("successfully deleted appointment");
        Ok(())
    }
}
