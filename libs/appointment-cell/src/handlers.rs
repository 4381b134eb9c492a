use std::sync::Arc;

use axum::{extract::State, Json};

use shared_database::store::ScheduleStore;
use shared_models::error::AppError;

use crate::models::{Appointment, AppointmentFilter};
use crate::services::scheduling::AppointmentSchedulingService;

/// GET /appointments - the body is an optional partial record; every set
/// field becomes an equality constraint.
#[axum::debug_handler]
pub async fn get_appointments(
    State(store): State<Arc<dyn ScheduleStore>>,
    payload: Option<Json<AppointmentFilter>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let filter = payload.map(|Json(filter)| filter).unwrap_or_default();

    let appointments = AppointmentSchedulingService::new(store)
        .get_appointments(filter)
        .await?;
    Ok(Json(appointments))
}

/// POST /appointments - books an appointment; all five fields are required.
#[axum::debug_handler]
pub async fn create_appointment(
    State(store): State<Arc<dyn ScheduleStore>>,
    Json(details): Json<AppointmentFilter>,
) -> Result<(), AppError> {
    AppointmentSchedulingService::new(store)
        .create_appointment(details)
        .await
}

/// DELETE /appointments - cancels an appointment; all five fields are
/// required to avoid deleting multiple records ambiguously.
#[axum::debug_handler]
pub async fn delete_appointment(
    State(store): State<Arc<dyn ScheduleStore>>,
    Json(details): Json<AppointmentFilter>,
) -> Result<(), AppError> {
    AppointmentSchedulingService::new(store)
        .delete_appointment(details)
        .await
}
