use std::sync::Arc;

use axum::{extract::State, Json};

use shared_database::store::ScheduleStore;
use shared_models::error::AppError;

use crate::models::{AddDoctorRequest, DoctorListing, GetDoctorsRequest, RemoveDoctorRequest};
use crate::services::directory::DoctorDirectoryService;

/// GET /doctors - the body is optional; `{names: [..]}` selects specific
/// doctors, anything else returns the whole directory.
#[axum::debug_handler]
pub async fn get_doctors(
    State(store): State<Arc<dyn ScheduleStore>>,
    payload: Option<Json<GetDoctorsRequest>>,
) -> Result<Json<DoctorListing>, AppError> {
    let names = payload.and_then(|Json(request)| request.names);

    let listing = DoctorDirectoryService::new(store).get_doctors(names).await?;
    Ok(Json(listing))
}

/// POST /doctors - `{name}` adds a new doctor record.
#[axum::debug_handler]
pub async fn add_doctor(
    State(store): State<Arc<dyn ScheduleStore>>,
    Json(request): Json<AddDoctorRequest>,
) -> Result<(), AppError> {
    DoctorDirectoryService::new(store).add_doctor(request).await
}

/// DELETE /doctors - `{name}` removes a doctor with no open appointments.
#[axum::debug_handler]
pub async fn remove_doctor(
    State(store): State<Arc<dyn ScheduleStore>>,
    payload: Option<Json<RemoveDoctorRequest>>,
) -> Result<(), AppError> {
    let name = payload.and_then(|Json(request)| request.name);

    DoctorDirectoryService::new(store).remove_doctor(name).await
}
