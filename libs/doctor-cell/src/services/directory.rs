use std::sync::Arc;

use tracing::{debug, info};

use shared_database::store::ScheduleStore;
use shared_models::error::AppError;
use shared_models::records::{AppointmentFilter, Doctor};

use crate::models::{AddDoctorRequest, DoctorListing};

pub struct DoctorDirectoryService {
    store: Arc<dyn ScheduleStore>,
}

impl DoctorDirectoryService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// List doctors: the whole directory, or one group per requested name.
    pub async fn get_doctors(
        &self,
        names: Option<Vec<String>>,
    ) -> Result<DoctorListing, AppError> {
        let names = names.unwrap_or_default();

        if names.is_empty() {
            debug!("listing all doctors");
            return Ok(DoctorListing::All(self.store.list_doctors().await?));
        }

        debug!("looking up {} doctor name(s)", names.len());

        // One group per requested name, request order preserved. A name with
        // no record yields an empty group rather than being dropped.
        let mut groups = Vec::with_capacity(names.len());
        for name in &names {
            groups.push(self.store.find_doctors_by_name(name).await?);
        }

        Ok(DoctorListing::ByName(groups))
    }

    /// Add a doctor. Names are not checked for uniqueness; duplicates are
    /// permitted.
    pub async fn add_doctor(&self, request: AddDoctorRequest) -> Result<(), AppError> {
        let doctor = Doctor { name: request.name };
        self.store.insert_doctor(doctor.clone()).await?;

        info!("doctor {} has been added", doctor.name);
        Ok(())
    }

    /// Remove a doctor by name. Fails while any appointment still references
    /// the doctor; those must be cancelled or rescheduled first.
    pub async fn remove_doctor(&self, name: Option<String>) -> Result<(), AppError> {
        let name = name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::Validation("no doctor for removal was specified".to_string()))?;

        let filter = AppointmentFilter {
            doctor: Some(name.clone()),
            ..Default::default()
        };
        let scheduled = self.store.find_appointments(&filter).await?;
        if !scheduled.is_empty() {
            return Err(AppError::Conflict(name));
        }

        self.store.delete_doctor(&name).await?;

        info!("doctor {} has been removed", name);
        Ok(())
    }
}
