use serde::{Deserialize, Serialize};

use shared_models::records::Doctor;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetDoctorsRequest {
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddDoctorRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveDoctorRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Wire shape for listing doctors: a flat list when no names were requested,
/// otherwise one (possibly empty) list per requested name, in request order.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DoctorListing {
    All(Vec<Doctor>),
    ByName(Vec<Vec<Doctor>>),
}
