use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use shared_database::store::ScheduleStore;
use shared_models::records::{Appointment, AppointmentFilter, Doctor};

/// In-memory stand-in for the document store, used by cell tests in place
/// of a live backend.
#[derive(Default)]
pub struct InMemoryScheduleStore {
    doctors: Mutex<Vec<Doctor>>,
    appointments: Mutex<Vec<Appointment>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one doctor record per name.
    pub fn with_doctors(names: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut doctors = store.doctors.lock().unwrap();
            for name in names {
                doctors.push(Doctor {
                    name: name.to_string(),
                });
            }
        }
        store
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.lock().unwrap().len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.lock().unwrap().len()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        Ok(self.doctors.lock().unwrap().clone())
    }

    async fn find_doctors_by_name(&self, name: &str) -> Result<Vec<Doctor>> {
        let doctors = self.doctors.lock().unwrap();
        Ok(doctors
            .iter()
            .filter(|doctor| doctor.name == name)
            .cloned()
            .collect())
    }

    async fn insert_doctor(&self, doctor: Doctor) -> Result<()> {
        self.doctors.lock().unwrap().push(doctor);
        Ok(())
    }

    async fn delete_doctor(&self, name: &str) -> Result<()> {
        let mut doctors = self.doctors.lock().unwrap();
        if let Some(position) = doctors.iter().position(|doctor| doctor.name == name) {
            doctors.remove(position);
        }
        Ok(())
    }

    async fn find_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>> {
        let appointments = self.appointments.lock().unwrap();
        Ok(appointments
            .iter()
            .filter(|appointment| filter.matches(appointment))
            .cloned()
            .collect())
    }

    async fn count_slot(&self, date: &str, time: &str) -> Result<u64> {
        let appointments = self.appointments.lock().unwrap();
        Ok(appointments
            .iter()
            .filter(|appointment| appointment.date == date && appointment.time == time)
            .count() as u64)
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<()> {
        self.appointments.lock().unwrap().push(appointment);
        Ok(())
    }

    async fn delete_appointment(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.appointments.lock().unwrap();
        if let Some(position) = appointments.iter().position(|stored| stored == appointment) {
            appointments.remove(position);
        }
        Ok(())
    }
}

/// Fully populated appointment payload, valid as-is for creation.
pub fn appointment_details(doctor: &str, date: &str, time: &str) -> AppointmentFilter {
    AppointmentFilter {
        doctor: Some(doctor.to_string()),
        patient: Some("Riley Chen".to_string()),
        kind: Some("checkup".to_string()),
        date: Some(date.to_string()),
        time: Some(time.to_string()),
    }
}

/// A stored appointment record matching [`appointment_details`].
pub fn booked_appointment(doctor: &str, date: &str, time: &str) -> Appointment {
    Appointment {
        doctor: doctor.to_string(),
        patient: "Riley Chen".to_string(),
        kind: "checkup".to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}
