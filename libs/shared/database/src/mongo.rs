use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_document},
    Client, Collection, Database,
};
use tracing::{debug, error, info};

use shared_config::AppConfig;
use shared_models::records::{Appointment, AppointmentFilter, Doctor};

use crate::store::ScheduleStore;

pub struct MongoStore {
    doctors: Collection<Doctor>,
    appointments: Collection<Appointment>,
}

impl MongoStore {
    /// Connects to the document store configured in `config` and probes it
    /// with a ping. An unreachable backend is logged rather than treated as
    /// fatal; the process keeps serving and every request surfaces a
    /// database error until the store comes back.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let client = Client::with_uri_str(config.connection_url()).await?;
        let database = client.database(&config.mongo_database);

        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => info!("document store connected"),
            Err(err) => error!("document store failed to connect: {}", err),
        }

        Ok(Self::from_database(&database))
    }

    pub fn from_database(database: &Database) -> Self {
        Self {
            doctors: database.collection("doctors"),
            appointments: database.collection("appointments"),
        }
    }
}

#[async_trait]
impl ScheduleStore for MongoStore {
    async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        let cursor = self.doctors.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_doctors_by_name(&self, name: &str) -> Result<Vec<Doctor>> {
        let cursor = self.doctors.find(doc! { "name": name }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_doctor(&self, doctor: Doctor) -> Result<()> {
        self.doctors.insert_one(doctor).await?;
        Ok(())
    }

    async fn delete_doctor(&self, name: &str) -> Result<()> {
        self.doctors.delete_one(doc! { "name": name }).await?;
        Ok(())
    }

    async fn find_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>> {
        // Unset fields are skipped during serialization, so the document
        // carries only the constrained fields.
        let filter = to_document(filter)?;
        debug!("querying appointments with {}", filter);

        let cursor = self.appointments.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count_slot(&self, date: &str, time: &str) -> Result<u64> {
        let count = self
            .appointments
            .count_documents(doc! { "date": date, "time": time })
            .await?;
        Ok(count)
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<()> {
        self.appointments.insert_one(appointment).await?;
        Ok(())
    }

    async fn delete_appointment(&self, appointment: &Appointment) -> Result<()> {
        self.appointments.delete_one(to_document(appointment)?).await?;
        Ok(())
    }
}
