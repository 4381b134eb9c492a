use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use shared_database::store::ScheduleStore;

pub fn create_router(store: Arc<dyn ScheduleStore>) -> Router {
    Router::new()
        .route("/", get(|| async { "Scheduling API is running!" }))
        .nest("/doctors", doctor_routes(store.clone()))
        .nest("/appointments", appointment_routes(store))
}
