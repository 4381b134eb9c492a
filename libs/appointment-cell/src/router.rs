use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::store::ScheduleStore;

use crate::handlers;

pub fn appointment_routes(store: Arc<dyn ScheduleStore>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::get_appointments)
                .post(handlers::create_appointment)
                .delete(handlers::delete_appointment),
        )
        .with_state(store)
}
