use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::store::ScheduleStore;

use crate::handlers;

pub fn doctor_routes(store: Arc<dyn ScheduleStore>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::get_doctors)
                .post(handlers::add_doctor)
                .delete(handlers::remove_doctor),
        )
        .with_state(store)
}
