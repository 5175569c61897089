use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/businesses/:id/working-hours",
            get(handlers::working_hours::get_working_hours)
                .put(handlers::working_hours::upsert_working_hours),
        )
        .route(
            "/api/businesses/:id/working-hours/:weekday",
            delete(handlers::working_hours::delete_working_hours),
        )
}
