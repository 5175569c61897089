use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/services", post(handlers::service::create_service))
        .route(
            "/api/services/employee/:employee_id",
            get(handlers::service::get_employee_services),
        )
        .route("/api/services/:id", put(handlers::service::update_service))
}
