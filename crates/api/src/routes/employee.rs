use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/employees", post(handlers::employee::create_employee))
        .route(
            "/api/employees/business/:business_id",
            get(handlers::employee::get_business_employees),
        )
        .route(
            "/api/employees/:id",
            put(handlers::employee::update_employee).delete(handlers::employee::delete_employee),
        )
}
