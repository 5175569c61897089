use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/businesses",
            post(handlers::business::create_business)
                .get(handlers::business::list_businesses)
                .put(handlers::business::update_business),
        )
        .route("/api/businesses/me", get(handlers::business::get_my_business))
        .route("/api/businesses/:id", get(handlers::business::get_business))
}
