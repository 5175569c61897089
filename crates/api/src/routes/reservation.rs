use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/reservations",
            post(handlers::reservation::create_reservation)
                .get(handlers::reservation::get_user_reservations),
        )
        .route(
            "/api/reservations/business/:business_id",
            get(handlers::reservation::get_business_reservations),
        )
        .route(
            "/api/reservations/:id/cancel",
            put(handlers::reservation::cancel_reservation),
        )
}
