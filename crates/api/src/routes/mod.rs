//! HTTP route handlers for the order API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                       - Liveness check
//! GET    /health/ready                 - Readiness check (store lock available)
//!
//! # Customers
//! GET    /customers                    - Customer list
//! GET    /customers/{id}               - Customer detail with orders
//! POST   /customers                    - Create customer (201)
//! DELETE /customers/{id}               - Delete customer (204)
//!
//! # Toppings
//! GET    /toppings                     - Topping list
//! GET    /toppings/{id}                - Topping detail
//!
//! # Drivers
//! GET    /tuberdrivers                 - Driver list
//! GET    /tuberdrivers/{id}            - Driver detail with deliveries
//!
//! # Orders
//! GET    /tuberorders                  - Order list
//! GET    /tuberorders/{id}             - Order detail
//! POST   /tuberorders                  - Place order (201)
//! PUT    /tuberorders/{id}?driverId=   - Assign driver
//! POST   /tuberorders/{id}/complete    - Complete (remove) order
//!
//! # Order toppings
//! GET    /tubertoppings                - Join record list
//! POST   /tubertoppings?orderId=&toppingId=   - Attach topping to order
//! DELETE /tubertoppings?orderId=&toppingId=   - Detach topping from order
//! ```

pub mod customers;
pub mod drivers;
pub mod order_toppings;
pub mod orders;
pub mod toppings;

use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, StatusCode, header},
    routing::get,
};

use crate::state::AppState;

const READINESS_TIMEOUT: Duration = Duration::from_secs(1);

/// `201 Created` response with a `Location` header.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

/// Build a `201 Created` response pointing at `location`.
pub fn created<T>(location: String, body: T) -> Created<T> {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(customers::router())
        .merge(toppings::router())
        .merge(drivers::router())
        .merge(orders::router())
        .merge(order_toppings::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the store lock cannot be taken in time.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match tokio::time::timeout(READINESS_TIMEOUT, state.store().read()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::from_config(crate::config::ApiConfig::default())
}
