//! Driver route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tuber_treats_core::DriverId;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{self, DriverView, DriverWithDeliveriesView};

/// Build the driver router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tuberdrivers", get(index))
        .route("/tuberdrivers/{id}", get(show))
}

/// List all drivers.
///
/// GET /tuberdrivers
pub async fn index(State(state): State<AppState>) -> Json<Vec<DriverView>> {
    let store = state.store().read().await;
    Json(store.drivers.iter().map(DriverView::from).collect())
}

/// Get a driver with every order assigned to them.
///
/// GET /tuberdrivers/{id}
///
/// # Errors
///
/// Returns `NotFound` if the driver does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DriverId>,
) -> Result<Json<DriverWithDeliveriesView>> {
    let store = state.store().read().await;
    let driver = store
        .drivers
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("driver {id}")))?;

    Ok(Json(views::driver_with_deliveries(&store, driver)))
}
