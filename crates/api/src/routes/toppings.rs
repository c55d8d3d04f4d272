//! Topping catalogue route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tuber_treats_core::ToppingId;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::ToppingView;

/// Build the topping router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toppings", get(index))
        .route("/toppings/{id}", get(show))
}

/// GET /toppings
pub async fn index(State(state): State<AppState>) -> Json<Vec<ToppingView>> {
    let store = state.store().read().await;
    Json(store.toppings.iter().map(ToppingView::from).collect())
}

/// GET /toppings/{id}
///
/// # Errors
///
/// Returns `NotFound` if the topping does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ToppingId>,
) -> Result<Json<ToppingView>> {
    let store = state.store().read().await;
    store
        .toppings
        .find(id)
        .map(|topping| Json(ToppingView::from(topping)))
        .ok_or_else(|| AppError::NotFound(format!("topping {id}")))
}
