//! Order route handlers.
//!
//! Completing an order removes it from the store along with its toppings;
//! there is no completed status.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;
use tuber_treats_core::{CustomerId, DriverId, OrderId, ToppingId};

use super::{Created, created};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{self, MessageView, OrderView};

/// Build the order router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tuberorders", get(index).post(create))
        .route("/tuberorders/{id}", get(show).put(assign_driver))
        .route("/tuberorders/{id}/complete", post(complete))
}

/// Request body for placing an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub topping_ids: Vec<ToppingId>,
}

/// Query for assigning a driver.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverQuery {
    pub driver_id: DriverId,
}

/// List all orders.
///
/// GET /tuberorders
pub async fn index(State(state): State<AppState>) -> Json<Vec<OrderView>> {
    let store = state.store().read().await;
    Json(
        store
            .orders
            .iter()
            .map(|order| views::order_view(&store, order))
            .collect(),
    )
}

/// Get an order with names resolved.
///
/// GET /tuberorders/{id}
///
/// # Errors
///
/// Returns `NotFound` if the order does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderView>> {
    let store = state.store().read().await;
    let order = store.orders.find(id).ok_or_else(|| order_not_found(id))?;

    Ok(Json(views::order_view(&store, order)))
}

/// Place an order.
///
/// Topping ids that do not resolve are dropped without error.
///
/// POST /tuberorders
///
/// # Errors
///
/// Returns `BadRequest` if the customer does not exist.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewOrder>,
) -> Result<Created<OrderView>> {
    let mut store = state.store().write().await;

    if !store.customers.contains(body.customer_id) {
        return Err(AppError::BadRequest(format!(
            "customer {} does not exist",
            body.customer_id
        )));
    }

    let (topping_ids, dropped): (Vec<_>, Vec<_>) = body
        .topping_ids
        .into_iter()
        .partition(|&topping_id| store.toppings.contains(topping_id));
    if !dropped.is_empty() {
        tracing::debug!(?dropped, "Ignoring unknown topping ids");
    }

    let order = store.add_order(body.customer_id, &topping_ids, Utc::now());
    tracing::info!(
        order_id = %order.id,
        customer_id = %order.customer_id,
        toppings = topping_ids.len(),
        "Placed order"
    );

    Ok(created(
        format!("/tuberorders/{}", order.id),
        views::order_view(&store, &order),
    ))
}

/// Assign a driver to an order.
///
/// PUT /tuberorders/{id}?driverId=
///
/// # Errors
///
/// Returns `NotFound` if the order does not exist and `BadRequest` if the
/// driver does not exist.
#[instrument(skip(state))]
pub async fn assign_driver(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Query(query): Query<AssignDriverQuery>,
) -> Result<Json<OrderView>> {
    let mut store = state.store().write().await;

    if !store.orders.contains(id) {
        return Err(order_not_found(id));
    }
    if !store.drivers.contains(query.driver_id) {
        return Err(AppError::BadRequest(format!(
            "driver {} does not exist",
            query.driver_id
        )));
    }

    let order = store
        .orders
        .find_mut(id)
        .map(|order| {
            order.driver_id = Some(query.driver_id);
            order.clone()
        })
        .ok_or_else(|| order_not_found(id))?;

    tracing::info!(order_id = %id, driver_id = %query.driver_id, "Assigned driver");
    Ok(Json(views::order_view(&store, &order)))
}

/// Complete an order, removing it and its toppings.
///
/// POST /tuberorders/{id}/complete
///
/// # Errors
///
/// Returns `NotFound` if the order does not exist.
#[instrument(skip(state))]
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<MessageView>> {
    state
        .store()
        .write()
        .await
        .remove_order(id)
        .ok_or_else(|| order_not_found(id))?;

    tracing::info!(order_id = %id, "Completed order");
    Ok(Json(MessageView::new(format!(
        "Order {id} completed and removed."
    ))))
}

fn order_not_found(id: OrderId) -> AppError {
    AppError::NotFound(format!("order {id}"))
}
