//! Order-topping join route handlers.
//!
//! Attaching and detaching toppings goes through the join table, which is
//! also what order views read their topping names from.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;
use tuber_treats_core::{OrderId, ToppingId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{self, MessageView, OrderToppingView};

/// Build the order-topping router.
pub fn router() -> Router<AppState> {
    Router::new().route("/tubertoppings", get(index).post(attach).delete(detach))
}

/// Query identifying an order and a topping.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderToppingQuery {
    pub order_id: OrderId,
    pub topping_id: ToppingId,
}

/// List all join records.
///
/// GET /tubertoppings
pub async fn index(State(state): State<AppState>) -> Json<Vec<OrderToppingView>> {
    let store = state.store().read().await;
    Json(
        store
            .order_toppings
            .iter()
            .map(|link| views::order_topping_view(&store, link))
            .collect(),
    )
}

/// Attach a topping to an order.
///
/// POST /tubertoppings?orderId=&toppingId=
///
/// # Errors
///
/// Returns `BadRequest` if either the order or the topping does not exist.
#[instrument(skip(state))]
pub async fn attach(
    State(state): State<AppState>,
    Query(query): Query<OrderToppingQuery>,
) -> Result<Json<OrderToppingView>> {
    let mut store = state.store().write().await;

    if !store.orders.contains(query.order_id) || !store.toppings.contains(query.topping_id) {
        return Err(AppError::BadRequest(format!(
            "invalid order {} or topping {}",
            query.order_id, query.topping_id
        )));
    }

    let link = store.attach_topping(query.order_id, query.topping_id);
    tracing::info!(
        order_id = %query.order_id,
        topping_id = %query.topping_id,
        order_topping_id = %link.id,
        "Attached topping"
    );

    Ok(Json(views::order_topping_view(&store, &link)))
}

/// Detach one instance of a topping from an order.
///
/// DELETE /tubertoppings?orderId=&toppingId=
///
/// # Errors
///
/// Returns `NotFound` if the order does not exist or the topping is not on it.
#[instrument(skip(state))]
pub async fn detach(
    State(state): State<AppState>,
    Query(query): Query<OrderToppingQuery>,
) -> Result<Json<MessageView>> {
    let mut store = state.store().write().await;

    if !store.orders.contains(query.order_id) {
        return Err(AppError::NotFound(format!("order {}", query.order_id)));
    }

    store
        .detach_topping(query.order_id, query.topping_id)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "topping {} on order {}",
                query.topping_id, query.order_id
            ))
        })?;

    tracing::info!(
        order_id = %query.order_id,
        topping_id = %query.topping_id,
        "Detached topping"
    );
    Ok(Json(MessageView::new("Topping removed from order.")))
}
