//! Customer route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;
use tuber_treats_core::CustomerId;

use super::{Created, created};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{self, CustomerView, CustomerWithOrdersView};

/// Build the customer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(index).post(create))
        .route("/customers/{id}", get(show).delete(destroy))
}

/// Request body for creating a customer.
#[derive(Debug, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
}

/// List all customers.
///
/// GET /customers
pub async fn index(State(state): State<AppState>) -> Json<Vec<CustomerView>> {
    let store = state.store().read().await;
    Json(store.customers.iter().map(CustomerView::from).collect())
}

/// Get a customer with their orders.
///
/// GET /customers/{id}
///
/// # Errors
///
/// Returns `NotFound` if the customer does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerWithOrdersView>> {
    let store = state.store().read().await;
    let customer = store
        .customers
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;

    Ok(Json(views::customer_with_orders(&store, customer)))
}

/// Create a customer.
///
/// POST /customers
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCustomer>,
) -> Created<CustomerView> {
    let customer = state
        .store()
        .write()
        .await
        .add_customer(body.name, body.address);

    tracing::info!(customer_id = %customer.id, "Created customer");
    created(format!("/customers/{}", customer.id), CustomerView::from(&customer))
}

/// Delete a customer. Their orders are left in place.
///
/// DELETE /customers/{id}
///
/// # Errors
///
/// Returns `NotFound` if the customer does not exist.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode> {
    state
        .store()
        .write()
        .await
        .customers
        .remove(id)
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;

    tracing::info!(customer_id = %id, "Deleted customer");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tuber_treats_core::OrderId;

    use super::*;
    use crate::routes::test_state;

    fn new_customer(name: &str) -> Json<NewCustomer> {
        Json(NewCustomer {
            name: name.to_string(),
            address: "789 Yam St".to_string(),
        })
    }

    #[tokio::test]
    async fn test_index_lists_seeded_customers() {
        let Json(customers) = index(State(test_state())).await;

        let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_show_includes_orders() {
        let Json(alice) = show(State(test_state()), Path(CustomerId::new(1)))
            .await
            .unwrap();

        assert_eq!(alice.address, "123 Spud Ln");
        assert_eq!(alice.orders.len(), 1);
        assert_eq!(alice.orders[0].id, OrderId::new(1));
    }

    #[tokio::test]
    async fn test_show_missing_customer() {
        let err = show(State(test_state()), Path(CustomerId::new(99)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_and_is_retrievable() {
        let state = test_state();

        let (status, [(_, location)], Json(carol)) =
            create(State(state.clone()), new_customer("Carol")).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(carol.id, CustomerId::new(3));
        assert_eq!(location, "/customers/3");

        let Json(found) = show(State(state), Path(carol.id)).await.unwrap();
        assert_eq!(found.name, "Carol");
        assert!(found.orders.is_empty());
    }

    #[tokio::test]
    async fn test_create_in_empty_store_starts_at_one() {
        let state = AppState::new(Default::default(), Default::default());

        let (_, _, Json(first)) = create(State(state), new_customer("Carol")).await;
        assert_eq!(first.id, CustomerId::new(1));
    }

    #[tokio::test]
    async fn test_destroy_removes_customer() {
        let state = test_state();

        let status = destroy(State(state.clone()), Path(CustomerId::new(2)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(customers) = index(State(state)).await;
        assert!(customers.iter().all(|c| c.id != CustomerId::new(2)));
    }

    #[tokio::test]
    async fn test_destroy_missing_customer() {
        let err = destroy(State(test_state()), Path(CustomerId::new(99)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_destroy_leaves_orders_behind() {
        let state = test_state();
        destroy(State(state.clone()), Path(CustomerId::new(1)))
            .await
            .unwrap();

        let store = state.store().read().await;
        let order = store.orders.find(OrderId::new(1)).unwrap();
        assert_eq!(order.customer_id, CustomerId::new(1));
        assert_eq!(views::order_view(&store, order).customer_name, "");
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let state = test_state();
        destroy(State(state.clone()), Path(CustomerId::new(2)))
            .await
            .unwrap();

        let (_, _, Json(carol)) = create(State(state), new_customer("Carol")).await;
        assert_eq!(carol.id, CustomerId::new(3));
    }
}
