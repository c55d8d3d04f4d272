//! Response projections.
//!
//! Views flatten relations into names. Names are looked up in the store when
//! the view is built; nothing is cached on the entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tuber_treats_core::{
    Customer, CustomerId, Driver, DriverId, Order, OrderId, OrderTopping, OrderToppingId,
    Topping, ToppingId,
};

use crate::db::EntityStore;

/// Customer without relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            address: customer.address.clone(),
        }
    }
}

/// Customer detail with the orders they placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithOrdersView {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub orders: Vec<OrderView>,
}

/// Driver without relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverView {
    pub id: DriverId,
    pub name: String,
}

impl From<&Driver> for DriverView {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
        }
    }
}

/// Driver detail with the orders assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverWithDeliveriesView {
    pub id: DriverId,
    pub name: String,
    pub deliveries: Vec<OrderView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToppingView {
    pub id: ToppingId,
    pub name: String,
}

impl From<&Topping> for ToppingView {
    fn from(topping: &Topping) -> Self {
        Self {
            id: topping.id,
            name: topping.name.clone(),
        }
    }
}

/// Order with customer, driver and toppings resolved to names.
///
/// `customer_name` is empty when the customer no longer exists.
/// `driver_name` is omitted when no driver is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub placed_on: DateTime<Utc>,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    pub topping_names: Vec<String>,
}

/// Join record with the topping resolved to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderToppingView {
    pub id: OrderToppingId,
    pub order_id: OrderId,
    pub topping_name: String,
}

/// Plain confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message: String,
}

impl MessageView {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// Builders
// =============================================================================

#[must_use]
pub fn customer_with_orders(store: &EntityStore, customer: &Customer) -> CustomerWithOrdersView {
    CustomerWithOrdersView {
        id: customer.id,
        name: customer.name.clone(),
        address: customer.address.clone(),
        orders: store
            .orders_for_customer(customer.id)
            .map(|order| order_view(store, order))
            .collect(),
    }
}

#[must_use]
pub fn driver_with_deliveries(store: &EntityStore, driver: &Driver) -> DriverWithDeliveriesView {
    DriverWithDeliveriesView {
        id: driver.id,
        name: driver.name.clone(),
        deliveries: store
            .deliveries_for_driver(driver.id)
            .map(|order| order_view(store, order))
            .collect(),
    }
}

/// Project an order, resolving related names.
///
/// Join records whose topping no longer exists are left out of
/// `topping_names`.
#[must_use]
pub fn order_view(store: &EntityStore, order: &Order) -> OrderView {
    let customer_name = store
        .customers
        .find(order.customer_id)
        .map(|customer| customer.name.clone())
        .unwrap_or_default();

    let driver_name = order
        .driver_id
        .and_then(|driver_id| store.drivers.find(driver_id))
        .map(|driver| driver.name.clone());

    let topping_names = store
        .toppings_on_order(order.id)
        .filter_map(|link| store.toppings.find(link.topping_id))
        .map(|topping| topping.name.clone())
        .collect();

    OrderView {
        id: order.id,
        placed_on: order.placed_on,
        customer_name,
        driver_name,
        topping_names,
    }
}

#[must_use]
pub fn order_topping_view(store: &EntityStore, link: &OrderTopping) -> OrderToppingView {
    OrderToppingView {
        id: link.id,
        order_id: link.order_id,
        topping_name: store
            .toppings
            .find(link.topping_id)
            .map(|topping| topping.name.clone())
            .unwrap_or_default(),
    }
}
