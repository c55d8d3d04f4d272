use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::{CustomerId, DriverId, OrderId, OrderToppingId, ToppingId};

/// An order placed by a customer.
///
/// The order's toppings are not stored here. They are the [`OrderTopping`]
/// join records whose `order_id` matches, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Set by the store when the order is created.
    pub placed_on: DateTime<Utc>,
    pub delivered_on: Option<DateTime<Utc>>,
    pub customer_id: CustomerId,
    pub driver_id: Option<DriverId>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

/// Join record attaching a topping to an order.
///
/// The same topping may be attached to one order more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTopping {
    pub id: OrderToppingId,
    pub order_id: OrderId,
    pub topping_id: ToppingId,
}

impl OrderTopping {
    /// Returns `true` if this record attaches `topping_id` to `order_id`.
    #[must_use]
    pub fn links(&self, order_id: OrderId, topping_id: ToppingId) -> bool {
        self.order_id == order_id && self.topping_id == topping_id
    }
}

impl Entity for OrderTopping {
    type Id = OrderToppingId;

    fn id(&self) -> OrderToppingId {
        self.id
    }
}
