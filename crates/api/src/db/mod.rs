//! In-memory entity store.
//!
//! # Tables
//!
//! - `customers` - Customers who place orders
//! - `drivers` - Delivery drivers
//! - `toppings` - Topping catalogue
//! - `orders` - Orders, referencing a customer and optionally a driver
//! - `order_toppings` - Join records attaching toppings to orders
//!
//! The join table is the only record of which toppings an order carries.
//! Relations are checked by the request handlers, not by the store.
//!
//! The store itself is not synchronized; `AppState` wraps it in a single
//! `RwLock` and every handler holds the lock for its whole read-modify-write.

pub mod seed;
mod table;

pub use table::Table;

use chrono::{DateTime, Utc};
use tuber_treats_core::{
    Customer, CustomerId, Driver, DriverId, Order, OrderId, OrderTopping, Topping, ToppingId,
};

/// All entity tables of the service.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub customers: Table<Customer>,
    pub drivers: Table<Driver>,
    pub toppings: Table<Topping>,
    pub orders: Table<Order>,
    pub order_toppings: Table<OrderTopping>,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer.
    pub fn add_customer(&mut self, name: impl Into<String>, address: impl Into<String>) -> Customer {
        let (name, address) = (name.into(), address.into());
        self.customers.add(|id| Customer { id, name, address })
    }

    /// Add a driver.
    pub fn add_driver(&mut self, name: impl Into<String>) -> Driver {
        let name = name.into();
        self.drivers.add(|id| Driver { id, name })
    }

    /// Add a topping.
    pub fn add_topping(&mut self, name: impl Into<String>) -> Topping {
        let name = name.into();
        self.toppings.add(|id| Topping { id, name })
    }

    /// Add an order for `customer_id` and attach `topping_ids` in order.
    ///
    /// Callers are expected to have checked that the customer and toppings
    /// exist.
    pub fn add_order(
        &mut self,
        customer_id: CustomerId,
        topping_ids: &[ToppingId],
        placed_on: DateTime<Utc>,
    ) -> Order {
        let order = self.orders.add(|id| Order {
            id,
            placed_on,
            delivered_on: None,
            customer_id,
            driver_id: None,
        });

        for &topping_id in topping_ids {
            self.attach_topping(order.id, topping_id);
        }

        order
    }

    /// Remove an order together with its join records.
    pub fn remove_order(&mut self, order_id: OrderId) -> Option<Order> {
        let order = self.orders.remove(order_id)?;
        self.order_toppings
            .remove_where(|link| link.order_id == order_id);
        Some(order)
    }

    /// Append a join record attaching `topping_id` to `order_id`.
    pub fn attach_topping(&mut self, order_id: OrderId, topping_id: ToppingId) -> OrderTopping {
        self.order_toppings.add(|id| OrderTopping {
            id,
            order_id,
            topping_id,
        })
    }

    /// Remove one join record attaching `topping_id` to `order_id`.
    ///
    /// Returns `None` if the topping is not on the order.
    pub fn detach_topping(
        &mut self,
        order_id: OrderId,
        topping_id: ToppingId,
    ) -> Option<OrderTopping> {
        self.order_toppings
            .remove_first(|link| link.links(order_id, topping_id))
    }

    /// Orders placed by a customer, in store order.
    pub fn orders_for_customer(&self, customer_id: CustomerId) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.customer_id == customer_id)
    }

    /// Orders assigned to a driver, in store order.
    pub fn deliveries_for_driver(&self, driver_id: DriverId) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.driver_id == Some(driver_id))
    }

    /// Join records of an order, in attach order.
    pub fn toppings_on_order(&self, order_id: OrderId) -> impl Iterator<Item = &OrderTopping> {
        self.order_toppings
            .iter()
            .filter(move |link| link.order_id == order_id)
    }
}
