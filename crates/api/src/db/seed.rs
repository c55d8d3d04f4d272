//! Startup sample data.

use chrono::{DateTime, Duration, Utc};

use super::EntityStore;

/// Fill an empty store with the sample data set.
///
/// Two customers, two drivers, three toppings, and one unassigned order for
/// the first customer, placed two hours before `now`, carrying the first two
/// toppings.
pub fn seed(store: &mut EntityStore, now: DateTime<Utc>) {
    let alice = store.add_customer("Alice", "123 Spud Ln");
    store.add_customer("Bob", "456 Tater Ave");

    store.add_driver("Driver Dan");
    store.add_driver("Driver Dana");

    let chives = store.add_topping("Chives");
    let cheddar = store.add_topping("Cheddar");
    store.add_topping("Sour Cream");

    store.add_order(alice.id, &[chives.id, cheddar.id], now - Duration::hours(2));

    tracing::info!(
        customers = store.customers.len(),
        drivers = store.drivers.len(),
        toppings = store.toppings.len(),
        orders = store.orders.len(),
        "Seeded entity store"
    );
}
