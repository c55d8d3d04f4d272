//! Entity records stored by the order API.
//!
//! Relations are held as ids only (`Order::customer_id`,
//! `OrderTopping::topping_id`, ...). Names are resolved at read time.

mod customer;
mod driver;
mod order;
mod topping;

pub use customer::Customer;
pub use driver::Driver;
pub use order::{Order, OrderTopping};
pub use topping::Topping;

/// A record with a store-assigned integer id.
pub trait Entity {
    /// The id type of this entity.
    type Id: Copy + Eq + From<i32>;

    /// The id of this record.
    fn id(&self) -> Self::Id;
}
