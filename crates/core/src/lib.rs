//! Tuber Treats Core - Shared types library.
//!
//! This crate provides the entity types used by the Tuber Treats order API:
//! customers, drivers, toppings, orders, and the order-topping join record.
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage,
//! no HTTP. Storage and request handling live in `tuber-treats-api`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity IDs
//! - [`models`] - Entity records and the [`Entity`] trait

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
