//! Core types for Tuber Treats.
//!
//! This module provides type-safe wrappers for entity identifiers.

pub mod id;

pub use id::*;
