//! Phonestore Core - Domain types and engines.
//!
//! This crate holds the parts of the storefront worth testing rigorously:
//!
//! - [`catalog`] - In-memory product repository with nearest-price matching
//! - [`cart`] - Cart engine with (product, variant, color) line identity
//! - [`order`] - Order book with generated ids and forward-only status
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no persistence. Persistence and serving live in the `storefront`
//! crate, which wraps these engines.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod cart;
pub mod order;
pub mod types;

pub use types::*;
