//! Loomcraft Core - Shared types library.
//!
//! This crate provides the domain types used across all Loomcraft
//! components:
//! - `storefront` - Product-page logic (cart, rendering, page modules)
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, sizes, and prices,
//!   plus the [`types::LineItem`] cart entry

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
