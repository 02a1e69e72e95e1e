//! Loomcraft Storefront library.
//!
//! Client-side logic for the product-listing page, re-expressed as an
//! explicit object graph: a [`cart::Cart`] that owns the line items
//! and writes through to a [`storage::StorageAdapter`] on every
//! mutation, a [`ui`] layer that derives candidate line items from
//! page state and renders the cart, and the independent presentational
//! modules under [`page`]. The [`controller::Page`] wires everything
//! together at startup, mirroring the page-load initialization.
//!
//! Everything runs synchronously on the caller's thread; the hosting
//! environment supplies the event loop.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod page;
pub mod storage;
pub mod ui;
