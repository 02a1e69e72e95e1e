//! Core types for Loomcraft.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod price;
pub mod size;

pub use id::ProductId;
pub use line_item::LineItem;
pub use price::Price;
pub use size::Size;
