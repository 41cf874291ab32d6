//! Products domain module.
//!
//! Immutable product value holders with category-specific tax rules. Pure
//! domain logic (no IO, no storage).

pub mod category;
pub mod product;

pub use category::{ProductCategory, TaxPolicy};
pub use product::{MAX_NET_PRICE, MAX_PRICE_SCALE, Product, ProductId};
