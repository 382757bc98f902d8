//! Dealership storefront domain types and decision logic.
//!
//! This crate holds the pieces of the storefront that are actual business
//! rules rather than request/response shuttling:
//!
//! - **Catalog**: products with authoritative stock counts, flat categories
//! - **Browse**: the price-band filter + sort pipeline behind the product grid
//! - **Cart**: cart lines, the add-to-cart stock reconciler, checked pricing
//!
//! Everything here is synchronous and pure; fetching and persistence live in
//! `showroom-data` and the backend it talks to.
//!
//! # Example
//!
//! ```rust,ignore
//! use showroom_commerce::prelude::*;
//!
//! let visible = browse::refine_default(&products, &filters, SortOption::PriceAsc);
//!
//! match cart::check_add_one(&snapshot, in_cart) {
//!     CartDecision::Allow => { /* issue the add-to-cart request */ }
//!     CartDecision::RejectOutOfStock => { /* toast: out of stock */ }
//!     CartDecision::RejectWouldExceedStock { available } => {
//!         /* toast: only `available` left */
//!     }
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Browse
    pub use crate::browse::{BandThresholds, PriceBand, PriceFilterSet, SortOption};

    // Cart
    pub use crate::cart::{
        CartDecision, CartItem, CartPricing, ProductSnapshot, QuantityDecision,
    };
}
