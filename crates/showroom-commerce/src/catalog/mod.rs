//! Catalog module.
//!
//! Products and the flat category references they carry.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
