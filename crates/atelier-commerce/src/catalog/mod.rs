//! Product catalog module.
//!
//! The catalog is supplied externally, loaded once per session, and read-only
//! from then on. Stores copy products out of it and never write back.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
