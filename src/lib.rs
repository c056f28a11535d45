//! Storefront
//!
//! Catalog listing, category navigation and shopping cart logic for a small
//! storefront, independent of any web framework or storage engine.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod navigation;
pub mod paging;
pub mod prelude;
pub mod products;
pub mod repository;
pub mod storefront;
pub mod tables;
