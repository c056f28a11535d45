//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError, DEFAULT_PAGE_SIZE, ProductsPage, list_products},
    fixtures::{Fixture, FixtureError},
    navigation::{Menu, MenuEntry, Navigation, categories},
    paging::{PageLink, PagingInfo},
    products::{Product, ProductId},
    repository::{InMemoryProductRepository, ProductRepository, RepositoryError},
    storefront::{Storefront, StorefrontError},
};
