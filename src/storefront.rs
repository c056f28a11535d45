//! Storefront
//!
//! Wires the catalog, navigation and cart operations to a single product
//! repository passed in at construction.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError, ProductsPage},
    navigation::{Menu, Navigation},
    products::ProductId,
    repository::{ProductRepository, RepositoryError},
};

/// Errors surfaced by storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart mutation failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Listing failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The product repository could not be read.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Storefront over a shared product repository.
#[derive(Debug)]
pub struct Storefront<R> {
    repository: Arc<R>,
    catalog: Catalog<Arc<R>>,
    navigation: Navigation<Arc<R>>,
}

impl<R: ProductRepository> Storefront<R> {
    /// Create a storefront listing `page_size` products per page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPageSize`] if `page_size` is zero.
    pub fn new(repository: R, page_size: u32) -> Result<Self, StorefrontError> {
        let repository = Arc::new(repository);

        Ok(Self {
            catalog: Catalog::with_page_size(Arc::clone(&repository), page_size)?,
            navigation: Navigation::new(Arc::clone(&repository)),
            repository,
        })
    }

    /// List page `page` of products, optionally restricted to a category.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError::Catalog`] if the page is invalid or the
    /// repository cannot be read.
    #[tracing::instrument(skip(self), fields(page_size = self.catalog.page_size()))]
    pub fn list_products(
        &self,
        category: Option<&str>,
        page: u32,
    ) -> Result<ProductsPage, StorefrontError> {
        Ok(self.catalog.list(category, page)?)
    }

    /// Build the category menu, flagging `selected`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError::Repository`] if the repository cannot be read.
    #[tracing::instrument(skip(self))]
    pub fn menu(&self, selected: Option<&str>) -> Result<Menu, StorefrontError> {
        Ok(self.navigation.menu(selected)?)
    }

    /// Add `quantity` of the product with id `product_id` to `cart`.
    ///
    /// Returns `false` and leaves the cart untouched when no such product exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError::Repository`] if the lookup fails, or a
    /// [`StorefrontError::Cart`] if the cart rejects the product or quantity.
    #[tracing::instrument(skip(self, cart), fields(lines = cart.len()))]
    pub fn add_to_cart(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, StorefrontError> {
        let Some(product) = self.repository.find(product_id)? else {
            warn!(product = %product_id, "add to cart ignored unknown product");

            return Ok(false);
        };

        cart.add_item(product, quantity)?;

        debug!(product = %product_id, quantity, "added to cart");

        Ok(true)
    }

    /// Remove the product with id `product_id` from `cart`.
    ///
    /// Returns whether a line was removed.
    #[tracing::instrument(skip(self, cart), fields(lines = cart.len()))]
    pub fn remove_from_cart(&self, cart: &mut Cart, product_id: ProductId) -> bool {
        cart.remove_product(product_id)
    }

    /// The repository backing this storefront.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}
