//! Product Repository

use std::{error::Error as StdError, sync::Arc};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors raised by product storage adapters.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Two products were registered under the same identifier.
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// The underlying storage failed; surfaced unchanged.
    #[error("product storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Read-only access to the product set.
///
/// Enumeration order is unspecified; consumers that need a stable order must
/// sort the snapshot themselves.
pub trait ProductRepository: Send + Sync {
    /// Returns a snapshot of every product.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the storage cannot be read.
    fn products(&self) -> Result<Vec<Arc<Product>>, RepositoryError>;

    /// Finds a single product by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the storage cannot be read.
    fn find(&self, id: ProductId) -> Result<Option<Arc<Product>>, RepositoryError> {
        Ok(self
            .products()?
            .into_iter()
            .find(|product| product.id == id))
    }
}

impl<R: ProductRepository + ?Sized> ProductRepository for Arc<R> {
    fn products(&self) -> Result<Vec<Arc<Product>>, RepositoryError> {
        (**self).products()
    }

    fn find(&self, id: ProductId) -> Result<Option<Arc<Product>>, RepositoryError> {
        (**self).find(id)
    }
}

/// Product repository held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: FxHashMap<ProductId, Arc<Product>>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given products.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateProduct`] if two products share an identifier.
    pub fn with_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, RepositoryError> {
        let mut repository = Self::new();

        for product in products {
            repository.insert(product)?;
        }

        Ok(repository)
    }

    /// Add a product.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateProduct`] if the identifier is taken.
    pub fn insert(&mut self, product: Product) -> Result<Arc<Product>, RepositoryError> {
        if self.products.contains_key(&product.id) {
            return Err(RepositoryError::DuplicateProduct(product.id));
        }

        let product = Arc::new(product);

        self.products.insert(product.id, Arc::clone(&product));

        Ok(product)
    }

    /// Get the number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn products(&self) -> Result<Vec<Arc<Product>>, RepositoryError> {
        Ok(self.products.values().cloned().collect())
    }

    fn find(&self, id: ProductId) -> Result<Option<Arc<Product>>, RepositoryError> {
        Ok(self.products.get(&id).cloned())
    }
}
