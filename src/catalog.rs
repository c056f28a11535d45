//! Catalog Listing

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    paging::PagingInfo,
    products::Product,
    repository::{ProductRepository, RepositoryError},
};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Errors that can occur while listing products.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Page numbers start at 1.
    #[error("invalid page {0}; pages start at 1")]
    InvalidPage(u32),

    /// Pages must hold at least one product.
    #[error("invalid page size {0}; pages must hold at least one product")]
    InvalidPageSize(u32),

    /// The product repository could not be read.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A page of products with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsPage {
    /// Products on this page, ordered by id
    pub products: Vec<Arc<Product>>,

    /// Pagination metadata
    pub paging_info: PagingInfo,

    /// Category filter the page was listed with
    pub current_category: Option<String>,
}

impl ProductsPage {
    /// Check if the page holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Filter, order and paginate a product snapshot.
///
/// Products are eligible when no category is given or when their category
/// equals it exactly. Eligible products are ordered by id, then page `page`
/// of size `page_size` is taken. Pages past the end are empty.
///
/// # Errors
///
/// - [`CatalogError::InvalidPage`]: `page` is zero.
/// - [`CatalogError::InvalidPageSize`]: `page_size` is zero.
pub fn list_products(
    products: impl IntoIterator<Item = Arc<Product>>,
    category: Option<&str>,
    page: u32,
    page_size: u32,
) -> Result<ProductsPage, CatalogError> {
    if page == 0 {
        return Err(CatalogError::InvalidPage(page));
    }

    if page_size == 0 {
        return Err(CatalogError::InvalidPageSize(page_size));
    }

    let mut eligible: Vec<Arc<Product>> = products
        .into_iter()
        .filter(|product| category.is_none_or(|category| product.in_category(category)))
        .collect();

    eligible.sort_by_key(|product| product.id);

    let paging_info = PagingInfo {
        current_page: page,
        items_per_page: page_size,
        total_items: eligible.len(),
    };

    let products: Vec<Arc<Product>> = eligible
        .into_iter()
        .skip(paging_info.offset())
        .take(page_size as usize)
        .collect();

    debug!(
        category = category.unwrap_or("*"),
        page,
        page_size,
        total_items = paging_info.total_items,
        returned = products.len(),
        "listed products"
    );

    Ok(ProductsPage {
        products,
        paging_info,
        current_category: category.map(str::to_string),
    })
}

/// Product listing over an injected repository.
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    repository: R,
    page_size: u32,
}

impl<R: ProductRepository> Catalog<R> {
    /// Create a catalog with the default page size.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a catalog with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPageSize`] if `page_size` is zero.
    pub fn with_page_size(repository: R, page_size: u32) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize(page_size));
        }

        Ok(Self {
            repository,
            page_size,
        })
    }

    /// List page `page` of products, optionally restricted to a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPage`] if `page` is zero, or
    /// [`CatalogError::Repository`] if the repository cannot be read.
    pub fn list(&self, category: Option<&str>, page: u32) -> Result<ProductsPage, CatalogError> {
        list_products(self.repository.products()?, category, page, self.page_size)
    }

    /// Number of products on a full page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The repository backing this catalog.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}
