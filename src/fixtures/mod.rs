//! Fixtures

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    products::Product,
    repository::{InMemoryProductRepository, RepositoryError},
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Repository construction error
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products loaded so far
    repository: InMemoryProductRepository,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            repository: InMemoryProductRepository::new(),
            currency: None,
        }
    }

    /// Load a named fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the products fixture cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?;

        Ok(fixture)
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a product id
    /// is repeated, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.load_products_str(&contents)?;

        debug!(path = %file_path.display(), products = self.repository.len(), "loaded product fixture");

        Ok(self)
    }

    /// Load products from YAML source
    ///
    /// Nothing is loaded unless every product in the source is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, if a product id is
    /// repeated, or if there are currency mismatches.
    pub fn load_products_str(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: products::ProductsFixture = serde_norway::from_str(yaml)?;

        let mut repository = self.repository.clone();
        let mut currency = self.currency;

        for product_fixture in fixture.products {
            let product = Product::try_from(product_fixture)?;
            let product_currency = product.price.currency();

            // Validate currency consistency
            match currency {
                Some(existing_currency) if existing_currency != product_currency => {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(product_currency),
            }

            repository.insert(product)?;
        }

        self.repository = repository;
        self.currency = currency;

        Ok(self)
    }

    /// Currency shared by every loaded product
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCurrency`] if no products have been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Repository of loaded products
    pub fn repository(&self) -> &InMemoryProductRepository {
        &self.repository
    }

    /// Consume the fixture, returning its repository
    pub fn into_repository(self) -> InMemoryProductRepository {
        self.repository
    }
}
