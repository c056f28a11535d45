//! Cart

use std::sync::Arc;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::products::{Product, ProductId};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Quantities must be positive.
    #[error("invalid quantity {0}; quantities must be positive")]
    InvalidQuantity(u32),

    /// Merging the quantity into an existing line would overflow it.
    #[error("quantity for product {0} would overflow")]
    QuantityOverflow(ProductId),

    /// A product's currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Adding the product would push a line or the cart total past what a decimal can hold.
    #[error("adding product {0} would overflow the cart total")]
    TotalOverflow(ProductId),
}

/// Exact `quantity` × `price`, or `None` if it does not fit in a decimal.
fn checked_line_amount(product: &Product, quantity: u32) -> Option<Decimal> {
    product.price.amount().checked_mul(Decimal::from(quantity))
}

/// A product and the quantity of it held in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: u32,
}

impl CartLine {
    /// Returns the product on this line.
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// Returns the quantity on this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns quantity × unit price.
    pub fn line_total(&self) -> Money<'static, Currency> {
        Money::from_decimal(self.line_amount(), self.product.price.currency())
    }

    // Every line was checked by `Cart::add_item`, so this cannot overflow.
    fn line_amount(&self) -> Decimal {
        *self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// Cart
///
/// Lines keep insertion order and there is never more than one line per product.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of `product`, merging into its existing line if present.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::QuantityOverflow`]: the merged quantity does not fit.
    /// - [`CartError::TotalOverflow`]: the line amount or cart total would not fit in a decimal.
    ///
    /// The cart is left unchanged on error.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let existing = self
            .lines
            .iter()
            .position(|line| line.product.id == product.id);

        let merged = match existing.and_then(|index| self.lines.get(index)) {
            Some(line) => line
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityOverflow(product.id))?,
            None => quantity,
        };

        // Same order of additions as `compute_total`, so a total that fits here
        // cannot overflow there.
        let total = self
            .lines
            .iter()
            .map(|line| {
                let quantity = if line.product.id == product.id {
                    merged
                } else {
                    line.quantity
                };

                (line.product.as_ref(), quantity)
            })
            .chain(existing.is_none().then_some((product.as_ref(), merged)))
            .try_fold(Decimal::ZERO, |total, (product, quantity)| {
                total.checked_add(checked_line_amount(product, quantity)?)
            });

        if total.is_none() {
            return Err(CartError::TotalOverflow(product.id));
        }

        match existing.and_then(|index| self.lines.get_mut(index)) {
            Some(line) => {
                line.quantity = merged;

                debug!(product = %product.id, quantity = merged, "merged cart line");
            }
            None => {
                debug!(product = %product.id, quantity, "added cart line");

                self.lines.push(CartLine { product, quantity });
            }
        }

        Ok(())
    }

    /// Remove the line for `product`. Does nothing if it is not in the cart.
    pub fn remove_line(&mut self, product: &Product) {
        self.remove_product(product.id);
    }

    /// Remove the line for the product with the given id, returning whether one was removed.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product.id != id);

        let removed = self.lines.len() != before;

        if removed {
            debug!(product = %id, "removed cart line");
        }

        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product, if any.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Sum of quantity × unit price over all lines; zero for an empty cart.
    pub fn compute_total(&self) -> Money<'static, Currency> {
        let total = self
            .lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total + line.line_amount());

        Money::from_decimal(total, self.currency)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
