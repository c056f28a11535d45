//! Cart invariants over arbitrary sequences of operations.

use std::{collections::BTreeMap, sync::Arc};

use proptest::prelude::*;
use rusty_money::{Money, iso::GBP};

use storefront::prelude::*;

fn product(id: u32) -> Arc<Product> {
    Arc::new(Product::new(id, format!("p{id}"), Money::from_minor(i64::from(id) + 1, GBP)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: one line per distinct product, holding the sum of the
    /// quantities added for it, in first-added order.
    #[test]
    fn lines_merge_by_product(
        additions in prop::collection::vec((0u32..10, 1u32..100), 0..50)
    ) {
        let mut cart = Cart::new(GBP);
        let mut expected: BTreeMap<u32, u64> = BTreeMap::new();
        let mut order: Vec<u32> = Vec::new();

        for &(id, quantity) in &additions {
            cart.add_item(product(id), quantity)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;

            if !expected.contains_key(&id) {
                order.push(id);
            }

            *expected.entry(id).or_default() += u64::from(quantity);
        }

        prop_assert_eq!(cart.len(), expected.len());

        let ids: Vec<u32> = cart.lines().iter().map(|line| line.product().id.get()).collect();
        prop_assert_eq!(ids, order);

        for line in cart.lines() {
            prop_assert_eq!(
                Some(&u64::from(line.quantity())),
                expected.get(&line.product().id.get())
            );
        }

        let expected_total: i64 = expected
            .iter()
            .map(|(&id, &quantity)| (i64::from(id) + 1) * i64::try_from(quantity).unwrap_or(i64::MAX))
            .sum();

        prop_assert_eq!(cart.compute_total(), Money::from_minor(expected_total, GBP));
    }

    /// Property: a removed product never reappears in the lines, and
    /// removing an absent product changes nothing.
    #[test]
    fn removal_is_exact(
        ids in prop::collection::vec(0u32..10, 0..20),
        removed in 0u32..12,
    ) {
        let mut cart = Cart::new(GBP);

        for &id in &ids {
            cart.add_item(product(id), 1)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
        }

        let before = cart.len();
        let was_present = cart.line(ProductId::new(removed)).is_some();

        cart.remove_line(&product(removed));

        prop_assert!(cart.line(ProductId::new(removed)).is_none());
        prop_assert_eq!(cart.len(), if was_present { before - 1 } else { before });
    }

    /// Property: clearing always leaves an empty cart with a zero total.
    #[test]
    fn clear_empties(ids in prop::collection::vec(0u32..10, 0..20)) {
        let mut cart = Cart::new(GBP);

        for &id in &ids {
            cart.add_item(product(id), 2)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
        }

        cart.clear();

        prop_assert!(cart.lines().is_empty());
        prop_assert!(cart.compute_total().is_zero());
    }
}

#[test]
fn repeated_add_yields_single_line() -> Result<(), CartError> {
    let product_a = product(1);
    let mut cart = Cart::new(GBP);

    cart.add_item(Arc::clone(&product_a), 1)?;
    cart.add_item(Arc::clone(&product_a), 10)?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines().first().map(CartLine::quantity), Some(11));

    Ok(())
}

#[test]
fn empty_cart_total_is_exactly_zero() {
    assert_eq!(Cart::new(GBP).compute_total(), Money::from_minor(0, GBP));
}
