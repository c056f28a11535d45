//! End-to-end behaviour over the bundled sports fixture set.

use std::path::PathBuf;

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use storefront::prelude::*;

fn store() -> TestResult<(Storefront<InMemoryProductRepository>, Cart)> {
    let mut fixture =
        Fixture::with_base_path(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"));
    fixture.load_products("sports")?;

    let cart = Cart::new(fixture.currency()?);
    let store = Storefront::new(fixture.into_repository(), DEFAULT_PAGE_SIZE)?;

    Ok((store, cart))
}

#[test]
fn menu_lists_sorted_categories() -> TestResult {
    let (store, _) = store()?;

    let menu = store.menu(Some("Soccer"))?;

    assert_eq!(menu.categories().collect::<Vec<_>>(), ["Chess", "Soccer", "Watersports"]);
    assert_eq!(menu.selected(), Some("Soccer"));

    Ok(())
}

#[test]
fn chess_listing_spans_one_page() -> TestResult {
    let (store, _) = store()?;

    let page = store.list_products(Some("Chess"), 1)?;
    let ids: Vec<u32> = page.products.iter().map(|p| p.id.get()).collect();

    assert_eq!(ids, [6, 7, 8, 9]);
    assert_eq!(page.paging_info.total_pages(), 1);

    Ok(())
}

#[test]
fn full_listing_has_three_pages() -> TestResult {
    let (store, _) = store()?;

    let last = store.list_products(None, 3)?;

    assert_eq!(last.paging_info.total_items, 9);
    assert_eq!(last.paging_info.total_pages(), 3);
    assert_eq!(last.products.len(), 1);
    assert!(!last.paging_info.has_next());

    Ok(())
}

#[test]
fn shopping_session() -> TestResult {
    let (store, mut cart) = store()?;

    assert!(store.add_to_cart(&mut cart, ProductId::new(1), 1)?);
    assert!(store.add_to_cart(&mut cart, ProductId::new(2), 2)?);
    assert!(store.add_to_cart(&mut cart, ProductId::new(1), 1)?);
    assert!(!store.add_to_cart(&mut cart, ProductId::new(404), 1)?);

    // 2 × 275.00 + 2 × 48.95
    assert_eq!(cart.compute_total(), Money::from_minor(64_790, USD));
    assert_eq!(cart.item_count(), 4);

    store.remove_from_cart(&mut cart, ProductId::new(1));

    assert_eq!(cart.compute_total(), Money::from_minor(9_790, USD));

    cart.clear();

    assert!(cart.is_empty());

    Ok(())
}
