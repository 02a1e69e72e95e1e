//! Full click-path scenarios through the page controller.

use loomcraft_core::{Price, ProductId, Size};
use loomcraft_storefront::config::PageConfig;
use loomcraft_storefront::controller::Page;
use loomcraft_storefront::notify::SharedSink;
use loomcraft_storefront::storage::MemoryStorage;
use loomcraft_storefront::ui::ProductCard;
use rust_decimal::dec;

fn shirt_card() -> ProductCard {
    ProductCard {
        id: Some(ProductId::from("p1")),
        name: "Linen Shirt".to_string(),
        discount_price_text: "$10.00".to_string(),
        original_price_text: "$15.00".to_string(),
        image: "p1.jpg".to_string(),
    }
}

#[test]
fn test_add_twice_merges_and_totals() {
    let mut page = Page::new(MemoryStorage::new(), PageConfig::default());

    // Quantity 1 then quantity 2 of the same (id, size) pair.
    page.open_product(&shirt_card());
    page.add_from_modal();

    page.open_product(&shirt_card());
    page.quantity.increase();
    page.add_from_modal();

    let items = page.cart().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(page.cart().total(), Price::new(dec!(30)));
}

#[test]
fn test_distinct_sizes_are_distinct_lines() {
    let mut page = Page::new(MemoryStorage::new(), PageConfig::default());

    page.open_product(&shirt_card());
    page.select_size("M");
    page.add_from_modal();

    page.open_product(&shirt_card());
    page.select_size("L");
    page.add_from_modal();

    let items = page.cart().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].size, Size::from("M"));
    assert_eq!(items[1].size, Size::from("L"));
}

#[test]
fn test_decrement_to_zero_removes_line_and_persists() {
    let storage = MemoryStorage::new();
    let config = PageConfig::default();
    let mut page = Page::new(storage.clone(), config.clone());

    page.open_product(&shirt_card());
    page.add_from_modal();
    assert_eq!(page.cart().len(), 1);

    page.decrement(0);
    assert!(page.cart().is_empty());

    // A fresh page load sees the removal.
    let reloaded = Page::new(storage, config);
    assert!(reloaded.cart().is_empty());
}

#[test]
fn test_fragment_indices_follow_reordering() {
    let mut page = Page::new(MemoryStorage::new(), PageConfig::default());

    page.open_product(&shirt_card());
    page.select_size("S");
    page.add_from_modal();

    page.open_product(&shirt_card());
    page.select_size("L");
    let html = page.add_from_modal();
    assert!(html.contains("data-index=\"1\""));

    // Removing the first line shifts the second down to index 0; the
    // regenerated fragment must not mention index 1 anymore.
    let html = page.remove(0);
    assert!(html.contains("data-index=\"0\""));
    assert!(!html.contains("data-index=\"1\""));
    assert!(html.contains("Size: L"));
}

#[test]
fn test_notices_across_a_session() {
    let sink = SharedSink::new();
    let mut page =
        Page::new(MemoryStorage::new(), PageConfig::default()).with_sink(sink.clone());

    page.open_product(&shirt_card());
    page.add_from_modal();
    page.increment(0);
    page.clear();

    assert_eq!(
        sink.messages(),
        vec!["Linen Shirt added to cart!", "Cart cleared!"]
    );
}

#[test]
fn test_presentational_modules_do_not_touch_the_cart() {
    let mut page = Page::new(MemoryStorage::new(), PageConfig::default());

    page.menu.open();
    page.menu.follow_nav_link();
    page.gallery.set_main_image("somewhere.jpg");
    page.quantity.increase();
    page.slider.init(4);
    page.slider.next();

    assert!(page.cart().is_empty());
    assert_eq!(page.render_cart_count().trim(), "");
}
