mod common;

use common::{catalog, date, write_discounts, write_products};
use pricewise_core::basket::{BasketItem, BasketService, BasketServiceTrait};

fn item(name: &str, quantity: f64, brand: Option<&str>) -> BasketItem {
    BasketItem {
        product_name: name.to_string(),
        quantity,
        brand: brand.map(|b| b.to_string()),
    }
}

#[test]
fn test_equal_prices_keep_the_first_scanned_store() {
    let dir = tempfile::tempdir().unwrap();
    // Alfa sells Milk at 10.00 with a 10% discount valid on the query date;
    // Beta sells Milk at 9.00 with no discount. Both end up at 9.00.
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Milk;dairy;Zuzu;1;l;10.00;RON"],
    );
    write_discounts(
        dir.path(),
        "Alfa",
        "2024-03-20",
        &["P001;Milk;Zuzu;1;l;dairy;2024-03-20;2024-03-27;10"],
    );
    write_products(
        dir.path(),
        "Beta",
        "2024-03-01",
        &["P002;Milk;dairy;Napolact;1;l;9.00;RON"],
    );

    let service = BasketService::new(catalog(&dir));
    let result = service
        .optimize(&[item("Milk", 1.0, None)], date(2024, 3, 21))
        .unwrap();

    assert_eq!(result.items.len(), 1);
    // Stores are scanned in sorted order; Beta's 9.00 is not strictly
    // lower than Alfa's discounted 9.00, so Alfa keeps the line.
    assert_eq!(result.items[0].store, "Alfa");
    assert_eq!(result.items[0].price, 9.0);
    assert_eq!(result.overall_total, 9.0);
}

#[test]
fn test_strictly_cheaper_store_wins() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Milk;dairy;Zuzu;1;l;10.00;RON"],
    );
    write_products(
        dir.path(),
        "Beta",
        "2024-03-01",
        &["P002;Milk;dairy;Napolact;1;l;8.50;RON"],
    );

    let service = BasketService::new(catalog(&dir));
    let result = service
        .optimize(&[item("Milk", 2.0, None)], date(2024, 3, 10))
        .unwrap();

    assert_eq!(result.items[0].store, "Beta");
    assert_eq!(result.items[0].total, 17.0);
    assert_eq!(result.store_totals.get("Beta"), Some(&17.0));
    assert!(result.store_totals.get("Alfa").is_none());
}

#[test]
fn test_line_total_rounds_half_up() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Milk;dairy;Zuzu;1;l;10.005;RON"],
    );

    let service = BasketService::new(catalog(&dir));
    let result = service
        .optimize(&[item("Milk", 2.0, None)], date(2024, 3, 10))
        .unwrap();

    // 10.005 x 2 rounds to 20.01, not 20.00.
    assert_eq!(result.items[0].total, 20.01);
    assert_eq!(result.overall_total, 20.01);
}

#[test]
fn test_unmatched_line_is_dropped_silently() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Milk;dairy;Zuzu;1;l;10.00;RON"],
    );

    let service = BasketService::new(catalog(&dir));
    let result = service
        .optimize(
            &[item("Milk", 1.0, None), item("Caviar", 1.0, None)],
            date(2024, 3, 10),
        )
        .unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].product_name, "Milk");
    assert_eq!(result.overall_total, 10.0);
}

#[test]
fn test_brand_filter_selects_and_labels_the_line() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &[
            "P001;Milk;dairy;Zuzu;1;l;8.00;RON",
            "P002;Milk;dairy;Napolact;1;l;12.00;RON",
        ],
    );

    let service = BasketService::new(catalog(&dir));
    let result = service
        .optimize(&[item("milk", 1.0, Some("napolact"))], date(2024, 3, 10))
        .unwrap();

    // The brand filter skips the cheaper Zuzu row entirely.
    assert_eq!(result.items[0].product_id, "P002");
    assert_eq!(result.items[0].price, 12.0);
    // The line reports the requested brand filter, not the catalog casing.
    assert_eq!(result.items[0].brand, "napolact");

    // Without a filter the first matching product wins and its brand is
    // reported.
    let result = service
        .optimize(&[item("milk", 1.0, None)], date(2024, 3, 10))
        .unwrap();
    assert_eq!(result.items[0].brand, "Zuzu");
}

#[test]
fn test_optimize_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Milk;dairy;Zuzu;1;l;10.00;RON"],
    );
    write_products(
        dir.path(),
        "Beta",
        "2024-03-01",
        &["P002;Bread;bakery;Vel Pitar;0.5;kg;4.30;RON"],
    );
    write_discounts(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Milk;Zuzu;1;l;dairy;2024-03-01;2024-03-31;25"],
    );

    let service = BasketService::new(catalog(&dir));
    let items = [item("Milk", 3.0, None), item("Bread", 2.0, None)];

    let first = service.optimize(&items, date(2024, 3, 10)).unwrap();
    let second = service.optimize(&items, date(2024, 3, 10)).unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
    assert_eq!(first.overall_total, 31.1); // 3 x 7.50 + 2 x 4.30
}
