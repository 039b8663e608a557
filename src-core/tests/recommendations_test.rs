mod common;

use common::{catalog, date, write_discounts, write_products};
use pricewise_core::recommendations::{RecommendationService, RecommendationServiceTrait};

#[test]
fn test_cheapest_normalized_value_ranks_first() {
    let dir = tempfile::tempdir().unwrap();
    // Alfa: 5.00 for 2kg -> 0.25 per 100g. Beta: 3.00 for 1kg -> 0.30.
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Cheese;dairy;Hochland;2;kg;5.00;RON"],
    );
    write_products(
        dir.path(),
        "Beta",
        "2024-03-01",
        &["P002;Cheese;dairy;Delaco;1;kg;3.00;RON"],
    );

    let service = RecommendationService::new(catalog(&dir));
    let ranked = service.best_value("cheese", date(2024, 3, 10)).unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].store, "Alfa");
    assert_eq!(ranked[0].value_per_unit, 0.25);
    assert_eq!(ranked[0].value_per_unit_label, "per 100g");
    assert_eq!(ranked[1].value_per_unit, 0.3);
}

#[test]
fn test_discount_changes_the_ranking() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Cheese;dairy;Hochland;1;kg;4.00;RON"],
    );
    write_products(
        dir.path(),
        "Beta",
        "2024-03-01",
        &["P002;Cheese;dairy;Delaco;1;kg;3.60;RON"],
    );
    // 25% off in Alfa brings 4.00 down to 3.00, below Beta's 3.60.
    write_discounts(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &["P001;Cheese;Hochland;1;kg;dairy;2024-03-01;2024-03-31;25"],
    );

    let service = RecommendationService::new(catalog(&dir));
    let ranked = service.best_value("Cheese", date(2024, 3, 10)).unwrap();

    assert_eq!(ranked[0].store, "Alfa");
    assert_eq!(ranked[0].final_price, 3.0);
    assert_eq!(ranked[0].discount_percent, 25.0);
    assert_eq!(ranked[0].base_price, 4.0);
    assert_eq!(ranked[1].store, "Beta");
}

#[test]
fn test_non_positive_package_quantity_is_excluded() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &[
            "P001;Cheese;dairy;Hochland;0;kg;5.00;RON",
            "P002;Cheese;dairy;Delaco;1;kg;3.00;RON",
        ],
    );

    let service = RecommendationService::new(catalog(&dir));
    let ranked = service.best_value("Cheese", date(2024, 3, 10)).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].product_id, "P002");
}

#[test]
fn test_milliliter_and_plain_unit_labels() {
    let dir = tempfile::tempdir().unwrap();
    write_products(
        dir.path(),
        "Alfa",
        "2024-03-01",
        &[
            "P001;Detergent;household;Ariel;500;ml;10.00;RON",
            "P002;Eggs;food;Matines;10;buc;12.00;RON",
        ],
    );

    let service = RecommendationService::new(catalog(&dir));

    let ranked = service.best_value("Detergent", date(2024, 3, 10)).unwrap();
    assert_eq!(ranked[0].value_per_unit, 2.0); // 10.00 / (500/100)
    assert_eq!(ranked[0].value_per_unit_label, "per 100ml");

    let ranked = service.best_value("Eggs", date(2024, 3, 10)).unwrap();
    assert_eq!(ranked[0].value_per_unit, 1.2); // 12.00 / 10
    assert_eq!(ranked[0].value_per_unit_label, "per 1 buc");
}
