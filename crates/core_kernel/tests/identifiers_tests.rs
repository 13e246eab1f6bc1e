//! Integration tests for strongly-typed identifiers

use core_kernel::{ProductId, SaleId, UserId};

#[test]
fn test_identifier_round_trips_through_i64() {
    let id = ProductId::new(99);
    let raw: i64 = id.into();
    assert_eq!(raw, 99);
    assert_eq!(ProductId::from(raw), id);
}

#[test]
fn test_identifier_parses_from_path_segment() {
    let id: SaleId = "123".parse().unwrap();
    assert_eq!(id.value(), 123);
}

#[test]
fn test_identifier_serializes_as_plain_number() {
    let id = UserId::new(4);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "4");
}

#[test]
fn test_identifiers_are_distinct_types() {
    // Compile-time guarantee exercised at runtime: equal raw values,
    // different types.
    let product = ProductId::new(1);
    let sale = SaleId::new(1);
    assert_eq!(product.value(), sale.value());
}
