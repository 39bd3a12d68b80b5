use tarmac_catalog::{CatalogError, Flight, FlightCatalog, FlightQuery, FlightUpdate};
use tarmac_core::schedule::parse_time;
use tarmac_core::Money;

#[test]
fn test_board_lifecycle() {
    let mut catalog = FlightCatalog::with_sample_schedule().unwrap();
    assert_eq!(catalog.len(), 19);

    // A new flight lands on the board after everything else.
    let flight = Flight::from_fields(
        "IBE7777",
        "Iberia",
        "2026-04-01",
        "08:00",
        "2026-04-01",
        "10:20",
        "132.40",
    )
    .unwrap();
    catalog.add(flight).unwrap();
    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.flights().last().unwrap().code.as_str(), "IBE7777");

    // Re-adding the same code is rejected and changes nothing.
    let duplicate = Flight::from_fields(
        "IBE7777",
        "Iberia",
        "2026-04-02",
        "08:00",
        "2026-04-02",
        "10:20",
        "132.40",
    )
    .unwrap();
    assert!(matches!(
        catalog.add(duplicate),
        Err(CatalogError::DuplicateCode(_))
    ));
    assert_eq!(catalog.len(), 20);

    // Partial update: bump the price, leave the schedule alone.
    let update = FlightUpdate {
        base_price: Some(Money::from_cents(11000)),
        ..Default::default()
    };
    let updated = catalog.update("IBE7777", &update).unwrap().clone();
    assert_eq!(updated.base_price, Money::from_cents(11000));
    assert_eq!(updated.duration().to_string(), "2h 20m");

    // Conjunctive filtering over the seeded data.
    let query = FlightQuery {
        company_contains: Some("ryanair".to_string()),
        arrival_time: Some(parse_time("arrival time", "09:15").unwrap()),
    };
    let hits = catalog.search(&query);
    let codes: Vec<&str> = hits.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["RYN1111", "RYN4433"]);
}

#[test]
fn test_unfiltered_read_preserves_insertion_order() {
    let mut catalog = FlightCatalog::new("Seve Ballesteros", "Santander");
    for (code, company) in [("IBE0001", "Iberia"), ("RYN0002", "Ryanair"), ("VUE0003", "Vueling")] {
        let flight = Flight::from_fields(
            code,
            company,
            "2025-08-15",
            "10:30",
            "2025-08-15",
            "12:45",
            "100.00",
        )
        .unwrap();
        catalog.add(flight).unwrap();
    }

    let all = catalog.search(&FlightQuery::default());
    let codes: Vec<&str> = all.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["IBE0001", "RYN0002", "VUE0003"]);
}
