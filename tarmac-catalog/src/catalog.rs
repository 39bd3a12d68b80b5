use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::flight::{Flight, FlightUpdate};
use crate::query::FlightQuery;

/// The flight catalog of a single airport: an ordered collection of flights,
/// keyed by their unique code, in insertion order.
///
/// The catalog is plain owned state with no interior mutability; callers
/// that need to share it pass it around explicitly, which keeps it trivial
/// to construct in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightCatalog {
    name: String,
    city: String,
    flights: Vec<Flight>,
}

impl FlightCatalog {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            flights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// All flights, in insertion order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Append a flight, rejecting duplicate codes. On error the catalog is
    /// unchanged.
    pub fn add(&mut self, flight: Flight) -> Result<(), CatalogError> {
        if self.find_by_code(flight.code.as_str()).is_some() {
            return Err(CatalogError::DuplicateCode(flight.code.to_string()));
        }
        tracing::info!(code = %flight.code, company = %flight.company, "flight added");
        self.flights.push(flight);
        Ok(())
    }

    /// Lookup by code. Absence is not an error; callers probe with this
    /// before deciding between create and update.
    pub fn find_by_code(&self, code: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.code == *code)
    }

    /// Merge `update` into the flight with `code`, re-validating the
    /// resulting schedule and re-deriving its duration. All-or-nothing: the
    /// stored flight is only replaced once the merged candidate validated.
    pub fn update(&mut self, code: &str, update: &FlightUpdate) -> Result<&Flight, CatalogError> {
        let index = self
            .flights
            .iter()
            .position(|f| f.code == *code)
            .ok_or_else(|| CatalogError::NotFound(code.to_string()))?;
        let patched = update.apply_to(&self.flights[index])?;
        tracing::info!(code = %patched.code, "flight updated");
        self.flights[index] = patched;
        Ok(&self.flights[index])
    }

    /// All flights matching every supplied criterion, in insertion order.
    /// An empty query returns the whole catalog.
    pub fn search(&self, query: &FlightQuery) -> Vec<&Flight> {
        let hits: Vec<&Flight> = self.flights.iter().filter(|f| query.matches(f)).collect();
        tracing::debug!(total = self.flights.len(), hits = hits.len(), "catalog searched");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarmac_core::Money;

    fn flight(code: &str, company: &str, arrival_time: &str, price: &str) -> Flight {
        Flight::from_fields(
            code,
            company,
            "2025-08-15",
            "10:30",
            "2025-08-15",
            arrival_time,
            price,
        )
        .unwrap()
    }

    fn catalog() -> FlightCatalog {
        let mut catalog = FlightCatalog::new("Seve Ballesteros", "Santander");
        catalog.add(flight("IBE0001", "Iberia", "12:45", "120.50")).unwrap();
        catalog.add(flight("RYN0002", "Ryanair", "13:00", "75.00")).unwrap();
        catalog.add(flight("VUE0003", "Vueling", "13:00", "99.99")).unwrap();
        catalog
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let catalog = catalog();
        let codes: Vec<&str> = catalog.flights().iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, vec!["IBE0001", "RYN0002", "VUE0003"]);
    }

    #[test]
    fn test_duplicate_code_leaves_catalog_unchanged() {
        let mut catalog = catalog();
        let before = catalog.clone();
        let err = catalog
            .add(flight("IBE0001", "Iberia", "18:00", "10.00"))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCode("IBE0001".to_string()));
        assert_eq!(catalog.flights(), before.flights());
    }

    #[test]
    fn test_find_by_code() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_code("RYN0002").unwrap().company, "Ryanair");
        assert!(catalog.find_by_code("KLM0000").is_none());
    }

    #[test]
    fn test_update_unknown_code() {
        let mut catalog = catalog();
        let err = catalog
            .update("KLM0000", &FlightUpdate::default())
            .unwrap_err();
        assert_eq!(err, CatalogError::NotFound("KLM0000".to_string()));
    }

    #[test]
    fn test_update_price_only_keeps_duration() {
        let mut catalog = catalog();
        let duration_before = catalog.find_by_code("IBE0001").unwrap().duration();
        let update = FlightUpdate {
            base_price: Some(Money::from_cents(9900)),
            ..Default::default()
        };
        catalog.update("IBE0001", &update).unwrap();
        let flight = catalog.find_by_code("IBE0001").unwrap();
        assert_eq!(flight.base_price, Money::from_cents(9900));
        assert_eq!(flight.duration(), duration_before);
        assert_eq!(flight.company, "Iberia");
    }

    #[test]
    fn test_failed_update_is_atomic() {
        let mut catalog = catalog();
        let before = catalog.find_by_code("IBE0001").unwrap().clone();
        let update = FlightUpdate {
            arrival_time: Some(tarmac_core::schedule::parse_time("arrival time", "08:00").unwrap()),
            base_price: Some(Money::from_cents(1)),
            ..Default::default()
        };
        let err = catalog.update("IBE0001", &update).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSchedule(_)));
        // Nothing was applied, not even the valid price change.
        assert_eq!(catalog.find_by_code("IBE0001").unwrap(), &before);
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        let catalog = catalog();
        let hits = catalog.search(&FlightQuery::default());
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].code.as_str(), "IBE0001");
    }

    #[test]
    fn test_search_is_conjunctive() {
        let catalog = catalog();
        let arrival = tarmac_core::schedule::parse_time("arrival time", "13:00").unwrap();

        let by_time = FlightQuery {
            arrival_time: Some(arrival),
            ..Default::default()
        };
        assert_eq!(catalog.search(&by_time).len(), 2);

        let both = FlightQuery {
            company_contains: Some("rya".to_string()),
            arrival_time: Some(arrival),
        };
        let hits = catalog.search(&both);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code.as_str(), "RYN0002");
    }
}
