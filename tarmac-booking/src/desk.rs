use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tarmac_catalog::FlightCatalog;
use tarmac_core::{FlightCode, FlightDuration, Money};
use uuid::Uuid;

use crate::error::BookingError;
use crate::fare::FareClass;
use crate::passenger::Passenger;

/// The ticket desk prices and confirms tickets against a catalog it only
/// reads. Purchases are simulated: nothing is persisted and the catalog is
/// never mutated.
#[derive(Debug)]
pub struct TicketDesk<'a> {
    catalog: &'a FlightCatalog,
}

/// A priced ticket for one flight in one fare class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketQuote {
    pub flight_code: FlightCode,
    pub company: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration: FlightDuration,
    pub fare_class: FareClass,
    pub total: Money,
}

/// The simulated outcome of a confirmed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reference: Uuid,
    pub flight_code: FlightCode,
    pub passenger: Passenger,
    pub fare_class: FareClass,
    pub total: Money,
    pub reserved_at: DateTime<Utc>,
}

impl<'a> TicketDesk<'a> {
    pub fn new(catalog: &'a FlightCatalog) -> Self {
        Self { catalog }
    }

    /// Price a ticket for the given flight and fare class.
    pub fn quote(&self, code: &str, fare_class: FareClass) -> Result<TicketQuote, BookingError> {
        let flight = self
            .catalog
            .find_by_code(code)
            .ok_or_else(|| BookingError::UnknownFlight(code.to_string()))?;
        Ok(TicketQuote {
            flight_code: flight.code.clone(),
            company: flight.company.clone(),
            departure: flight.schedule.departure(),
            arrival: flight.schedule.arrival(),
            duration: flight.duration(),
            fare_class,
            total: fare_class.price(flight.base_price),
        })
    }

    /// Confirm a quote for a validated passenger.
    pub fn reserve(&self, quote: &TicketQuote, passenger: Passenger) -> Reservation {
        let reservation = Reservation {
            reference: Uuid::new_v4(),
            flight_code: quote.flight_code.clone(),
            passenger,
            fare_class: quote.fare_class,
            total: quote.total,
            reserved_at: Utc::now(),
        };
        tracing::info!(
            reference = %reservation.reference,
            flight = %reservation.flight_code,
            total = %reservation.total,
            "reservation confirmed"
        );
        reservation
    }
}

impl TicketQuote {
    /// The confirmation text shown to the passenger before reserving.
    pub fn summary(&self, passenger: &Passenger) -> String {
        format!(
            "FLIGHT: {} ({})\n\
             Departure: {}\n\
             Arrival: {}\n\
             Duration: {}\n\
             Class: {}\n\
             Final price: {}\n\
             PASSENGER: {} (DNI {}, {})",
            self.flight_code,
            self.company,
            self.departure.format("%Y-%m-%d %H:%M"),
            self.arrival.format("%Y-%m-%d %H:%M"),
            self.duration,
            self.fare_class,
            self.total,
            passenger.full_name,
            passenger.dni,
            passenger.email,
        )
    }
}
