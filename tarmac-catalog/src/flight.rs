use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tarmac_core::{FlightCode, FlightDuration, Money, Schedule};

use crate::error::CatalogError;

/// A scheduled flight on the departures board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub code: FlightCode,
    pub company: String,
    pub schedule: Schedule,
    pub base_price: Money,
}

impl Flight {
    /// Build a fully validated flight from typed fields.
    pub fn new(
        code: &str,
        company: &str,
        schedule: Schedule,
        base_price: Money,
    ) -> Result<Self, CatalogError> {
        let code = FlightCode::parse(code, company)?;
        Ok(Self {
            code,
            company: company.to_string(),
            schedule,
            base_price,
        })
    }

    /// Build a flight from raw form fields: `YYYY-MM-DD` dates, `HH:MM`
    /// times and a decimal euro price. The caller is expected to have
    /// trimmed the values already.
    pub fn from_fields(
        code: &str,
        company: &str,
        departure_date: &str,
        departure_time: &str,
        arrival_date: &str,
        arrival_time: &str,
        base_price: &str,
    ) -> Result<Self, CatalogError> {
        let schedule = Schedule::parse(departure_date, departure_time, arrival_date, arrival_time)?;
        let base_price: Money = base_price.parse()?;
        Self::new(code, company, schedule, base_price)
    }

    pub fn duration(&self) -> FlightDuration {
        self.schedule.duration()
    }
}

/// A partial update to an existing flight. `None` means "keep the stored
/// value"; there is no sentinel, an explicit empty string is never a valid
/// way to leave a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightUpdate {
    pub company: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub arrival_date: Option<NaiveDate>,
    pub arrival_time: Option<NaiveTime>,
    pub base_price: Option<Money>,
}

impl FlightUpdate {
    /// True when no field is supplied. Call sites that require at least one
    /// change can refuse before touching the catalog.
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.departure_date.is_none()
            && self.departure_time.is_none()
            && self.arrival_date.is_none()
            && self.arrival_time.is_none()
            && self.base_price.is_none()
    }

    /// Merge this update over `current`, re-validating the resulting
    /// date/time pair as a whole. Returns the candidate flight; the caller
    /// decides whether to store it.
    pub(crate) fn apply_to(&self, current: &Flight) -> Result<Flight, CatalogError> {
        let schedule = Schedule::new(
            self.departure_date.unwrap_or(current.schedule.departure_date),
            self.departure_time.unwrap_or(current.schedule.departure_time),
            self.arrival_date.unwrap_or(current.schedule.arrival_date),
            self.arrival_time.unwrap_or(current.schedule.arrival_time),
        )?;
        Ok(Flight {
            code: current.code.clone(),
            company: self
                .company
                .clone()
                .unwrap_or_else(|| current.company.clone()),
            schedule,
            base_price: self.base_price.unwrap_or(current.base_price),
        })
    }
}
