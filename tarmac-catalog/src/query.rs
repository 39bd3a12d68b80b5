use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::flight::Flight;

/// Optional, conjunctive search criteria over the catalog. Absent criteria
/// are ignored; an empty query matches every flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    /// Case-insensitive substring match on the company name.
    pub company_contains: Option<String>,
    /// Exact match on the local arrival time.
    pub arrival_time: Option<NaiveTime>,
}

impl FlightQuery {
    /// True when no criterion is supplied. The departures board treats an
    /// empty query as "show everything"; stricter call sites can refuse it.
    pub fn is_empty(&self) -> bool {
        self.company_contains.is_none() && self.arrival_time.is_none()
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        if let Some(needle) = &self.company_contains {
            if !flight
                .company
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(arrival) = self.arrival_time {
            if flight.schedule.arrival_time != arrival {
                return false;
            }
        }
        true
    }
}
