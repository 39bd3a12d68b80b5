use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("'{value}' is not a valid {field}")]
    InvalidDate { field: &'static str, value: String },
    #[error("arrival {arrival} must be strictly after departure {departure}")]
    InvalidRange {
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },
}

/// Local departure and arrival of a flight, kept as the date/time pairs the
/// caller supplied. The arrival instant is strictly after the departure
/// instant; this is checked on every construction, so a `Schedule` can never
/// hold an inverted or zero-length leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
}

impl Schedule {
    pub fn new(
        departure_date: NaiveDate,
        departure_time: NaiveTime,
        arrival_date: NaiveDate,
        arrival_time: NaiveTime,
    ) -> Result<Self, ScheduleError> {
        let schedule = Self {
            departure_date,
            departure_time,
            arrival_date,
            arrival_time,
        };
        if schedule.arrival() <= schedule.departure() {
            return Err(ScheduleError::InvalidRange {
                departure: schedule.departure(),
                arrival: schedule.arrival(),
            });
        }
        Ok(schedule)
    }

    /// Build a schedule from `YYYY-MM-DD` dates and `HH:MM` times.
    pub fn parse(
        departure_date: &str,
        departure_time: &str,
        arrival_date: &str,
        arrival_time: &str,
    ) -> Result<Self, ScheduleError> {
        Self::new(
            parse_date("departure date", departure_date)?,
            parse_time("departure time", departure_time)?,
            parse_date("arrival date", arrival_date)?,
            parse_time("arrival time", arrival_time)?,
        )
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }

    /// Derived flight duration; always positive given the range invariant.
    pub fn duration(&self) -> FlightDuration {
        let minutes = (self.arrival() - self.departure()).num_minutes();
        FlightDuration {
            hours: minutes / 60,
            minutes: minutes % 60,
        }
    }
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ScheduleError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ScheduleError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Hours and remainder minutes between departure and arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
