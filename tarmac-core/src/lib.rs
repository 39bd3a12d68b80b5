pub mod code;
pub mod money;
pub mod schedule;

pub use code::{code_matches_company, company_prefix, CodeError, FlightCode};
pub use money::{Money, MoneyError};
pub use schedule::{FlightDuration, Schedule, ScheduleError};
