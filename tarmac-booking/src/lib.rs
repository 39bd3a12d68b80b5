pub mod desk;
pub mod error;
pub mod fare;
pub mod passenger;

pub use desk::{Reservation, TicketDesk, TicketQuote};
pub use error::BookingError;
pub use fare::FareClass;
pub use passenger::{Passenger, PassengerForm, PaymentMethod};
