use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;

static DNI_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{8}[A-Z]$").expect("valid regex"));
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Check letters of the Spanish DNI, indexed by `number % 23`.
const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// The longest comment the purchase form accepts.
pub const COMMENT_MAX_CHARS: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

/// What the purchase form collects before validation. Fields mirror the
/// form: a payment method may simply not have been picked yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassengerForm {
    pub dni: String,
    pub full_name: String,
    pub email: String,
    pub payment_method: Option<PaymentMethod>,
    pub comment: Option<String>,
}

/// A validated passenger, ready to be put on a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub dni: String,
    pub full_name: String,
    pub email: String,
    pub payment_method: PaymentMethod,
    pub comment: Option<String>,
}

impl PassengerForm {
    /// Validate field by field, in form order, reporting the first failure.
    pub fn validate(self) -> Result<Passenger, BookingError> {
        let dni = self.dni.trim().to_uppercase();
        if !dni_is_valid(&dni) {
            return Err(BookingError::InvalidDni(self.dni));
        }

        let full_name = self.full_name.trim().to_string();
        if full_name.chars().count() < 3 {
            return Err(BookingError::NameTooShort(full_name));
        }

        let email = self.email.trim().to_string();
        if !EMAIL_SHAPE.is_match(&email) {
            return Err(BookingError::InvalidEmail(email));
        }

        let payment_method = self
            .payment_method
            .ok_or(BookingError::PaymentMethodRequired)?;

        if let Some(comment) = &self.comment {
            let len = comment.chars().count();
            if len > COMMENT_MAX_CHARS {
                return Err(BookingError::CommentTooLong {
                    len,
                    max: COMMENT_MAX_CHARS,
                });
            }
        }

        Ok(Passenger {
            dni,
            full_name,
            email,
            payment_method,
            comment: self.comment,
        })
    }
}

/// Shape plus mod-23 check letter.
pub fn dni_is_valid(dni: &str) -> bool {
    if !DNI_SHAPE.is_match(dni) {
        return false;
    }
    let number: u64 = match dni[..8].parse() {
        Ok(n) => n,
        Err(_) => return false,
    };
    let expected = DNI_LETTERS[(number % 23) as usize];
    dni.as_bytes()[8] == expected
}

/// Live counter for the comment field of the purchase form.
pub fn remaining_comment_chars(comment: &str) -> usize {
    COMMENT_MAX_CHARS.saturating_sub(comment.chars().count())
}
