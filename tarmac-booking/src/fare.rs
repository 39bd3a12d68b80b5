use std::fmt;

use serde::{Deserialize, Serialize};
use tarmac_core::Money;

/// Cabin class, as a multiplier over the flight's base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FareClass {
    Tourist,
    Business,
    First,
}

impl FareClass {
    pub fn multiplier(&self) -> f64 {
        match self {
            FareClass::Tourist => 1.0,
            FareClass::Business => 1.5,
            FareClass::First => 2.0,
        }
    }

    /// Final ticket price for this class, rounded to the cent.
    pub fn price(&self, base_price: Money) -> Money {
        base_price.scaled(self.multiplier())
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FareClass::Tourist => "Tourist",
            FareClass::Business => "Business",
            FareClass::First => "First",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fare_multipliers() {
        let base = Money::from_cents(12050);
        assert_eq!(FareClass::Tourist.price(base), Money::from_cents(12050));
        assert_eq!(FareClass::Business.price(base), Money::from_cents(18075));
        assert_eq!(FareClass::First.price(base), Money::from_cents(24100));
    }
}
