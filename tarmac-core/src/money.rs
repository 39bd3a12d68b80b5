use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("price '{0}' is negative")]
    Negative(String),
    #[error("price '{0}' is not a valid amount in euros")]
    Malformed(String),
}

/// A non-negative amount of euros, stored as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Scale by a fare multiplier, rounding to the nearest cent.
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            cents: (self.cents as f64 * multiplier).round() as u64,
        }
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parse a decimal euro amount: `"120.50"`, `"99.9"` or `"75"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(MoneyError::Negative(s.to_string()));
        }
        let malformed = || MoneyError::Malformed(s.to_string());

        let (euros, fraction) = match s.split_once('.') {
            Some((euros, fraction)) => (euros, fraction),
            None => (s, ""),
        };
        if euros.is_empty() || fraction.len() > 2 {
            return Err(malformed());
        }
        let euros: u64 = euros.parse().map_err(|_| malformed())?;
        let cents = match fraction.len() {
            0 => 0,
            1 | 2 => {
                let parsed: u64 = fraction.parse().map_err(|_| malformed())?;
                if fraction.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
            _ => unreachable!(),
        };
        let cents = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(malformed)?;
        Ok(Self { cents })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02} €", self.cents / 100, self.cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_decimals() {
        let price: Money = "120.50".parse().unwrap();
        assert_eq!(price.cents(), 12050);
    }

    #[test]
    fn test_parse_one_decimal() {
        let price: Money = "99.9".parse().unwrap();
        assert_eq!(price.cents(), 9990);
    }

    #[test]
    fn test_parse_whole_euros() {
        let price: Money = "75".parse().unwrap();
        assert_eq!(price.cents(), 7500);
    }

    #[test]
    fn test_negative_rejected() {
        let err = "-3".parse::<Money>().unwrap_err();
        assert_eq!(err, MoneyError::Negative("-3".to_string()));
    }

    #[test]
    fn test_sub_cent_precision_rejected() {
        assert!(matches!(
            "1.005".parse::<Money>(),
            Err(MoneyError::Malformed(_))
        ));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        // Would overflow u64 cents; must come back as an error, not a panic.
        assert_eq!(
            "200000000000000000".parse::<Money>(),
            Err(MoneyError::Malformed("200000000000000000".to_string()))
        );
        assert_eq!(
            "184467440737095516.16".parse::<Money>(),
            Err(MoneyError::Malformed("184467440737095516.16".to_string()))
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            "twelve".parse::<Money>(),
            Err(MoneyError::Malformed(_))
        ));
        assert!(matches!(".50".parse::<Money>(), Err(MoneyError::Malformed(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(12050).to_string(), "120.50 €");
        assert_eq!(Money::from_cents(7500).to_string(), "75.00 €");
    }

    #[test]
    fn test_scaled_rounds_to_cent() {
        assert_eq!(Money::from_cents(12050).scaled(1.5).cents(), 18075);
        assert_eq!(Money::from_cents(9999).scaled(1.0).cents(), 9999);
    }
}
