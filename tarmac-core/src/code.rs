use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Four ASCII digits, nothing else.
static CODE_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("flight code '{code}' is malformed, expected '{expected_prefix}' followed by four digits")]
    InvalidCodeFormat {
        code: String,
        expected_prefix: String,
    },
}

/// A validated flight code, e.g. `IBE0001` for Iberia.
///
/// The code is the first three letters of the operating company, uppercased,
/// followed by exactly four digits. Companies with names shorter than three
/// characters yield a correspondingly shorter prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightCode(String);

/// Uppercased three-character prefix derived from a company name.
pub fn company_prefix(company: &str) -> String {
    company.chars().take(3).flat_map(char::to_uppercase).collect()
}

/// Pure predicate: does `code` match the pattern derived from `company`?
pub fn code_matches_company(code: &str, company: &str) -> bool {
    let prefix = company_prefix(company);
    match code.strip_prefix(prefix.as_str()) {
        Some(tail) => CODE_TAIL.is_match(tail),
        None => false,
    }
}

impl FlightCode {
    /// Validate `code` against the company-derived pattern.
    pub fn parse(code: &str, company: &str) -> Result<Self, CodeError> {
        if code_matches_company(code, company) {
            Ok(Self(code.to_string()))
        } else {
            Err(CodeError::InvalidCodeFormat {
                code: code.to_string(),
                expected_prefix: company_prefix(company),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlightCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FlightCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
