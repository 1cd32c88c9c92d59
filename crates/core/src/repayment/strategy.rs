//! Repayment strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RepaymentError;

/// Extra-payment priority strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Highest annual rate first.
    Avalanche,
    /// Smallest balance first.
    Snowball,
}

impl Strategy {
    /// Parses a strategy name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RepaymentError::InvalidStrategy`] naming the offending value
    /// when it is not one of the recognized strategies.
    pub fn parse(value: &str) -> Result<Self, RepaymentError> {
        match value.trim().to_lowercase().as_str() {
            "avalanche" => Ok(Self::Avalanche),
            "snowball" => Ok(Self::Snowball),
            _ => Err(RepaymentError::InvalidStrategy(value.trim().to_string())),
        }
    }
}

impl FromStr for Strategy {
    type Err = RepaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avalanche => write!(f, "avalanche"),
            Self::Snowball => write!(f, "snowball"),
        }
    }
}
