/*
[INPUT]:  Exchange-documented parameter vocabularies
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds contract types, assets or order flags
*/

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivativeType {
    OptionsContract,
    DayAheadSwap,
    FutureContract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    Usd,
    Eth,
    Cbtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Limit,
}

/// Regulatory purpose attached to swap orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapPurpose {
    /// Bona-fide hedge
    BfHedge,
    NonBfHedge,
    #[default]
    Undisclosed,
}

/// Contract identifier as accepted by the exchange.
///
/// Most endpoints take the numeric id; the ticker endpoint also accepts the
/// `day-ahead` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractId {
    Id(u64),
    Key(String),
}

impl ContractId {
    /// Keyword for the next-day swap on the ticker endpoint.
    pub fn day_ahead() -> Self {
        ContractId::Key("day-ahead".to_string())
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractId::Id(id) => write!(f, "{id}"),
            ContractId::Key(key) => f.write_str(key),
        }
    }
}

impl From<u64> for ContractId {
    fn from(id: u64) -> Self {
        ContractId::Id(id)
    }
}

impl From<&str> for ContractId {
    fn from(value: &str) -> Self {
        // Only canonical decimals become ids, so `007` keeps its spelling.
        match value.parse::<u64>() {
            Ok(id) if id.to_string() == value => ContractId::Id(id),
            _ => ContractId::Key(value.to_string()),
        }
    }
}

impl FromStr for ContractId {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(ContractId::from(value))
    }
}

impl From<String> for ContractId {
    fn from(value: String) -> Self {
        ContractId::from(value.as_str())
    }
}
