/*
[INPUT]:  Endpoint parameters supplied by callers
[OUTPUT]: Serializable query/body payloads with unset fields omitted
[POS]:    Data layer - request payloads for API communication
[UPDATE]: When an endpoint gains or loses a parameter
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Asset, ContractId, ContractType, DerivativeType, OrderType, SwapPurpose};

/// Filters for `GET /trading/contracts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractsQuery {
    /// `true` for active contracts only, `false` for all contracts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative_type: Option<DerivativeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
    /// Records created before this instant (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_ts: Option<DateTime<Utc>>,
    /// Records created after this instant (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_ts: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Filters for `GET /trading/contracts/traded`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradedContractsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative_type: Option<DerivativeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerQuery {
    /// Snapshot time; the exchange defaults to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Required when asking for the `day-ahead` ticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body for `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub contract_id: ContractId,
    pub order_type: OrderType,
    /// `true` to sell, `false` to buy.
    pub is_ask: bool,
    pub size: u64,
    /// Limit price in USD cents per contract; must be a whole dollar amount.
    pub price: u64,
    /// `true` auto-cancels the order at 4PM.
    pub volatile: bool,
    pub swap_purpose: SwapPurpose,
}

impl NewOrderRequest {
    /// Limit order that persists until filled, with undisclosed swap purpose.
    pub fn limit(contract_id: impl Into<ContractId>, is_ask: bool, size: u64, price: u64) -> Self {
        Self {
            contract_id: contract_id.into(),
            order_type: OrderType::Limit,
            is_ask,
            size,
            price,
            volatile: false,
            swap_purpose: SwapPurpose::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub contract_id: ContractId,
}

/// Parameters for the cancel-and-replace endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditOrderRequest {
    pub contract_id: ContractId,
    pub price: u64,
    pub size: u64,
}
