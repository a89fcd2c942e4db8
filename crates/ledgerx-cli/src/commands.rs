/*
[INPUT]:  Parsed subcommand arguments
[OUTPUT]: Exchange data returned by the matching endpoint
[POS]:    Command layer - maps CLI arguments onto client calls
[UPDATE]: When the adapter gains endpoints or parameters
*/

use chrono::{DateTime, Utc};
use clap::Subcommand;
use ledgerx_adapter::{
    ApiData, Asset, ContractId, ContractType, ContractsQuery, DerivativeType, EditOrderRequest,
    LedgerxClient, NewOrderRequest, OrderType, PageQuery, Result, SwapPurpose, TickerQuery,
    TradedContractsQuery,
};
use serde::de::DeserializeOwned;

/// Parse a value using its exchange wire name (e.g. `future_contract`, `CBTC`).
fn parse_wire<T: DeserializeOwned>(value: &str) -> std::result::Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unsupported value `{value}`"))
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List contracts
    Contracts {
        #[arg(long)]
        active: Option<bool>,
        #[arg(long, value_parser = parse_wire::<ContractType>)]
        contract_type: Option<ContractType>,
        #[arg(long, value_parser = parse_wire::<DerivativeType>)]
        derivative_type: Option<DerivativeType>,
        #[arg(long, value_parser = parse_wire::<Asset>)]
        asset: Option<Asset>,
        /// RFC 3339 timestamp
        #[arg(long)]
        before_ts: Option<DateTime<Utc>>,
        /// RFC 3339 timestamp
        #[arg(long)]
        after_ts: Option<DateTime<Utc>>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// List contracts you have traded
    TradedContracts {
        #[arg(long, value_parser = parse_wire::<DerivativeType>)]
        derivative_type: Option<DerivativeType>,
        #[arg(long, value_parser = parse_wire::<Asset>)]
        asset: Option<Asset>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Contract details
    Contract { contract_id: ContractId },
    /// Your position on a contract
    Position { contract_id: ContractId },
    /// Ticker snapshot (accepts `day-ahead` with --asset)
    Ticker {
        contract_id: ContractId,
        #[arg(long)]
        time: Option<DateTime<Utc>>,
        #[arg(long, value_parser = parse_wire::<Asset>)]
        asset: Option<Asset>,
    },
    /// All your positions
    Positions {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Your trades for a position
    PositionTrades { contract_id: ContractId },
    /// Resting limit orders
    OpenOrders,
    /// Place a limit order
    CreateOrder {
        contract_id: ContractId,
        /// Sell instead of buy
        #[arg(long)]
        ask: bool,
        #[arg(long)]
        size: u64,
        /// Limit price in USD cents
        #[arg(long)]
        price: u64,
        /// Auto-cancel at 4PM
        #[arg(long)]
        volatile: bool,
        #[arg(long, value_parser = parse_wire::<SwapPurpose>, default_value = "undisclosed")]
        swap_purpose: SwapPurpose,
    },
    /// Cancel every outstanding order of the organization
    CancelAll,
    /// Cancel one resting order
    CancelOrder {
        mid: String,
        #[arg(long)]
        contract_id: ContractId,
    },
    /// Cancel and replace a resting order
    ReplaceOrder {
        mid: String,
        #[arg(long)]
        contract_id: ContractId,
        #[arg(long)]
        price: u64,
        #[arg(long)]
        size: u64,
    },
    /// Current book state for a contract
    BookState { contract_id: ContractId },
}

impl Default for Command {
    /// Up to five active future contracts.
    fn default() -> Self {
        Command::Contracts {
            active: Some(true),
            contract_type: None,
            derivative_type: Some(DerivativeType::FutureContract),
            asset: None,
            before_ts: None,
            after_ts: None,
            limit: Some(5),
            offset: None,
        }
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Contracts { .. } => "contracts",
            Command::TradedContracts { .. } => "traded-contracts",
            Command::Contract { .. } => "contract",
            Command::Position { .. } => "position",
            Command::Ticker { .. } => "ticker",
            Command::Positions { .. } => "positions",
            Command::PositionTrades { .. } => "position-trades",
            Command::OpenOrders => "open-orders",
            Command::CreateOrder { .. } => "create-order",
            Command::CancelAll => "cancel-all",
            Command::CancelOrder { .. } => "cancel-order",
            Command::ReplaceOrder { .. } => "replace-order",
            Command::BookState { .. } => "book-state",
        }
    }

    pub async fn run(self, client: &LedgerxClient) -> Result<ApiData> {
        match self {
            Command::Contracts {
                active,
                contract_type,
                derivative_type,
                asset,
                before_ts,
                after_ts,
                limit,
                offset,
            } => {
                let query = ContractsQuery {
                    active,
                    contract_type,
                    derivative_type,
                    asset,
                    before_ts,
                    after_ts,
                    limit,
                    offset,
                };
                client.get_contracts(&query).await
            }
            Command::TradedContracts {
                derivative_type,
                asset,
                limit,
                offset,
            } => {
                let query = TradedContractsQuery {
                    derivative_type,
                    asset,
                    limit,
                    offset,
                };
                client.get_traded_contracts(&query).await
            }
            Command::Contract { contract_id } => client.get_contract_details(&contract_id).await,
            Command::Position { contract_id } => client.get_contract_position(&contract_id).await,
            Command::Ticker {
                contract_id,
                time,
                asset,
            } => {
                client
                    .get_contract_ticker(&contract_id, &TickerQuery { time, asset })
                    .await
            }
            Command::Positions { limit, offset } => {
                client.get_positions(&PageQuery { limit, offset }).await
            }
            Command::PositionTrades { contract_id } => {
                client.get_trades_for_position(&contract_id).await
            }
            Command::OpenOrders => client.get_open_orders().await,
            Command::CreateOrder {
                contract_id,
                ask,
                size,
                price,
                volatile,
                swap_purpose,
            } => {
                let req = NewOrderRequest {
                    contract_id,
                    order_type: OrderType::Limit,
                    is_ask: ask,
                    size,
                    price,
                    volatile,
                    swap_purpose,
                };
                client.create_order(&req).await
            }
            Command::CancelAll => client.delete_all_orders().await,
            Command::CancelOrder { mid, contract_id } => {
                client.delete_single_order(&mid, &contract_id).await
            }
            Command::ReplaceOrder {
                mid,
                contract_id,
                price,
                size,
            } => {
                let req = EditOrderRequest {
                    contract_id,
                    price,
                    size,
                };
                client.patch_order(&mid, &req).await
            }
            Command::BookState { contract_id } => {
                client.get_current_book_state(&contract_id).await
            }
        }
    }
}
