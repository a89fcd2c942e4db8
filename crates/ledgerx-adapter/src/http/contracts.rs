/*
[INPUT]:  Contract ids and listing filters
[OUTPUT]: Contract listings, details, per-contract position and ticker
[POS]:    HTTP layer - contract endpoints on api.ledgerx.com
[UPDATE]: When adding contract endpoints or changing filters
*/

use reqwest::Method;

use crate::http::{LedgerxClient, Result};
use crate::types::{ApiData, ContractId, ContractsQuery, TickerQuery, TradedContractsQuery};

impl LedgerxClient {
    /// List contracts
    ///
    /// GET /trading/contracts
    pub async fn get_contracts(&self, query: &ContractsQuery) -> Result<ApiData> {
        let url = self.api_url(&["trading", "contracts"])?;
        self.request_data(Method::GET, url, Some(query)).await
    }

    /// List contracts you have traded
    ///
    /// GET /trading/contracts/traded
    pub async fn get_traded_contracts(&self, query: &TradedContractsQuery) -> Result<ApiData> {
        let url = self.api_url(&["trading", "contracts", "traded"])?;
        self.request_data(Method::GET, url, Some(query)).await
    }

    /// Contract details for a single contract id
    ///
    /// GET /trading/contracts/{id}
    pub async fn get_contract_details(&self, contract_id: &ContractId) -> Result<ApiData> {
        let id = contract_id.to_string();
        let url = self.api_url(&["trading", "contracts", &id])?;
        self.request_data::<()>(Method::GET, url, None).await
    }

    /// Your position for a given contract
    ///
    /// GET /trading/contracts/{id}/position
    pub async fn get_contract_position(&self, contract_id: &ContractId) -> Result<ApiData> {
        let id = contract_id.to_string();
        let url = self.api_url(&["trading", "contracts", &id, "position"])?;
        self.request_data::<()>(Method::GET, url, None).await
    }

    /// Best bid/ask, 24h volume and last trade for a contract. Prices in cents.
    ///
    /// GET /trading/contracts/{id}/ticker
    ///
    /// Rate limited to 10 requests per minute by the exchange. Pass
    /// [`ContractId::day_ahead`] together with an asset for the next-day swap.
    pub async fn get_contract_ticker(
        &self,
        contract_id: &ContractId,
        query: &TickerQuery,
    ) -> Result<ApiData> {
        let id = contract_id.to_string();
        let url = self.api_url(&["trading", "contracts", &id, "ticker"])?;
        self.request_data(Method::GET, url, Some(query)).await
    }
}
