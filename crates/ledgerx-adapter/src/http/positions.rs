/*
[INPUT]:  Pagination and contract ids
[OUTPUT]: Account positions and per-position trades
[POS]:    HTTP layer - position endpoints on api.ledgerx.com
[UPDATE]: When adding position endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{LedgerxClient, Result};
use crate::types::{ApiData, ContractId, PageQuery};

impl LedgerxClient {
    /// All your positions
    ///
    /// GET /trading/positions
    pub async fn get_positions(&self, page: &PageQuery) -> Result<ApiData> {
        let url = self.api_url(&["trading", "positions"])?;
        self.request_data(Method::GET, url, Some(page)).await
    }

    /// Your trades for the position on a contract
    ///
    /// GET /trading/positions/{id}/trades
    pub async fn get_trades_for_position(&self, contract_id: &ContractId) -> Result<ApiData> {
        let id = contract_id.to_string();
        let url = self.api_url(&["trading", "positions", &id, "trades"])?;
        self.request_data::<()>(Method::GET, url, None).await
    }
}
