/*
[INPUT]:  Order requests, message ids (mid) and contract ids
[OUTPUT]: Order acknowledgements, open orders and book state
[POS]:    HTTP layer - trading endpoints on trade.ledgerx.com
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::{LedgerxClient, Result};
use crate::types::{ApiData, CancelOrderRequest, ContractId, EditOrderRequest, NewOrderRequest};

impl LedgerxClient {
    /// Resting limit orders, straight from the exchange
    ///
    /// GET /api/open-orders
    pub async fn get_open_orders(&self) -> Result<ApiData> {
        let url = self.trade_url(&["api", "open-orders"])?;
        self.request_data::<()>(Method::GET, url, None).await
    }

    /// Place an order
    ///
    /// POST /api/orders
    ///
    /// Returns the message id (mid) of the order. Later fills and cancels for
    /// it arrive on the websocket feed under the same mid. Rate limited to 200
    /// requests per minute.
    pub async fn create_order(&self, req: &NewOrderRequest) -> Result<ApiData> {
        let url = self.trade_url(&["api", "orders"])?;
        self.request_data(Method::POST, url, Some(req)).await
    }

    /// Cancel every outstanding order of the whole organization (MPID)
    ///
    /// DELETE /api/orders
    pub async fn delete_all_orders(&self) -> Result<ApiData> {
        let url = self.trade_url(&["api", "orders"])?;
        self.request_data::<()>(Method::DELETE, url, None).await
    }

    /// Cancel a single resting limit order
    ///
    /// DELETE /api/orders/{mid}?contract_id={id}
    pub async fn delete_single_order(
        &self,
        mid: &str,
        contract_id: &ContractId,
    ) -> Result<ApiData> {
        let url = self.trade_url(&["api", "orders", mid])?;
        let req = CancelOrderRequest {
            contract_id: contract_id.clone(),
        };
        self.request_data(Method::DELETE, url, Some(&req)).await
    }

    /// Cancel and replace: atomically swap a resting limit order for a new
    /// one with a different price and size.
    ///
    /// DELETE /api/orders/{mid}/edit?contract_id={id}&price={price}&size={size}
    pub async fn patch_order(&self, mid: &str, req: &EditOrderRequest) -> Result<ApiData> {
        let url = self.trade_url(&["api", "orders", mid, "edit"])?;
        self.request_data(Method::DELETE, url, Some(req)).await
    }

    /// Current book state for a contract
    ///
    /// GET /api/book-states/{id}
    ///
    /// Rate limited to 500 requests per minute and 3000 per 10 minutes.
    pub async fn get_current_book_state(&self, contract_id: &ContractId) -> Result<ApiData> {
        let id = contract_id.to_string();
        let url = self.trade_url(&["api", "book-states", &id])?;
        self.request_data::<()>(Method::GET, url, None).await
    }
}
