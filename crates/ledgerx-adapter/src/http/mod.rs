/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses unwrapped to their `data` payload
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod contracts;
pub mod error;
pub mod positions;
pub mod trade;

pub use error::{LedgerxError, Result};

pub use client::{ClientConfig, Credentials, LedgerxClient};
