/*
[INPUT]:  LEDGERX_JWT environment variable
[OUTPUT]: Up to five active future contracts printed as JSON
[POS]:    Examples - minimal client usage
[UPDATE]: When the contracts endpoint signature changes
*/

use ledgerx_adapter::*;

#[tokio::main]
async fn main() {
    let jwt_token = match std::env::var("LEDGERX_JWT") {
        Ok(token) => token,
        Err(_) => {
            eprintln!("LEDGERX_JWT is not set");
            return;
        }
    };

    let client = match LedgerxClient::new(Credentials::new(jwt_token)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let query = ContractsQuery {
        active: Some(true),
        derivative_type: Some(DerivativeType::FutureContract),
        limit: Some(5),
        ..Default::default()
    };

    match client.get_contracts(&query).await {
        Ok(contracts) => println!("{contracts}"),
        Err(e) => eprintln!("Failed to list contracts: {}", e),
    }
}
