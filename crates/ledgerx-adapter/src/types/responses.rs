/*
[INPUT]:  Raw JSON payloads returned by the exchange
[OUTPUT]: Pass-through data values and synthesized status payloads
[POS]:    Data layer - response envelope handling
[UPDATE]: When the response envelope shape changes
*/

use serde_json::{Value, json};

/// Exchange payload passed through untouched (object or list of objects).
pub type ApiData = Value;

/// Payload standing in for an empty response body.
pub fn status_payload(status: u16) -> Value {
    json!({ "data": { "status": status } })
}

/// Take the `data` field out of a response envelope.
///
/// Missing `data` yields `Value::Null`.
pub fn into_data(mut payload: Value) -> ApiData {
    match payload.get_mut("data") {
        Some(data) => data.take(),
        None => Value::Null,
    }
}
