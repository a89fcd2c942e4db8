/*
[INPUT]:  Exchange parameter vocabularies and payload shapes
[OUTPUT]: Typed request structs, enums and the pass-through response type
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use requests::*;
pub use responses::{ApiData, into_data, status_payload};
