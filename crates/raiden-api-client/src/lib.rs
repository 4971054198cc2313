/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Raiden node API client surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    ClientConfig,
    DEFAULT_API_VERSION,
    HttpTransport,
    RaidenClient,
    RaidenError,
    ReqwestTransport,
    Result,
    TransportRequest,
    TransportResponse,
};

// Re-export all types
pub use types::*;
