/*
[INPUT]:  Client configuration and node API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod channels;
pub mod client;
pub mod connections;
pub mod error;
pub mod node;
pub mod payments;
pub mod request;
pub mod tokens;
pub mod transfers;
pub mod transport;

pub use error::{RaidenError, Result};
pub use request::{ApiRequest, require_non_empty, require_positive};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};

pub use client::{ClientConfig, DEFAULT_API_VERSION, RaidenClient};
