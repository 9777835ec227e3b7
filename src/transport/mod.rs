//! HTTP transport layer over `reqwest`.

mod http;

pub use http::{HttpTransport, RawResponse};
