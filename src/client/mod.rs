//! API client, its builder, and the endpoint wrappers.

mod ai;
mod builder;
mod core;
mod flows;

pub use ai::ChatRequestBuilder;
pub use builder::{ApiClientBuilder, DEFAULT_BASE_URL};
pub use core::ApiClient;
