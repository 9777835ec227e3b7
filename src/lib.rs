//! # protocol-builder-client
//!
//! Rust client for the Protocol Builder REST API, plus the `api-demo` binary
//! that walks the whole endpoint surface and prints human-readable banners.
//!
//! ## Overview
//!
//! The Protocol Builder service owns flows: named workflow records, optionally
//! keyed by a caller-assigned external id, each carrying YAML flow and
//! planspace definitions. This crate wraps every endpoint the service exposes
//! with one typed method on [`ApiClient`]: flow CRUD over JSON, raw YAML
//! retrieval, and the AI assistant (status + non-streaming chat).
//!
//! Expected failures are not errors here. A wrapper gated on a success status
//! returns `None` (or `false` for delete) when the server answers with
//! anything else; [`Error`] is reserved for failures the caller cannot act on
//! locally, such as a refused connection or a body that is not the promised
//! shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use protocol_builder_client::{ApiClient, CreateFlow};
//!
//! #[tokio::main]
//! async fn main() -> protocol_builder_client::Result<()> {
//!     let client = ApiClient::new("http://localhost:3001")?;
//!
//!     let created = client
//!         .create_flow(CreateFlow::new("License Plate Check").external_id("lp-check"))
//!         .await?;
//!
//!     if let Some(flow) = created {
//!         client.delete_flow(flow.id).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`ApiClient`], its builder, and the endpoint wrappers |
//! | [`transport`] | HTTP transport over `reqwest` |
//! | [`types`] | Wire types (flows, health, AI status, chat turns) |
//! | [`render`] | Response banner printing |
//! | [`demo`] | The nine-step demo narrative driven by the `api-demo` binary |

pub mod client;
pub mod demo;
pub mod render;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiClient, ApiClientBuilder, ChatRequestBuilder, DEFAULT_BASE_URL};
pub use demo::DemoReport;
pub use types::{
    ai::{AiStatus, ChatRole, ChatTurn},
    flow::{CreateFlow, Flow, UpdateFlow},
    health::HealthStatus,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
