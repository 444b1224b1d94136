//! HTTP client core for the UISP CRM API.
//!
//! This module provides the main entry point [`UispCrmClient`], the
//! configuration types, and the query-string builder used by search and
//! list endpoints.
//!
//! # Example
//!
//! ```no_run
//! use uisp_crm_rs::UispCrmClient;
//!
//! # async fn example() -> uisp_crm_rs::Result<()> {
//! let client = UispCrmClient::new(
//!     "https://uisp.example.com/crm/api/v1.0",
//!     "your-app-key",
//! )?;
//!
//! if client.test_connection().await {
//!     println!("connected");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod query;

pub use config::{ClientConfig, RequestConfig, DEFAULT_TIMEOUT};
pub use http::{ApiResponse, UispCrmClient};
pub(crate) use http::ClientInner;
