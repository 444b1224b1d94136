//! # uisp-crm-rs
//!
//! A typed async Rust client for the UISP CRM REST API.
//!
//! This crate maps the CRM's resources (clients, services, invoices,
//! credit notes, organizations, payment methods, documents, scheduling
//! jobs) onto typed service methods. Every method call issues exactly one
//! HTTP request; failures surface as one of nine [`Error`] variants so
//! calling code can branch on error kind instead of parsing messages.
//!
//! ## Features
//!
//! - **Typed resources**: strongly-typed models for every CRM entity
//! - **Typed failures**: a fixed error taxonomy with a stable `code()`
//!   discriminant and optional HTTP status
//! - **App-key auth**: the `X-Auth-App-Key` header on every request
//! - **Async-first**: built on `reqwest`; any number of calls may run
//!   concurrently, with no shared mutable state between them
//! - **No hidden retries**: the client never retries, caches, or
//!   deduplicates; resilience policy belongs to the caller
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use uisp_crm_rs::UispCrmClient;
//! use uisp_crm_rs::models::ClientSearchParams;
//!
//! #[tokio::main]
//! async fn main() -> uisp_crm_rs::Result<()> {
//!     let client = UispCrmClient::new(
//!         "https://uisp.example.com/crm/api/v1.0",
//!         "your-app-key",
//!     )?;
//!
//!     // List the first ten clients
//!     let params = ClientSearchParams {
//!         limit: Some(10),
//!         ..Default::default()
//!     };
//!     let response = client.clients().list(Some(&params)).await?;
//!     for item in &response.data {
//!         println!(
//!             "{} {} <{}>",
//!             item.first_name.as_deref().unwrap_or(""),
//!             item.last_name.as_deref().unwrap_or(""),
//!             item.email.as_deref().unwrap_or("-"),
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! ```rust,no_run
//! use uisp_crm_rs::{Error, UispCrmClient};
//!
//! # async fn example(client: UispCrmClient) {
//! match client.invoices().get(999).await {
//!     Ok(invoice) => println!("total: {}", invoice.data.total),
//!     Err(Error::NotFound { message }) => println!("no such invoice: {message}"),
//!     Err(err) if err.is_retryable() => println!("transient: {err}"),
//!     Err(err) => println!("failed ({}): {err}", err.code()),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ApiResponse, ClientConfig, RequestConfig, UispCrmClient};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use uisp_crm_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::query::{QueryParams, QueryValue, Scalar};
    pub use crate::client::{ApiResponse, ClientConfig, RequestConfig, UispCrmClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Shared
        CustomAttributeType, FeeType, SortDirection,
        // Clients
        ClientReadOnly, ClientSearchParams, ClientWritable,
        // Services
        ServiceReadOnly, ServiceSearchParams, ServiceStatus, ServiceUpdate, ServiceWritable,
        // Invoices & credit notes
        CreditNoteReadOnly, CreditNoteWritable, InvoiceReadOnly, InvoiceSearchParams,
        InvoiceWritable,
        // Organizations
        Fee, OrganizationReadOnly, PaymentMethodReadOnly, PaymentPlanReadOnly,
        // Documents
        DocumentReadOnly, DocumentWritable,
        // Jobs
        JobReadOnly, JobSearchParams, JobWritable,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_validates_config() {
        assert!(UispCrmClient::new("https://uisp.example.com/crm/api/v1.0", "key").is_ok());
        assert!(UispCrmClient::new("", "key").is_err());
        assert!(UispCrmClient::new("https://uisp.example.com", "").is_err());
    }

    #[test]
    fn base_url_is_normalized() {
        let client =
            UispCrmClient::new("https://uisp.example.com/crm/api/v1.0/", "key").unwrap();
        assert_eq!(
            client.config().base_url(),
            "https://uisp.example.com/crm/api/v1.0"
        );
    }
}
