//! Data models for the UISP CRM API.
//!
//! Strongly-typed wire shapes, organized by domain:
//!
//! - [`base`] - shared enums and parameter types
//! - [`client`] - clients, bank accounts, contacts, tags, client logs
//! - [`service`] - services, change requests, prepaid periods
//! - [`invoice`] - invoices, invoice items, invoice templates
//! - [`credit_note`] - credit notes and their templates
//! - [`organization`] - organizations, payment methods, plans, fees
//! - [`document`] - documents, templates, custom attributes, geocoding
//! - [`job`] - scheduling jobs, comments, tasks, attachments
//!
//! `*Writable` structs describe create/update payloads; `*ReadOnly`
//! structs mirror what the server returns. Date fields are ISO-8601
//! strings passed through unchanged.

pub mod base;
pub mod client;
pub mod credit_note;
pub mod document;
pub mod invoice;
pub mod job;
pub mod organization;
pub mod service;

// Re-export commonly used types
pub use base::*;
pub use client::*;
pub use credit_note::*;
pub use document::*;
pub use invoice::*;
pub use job::*;
pub use organization::*;
pub use service::*;
