//! API service modules for UISP CRM endpoints.
//!
//! Each service maps one resource group onto paths and verbs through the
//! client core. Services hold no state beyond a shared handle to the
//! client; every method issues exactly one request.

mod clients;
mod credit_notes;
mod documents;
mod invoices;
mod jobs;
mod organizations;
mod services;

pub use clients::ClientsService;
pub use credit_notes::CreditNotesService;
pub use documents::{
    CustomAttributesService, DocumentTemplatesService, DocumentsService, GeocodingService,
};
pub use invoices::InvoicesService;
pub use jobs::{JobAttachmentsService, JobCommentsService, JobTasksService, JobsService};
pub use organizations::{
    FeesService, OrganizationsService, PaymentMethodsService, PaymentPlansService,
};
pub use services::ServicesService;
