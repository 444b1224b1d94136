//! Invoices service: invoices, invoice items, and invoice templates.

use std::sync::Arc;

use crate::client::query::QueryParams;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    InvoiceItemReadOnly, InvoiceItemWritable, InvoiceReadOnly, InvoiceSearchParams,
    InvoiceTemplateReadOnly, InvoiceWritable, PaginationParams,
};
use crate::Result;

/// Service for invoice operations.
///
/// # Example
///
/// ```no_run
/// use uisp_crm_rs::models::InvoiceSearchParams;
///
/// # async fn example(client: uisp_crm_rs::UispCrmClient) -> uisp_crm_rs::Result<()> {
/// // Overdue invoices of one client
/// let params = InvoiceSearchParams {
///     client_id: Some(42),
///     overdue: Some(1),
///     ..Default::default()
/// };
/// let invoices = client.invoices().list(Some(&params)).await?;
///
/// // Download the first one as PDF
/// if let Some(invoice) = invoices.data.first() {
///     let pdf = client.invoices().pdf(invoice.id).await?;
///     println!("{}: {} bytes", invoice.number, pdf.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct InvoicesService {
    inner: Arc<ClientInner>,
}

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of invoices.
    pub async fn list(
        &self,
        params: Option<&InvoiceSearchParams>,
    ) -> Result<ApiResponse<Vec<InvoiceReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/invoices{query}"), None).await
    }

    /// Retrieve a specific invoice by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<InvoiceReadOnly>> {
        self.inner.get(&format!("/invoices/{id}"), None).await
    }

    /// Update an invoice.
    pub async fn update(
        &self,
        id: i64,
        invoice: &InvoiceWritable,
    ) -> Result<ApiResponse<InvoiceReadOnly>> {
        self.inner
            .patch(&format!("/invoices/{id}"), Some(invoice), None)
            .await
    }

    /// Delete an invoice permanently.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/invoices/{id}"), None).await
    }

    /// Create an invoice for a client.
    pub async fn create_for_client(
        &self,
        client_id: i64,
        invoice: &InvoiceWritable,
    ) -> Result<ApiResponse<InvoiceReadOnly>> {
        self.inner
            .post(&format!("/clients/{client_id}/invoices"), Some(invoice), None)
            .await
    }

    /// Generate a preview of an invoice without persisting it.
    pub async fn preview(
        &self,
        client_id: i64,
        invoice: &InvoiceWritable,
    ) -> Result<ApiResponse<InvoiceReadOnly>> {
        self.inner
            .post(
                &format!("/clients/{client_id}/invoice-preview"),
                Some(invoice),
                None,
            )
            .await
    }

    /// Approve a draft invoice.
    pub async fn approve(&self, id: i64) -> Result<ApiResponse<InvoiceReadOnly>> {
        self.inner
            .patch(&format!("/invoices/{id}/approve"), None::<&()>, None)
            .await
    }

    /// Send an invoice to the client by email.
    pub async fn send(&self, id: i64) -> Result<ApiResponse<InvoiceReadOnly>> {
        self.inner
            .patch(&format!("/invoices/{id}/send"), None::<&()>, None)
            .await
    }

    /// Regenerate the invoice PDF. With `refresh_data` the invoice is
    /// re-rendered from current client and organization data.
    pub async fn regenerate_pdf(
        &self,
        id: i64,
        refresh_data: bool,
    ) -> Result<ApiResponse<InvoiceReadOnly>> {
        let query = if refresh_data {
            QueryParams::new().with("refreshData", 1).to_query_string()
        } else {
            String::new()
        };
        self.inner
            .patch(
                &format!("/invoices/{id}/regenerate-pdf{query}"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Void an invoice.
    pub async fn void(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .patch(&format!("/invoices/{id}/void"), None::<&()>, None)
            .await
    }

    /// Pay an invoice with a stored credit card.
    pub async fn pay_with_credit_card(
        &self,
        invoice_id: i64,
        credit_card_id: &str,
    ) -> Result<ApiResponse<()>> {
        self.inner
            .patch(
                &format!("/invoices/{invoice_id}/pay-with-credit-card/{credit_card_id}"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Retrieve the invoice PDF as raw bytes.
    pub async fn pdf(&self, id: i64) -> Result<Vec<u8>> {
        self.inner
            .download_file(&format!("/invoices/{id}/pdf"), None)
            .await
    }

    /// Retrieve an invoice item by ID.
    pub async fn get_item(&self, id: i64) -> Result<ApiResponse<InvoiceItemReadOnly>> {
        self.inner.get(&format!("/invoices/items/{id}"), None).await
    }

    /// Update an invoice item.
    pub async fn update_item(
        &self,
        id: i64,
        item: &InvoiceItemWritable,
    ) -> Result<ApiResponse<InvoiceItemReadOnly>> {
        self.inner
            .patch(&format!("/invoices/items/{id}"), Some(item), None)
            .await
    }

    /// Delete an invoice item.
    pub async fn delete_item(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/invoices/items/{id}"), None)
            .await
    }

    /// Retrieve all items of an invoice.
    pub async fn list_items(
        &self,
        invoice_id: i64,
    ) -> Result<ApiResponse<Vec<InvoiceItemReadOnly>>> {
        self.inner
            .get(&format!("/invoices/{invoice_id}/items"), None)
            .await
    }

    /// Retrieve a collection of invoice templates.
    pub async fn list_templates(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<InvoiceTemplateReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/invoice-templates{query}"), None)
            .await
    }

    /// Retrieve an invoice template by ID.
    pub async fn get_template(&self, id: i64) -> Result<ApiResponse<InvoiceTemplateReadOnly>> {
        self.inner
            .get(&format!("/invoice-templates/{id}"), None)
            .await
    }
}
