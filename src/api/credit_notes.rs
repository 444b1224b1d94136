//! Credit notes service: credit notes and credit note templates.

use std::sync::Arc;

use crate::client::query::QueryParams;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    CreditNoteReadOnly, CreditNoteSearchParams, CreditNoteTemplateReadOnly, CreditNoteWritable,
    PaginationParams,
};
use crate::Result;

/// Service for credit note operations.
pub struct CreditNotesService {
    inner: Arc<ClientInner>,
}

impl CreditNotesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of credit notes.
    pub async fn list(
        &self,
        params: Option<&CreditNoteSearchParams>,
    ) -> Result<ApiResponse<Vec<CreditNoteReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/credit-notes{query}"), None).await
    }

    /// Retrieve a specific credit note by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<CreditNoteReadOnly>> {
        self.inner.get(&format!("/credit-notes/{id}"), None).await
    }

    /// Update a credit note.
    pub async fn update(
        &self,
        id: i64,
        credit_note: &CreditNoteWritable,
    ) -> Result<ApiResponse<CreditNoteReadOnly>> {
        self.inner
            .patch(&format!("/credit-notes/{id}"), Some(credit_note), None)
            .await
    }

    /// Delete a credit note permanently.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/credit-notes/{id}"), None).await
    }

    /// Create a credit note for a client.
    pub async fn create_for_client(
        &self,
        client_id: i64,
        credit_note: &CreditNoteWritable,
    ) -> Result<ApiResponse<CreditNoteReadOnly>> {
        self.inner
            .post(
                &format!("/clients/{client_id}/credit-note"),
                Some(credit_note),
                None,
            )
            .await
    }

    /// Send a credit note to the client by email.
    pub async fn send(&self, id: i64) -> Result<ApiResponse<CreditNoteReadOnly>> {
        self.inner
            .patch(&format!("/credit-notes/{id}/send"), None::<&()>, None)
            .await
    }

    /// Regenerate the credit note PDF. With `refresh_data` the credit
    /// note is re-rendered from current client and organization data.
    pub async fn regenerate_pdf(
        &self,
        id: i64,
        refresh_data: bool,
    ) -> Result<ApiResponse<CreditNoteReadOnly>> {
        let query = if refresh_data {
            QueryParams::new().with("refreshData", 1).to_query_string()
        } else {
            String::new()
        };
        self.inner
            .patch(
                &format!("/credit-notes/{id}/regenerate-pdf{query}"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Retrieve the credit note PDF as raw bytes.
    pub async fn pdf(&self, id: i64) -> Result<Vec<u8>> {
        self.inner
            .download_file(&format!("/credit-notes/{id}/pdf"), None)
            .await
    }

    /// Retrieve a collection of credit note templates.
    pub async fn list_templates(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<CreditNoteTemplateReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/credit-note-templates{query}"), None)
            .await
    }

    /// Retrieve a credit note template by ID.
    pub async fn get_template(&self, id: i64) -> Result<ApiResponse<CreditNoteTemplateReadOnly>> {
        self.inner
            .get(&format!("/credit-note-templates/{id}"), None)
            .await
    }
}
