//! Document-area services: documents, document templates, custom
//! attribute definitions, and geocoding.

use std::sync::Arc;

use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    AddressSuggestion, AddressSuggestionParams, CustomAttributeReadOnly,
    CustomAttributeSearchParams, CustomAttributeWritable, DocumentReadOnly, DocumentSearchParams,
    DocumentTemplateReadOnly, DocumentWritable, GeocodingParams, LocationData, PaginationParams,
};
use crate::Result;

/// Service for document operations.
///
/// # Example
///
/// ```no_run
/// use uisp_crm_rs::models::DocumentSearchParams;
///
/// # async fn example(client: uisp_crm_rs::UispCrmClient) -> uisp_crm_rs::Result<()> {
/// let params = DocumentSearchParams {
///     client_id: Some(42),
///     ..Default::default()
/// };
/// for doc in client.documents().list(Some(&params)).await?.data {
///     let bytes = client.documents().file(doc.id).await?;
///     println!("{}: {} bytes", doc.name, bytes.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct DocumentsService {
    inner: Arc<ClientInner>,
}

impl DocumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of documents.
    pub async fn list(
        &self,
        params: Option<&DocumentSearchParams>,
    ) -> Result<ApiResponse<Vec<DocumentReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/documents{query}"), None).await
    }

    /// Create a document.
    pub async fn create(&self, document: &DocumentWritable) -> Result<ApiResponse<DocumentReadOnly>> {
        self.inner.post("/documents", Some(document), None).await
    }

    /// Retrieve a specific document by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<DocumentReadOnly>> {
        self.inner.get(&format!("/documents/{id}"), None).await
    }

    /// Delete a document.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/documents/{id}"), None).await
    }

    /// Retrieve the document file as raw bytes.
    pub async fn file(&self, id: i64) -> Result<Vec<u8>> {
        self.inner
            .download_file(&format!("/documents/{id}/file"), None)
            .await
    }
}

/// Service for document template operations.
pub struct DocumentTemplatesService {
    inner: Arc<ClientInner>,
}

impl DocumentTemplatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of document templates.
    pub async fn list(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<DocumentTemplateReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/document-templates{query}"), None)
            .await
    }

    /// Retrieve a specific document template by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<DocumentTemplateReadOnly>> {
        self.inner
            .get(&format!("/document-templates/{id}"), None)
            .await
    }
}

/// Service for custom attribute definition operations.
pub struct CustomAttributesService {
    inner: Arc<ClientInner>,
}

impl CustomAttributesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of custom attribute definitions.
    pub async fn list(
        &self,
        params: Option<&CustomAttributeSearchParams>,
    ) -> Result<ApiResponse<Vec<CustomAttributeReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/custom-attributes{query}"), None)
            .await
    }

    /// Create a custom attribute definition.
    pub async fn create(
        &self,
        attribute: &CustomAttributeWritable,
    ) -> Result<ApiResponse<CustomAttributeReadOnly>> {
        self.inner
            .post("/custom-attributes", Some(attribute), None)
            .await
    }

    /// Retrieve a specific custom attribute definition by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<CustomAttributeReadOnly>> {
        self.inner.get(&format!("/custom-attributes/{id}"), None).await
    }

    /// Update a custom attribute definition.
    pub async fn update(
        &self,
        id: i64,
        attribute: &CustomAttributeWritable,
    ) -> Result<ApiResponse<CustomAttributeReadOnly>> {
        self.inner
            .patch(&format!("/custom-attributes/{id}"), Some(attribute), None)
            .await
    }

    /// Delete a custom attribute definition.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/custom-attributes/{id}"), None)
            .await
    }
}

/// Service for geocoding operations.
pub struct GeocodingService {
    inner: Arc<ClientInner>,
}

impl GeocodingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Geocode an address (or reverse-geocode coordinates).
    pub async fn geocode(&self, params: &GeocodingParams) -> Result<ApiResponse<LocationData>> {
        let query = params.to_query().to_query_string();
        self.inner.get(&format!("/geocode{query}"), None).await
    }

    /// Suggest addresses for a partial query.
    pub async fn suggest(
        &self,
        params: &AddressSuggestionParams,
    ) -> Result<ApiResponse<Vec<AddressSuggestion>>> {
        let query = params.to_query().to_query_string();
        self.inner
            .get(&format!("/geocode/suggest{query}"), None)
            .await
    }
}
