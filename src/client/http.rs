//! HTTP client implementation for the UISP CRM API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::api::{
    ClientsService, CreditNotesService, CustomAttributesService, DocumentTemplatesService,
    DocumentsService, FeesService, GeocodingService, InvoicesService, JobAttachmentsService,
    JobCommentsService, JobTasksService, JobsService, OrganizationsService,
    PaymentMethodsService, PaymentPlansService, ServicesService,
};
use crate::error::CONFIGURATION_FAILURE;
use crate::{Error, Result};

use super::config::{ClientConfig, RequestConfig};

/// Header carrying the UISP CRM app key on every request.
const APP_KEY_HEADER: HeaderName = HeaderName::from_static("x-auth-app-key");

/// The main client for interacting with the UISP CRM API.
///
/// The client owns the transport and configuration and exposes one
/// accessor per API resource group. Cloning is cheap (the transport is
/// shared); any number of requests may run concurrently, each with its own
/// request/response lifecycle. Dropping a returned future aborts the
/// underlying request.
///
/// # Example
///
/// ```no_run
/// use uisp_crm_rs::UispCrmClient;
///
/// # async fn example() -> uisp_crm_rs::Result<()> {
/// let client = UispCrmClient::new(
///     "https://uisp.example.com/crm/api/v1.0",
///     "your-app-key",
/// )?;
///
/// let clients = client.clients().list(None).await?;
/// println!("found {} clients", clients.data.len());
///
/// let invoice = client.invoices().get(42).await?;
/// println!("invoice {} total {}", invoice.data.number, invoice.data.total);
/// # Ok(())
/// # }
/// ```
pub struct UispCrmClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl UispCrmClient {
    /// Create a client from a base URL and app key with default options.
    ///
    /// Fails with a configuration error if either value is empty, before
    /// any network call is made.
    pub fn new(base_url: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url, app_key)?)
    }

    /// Create a client with a custom [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("uisp-crm-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Verify connectivity and authentication by listing organizations.
    pub async fn test_connection(&self) -> bool {
        match self.organizations().list().await {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(code = err.code(), "connection test failed: {err}");
                false
            }
        }
    }

    /// Get the clients service.
    pub fn clients(&self) -> ClientsService {
        ClientsService::new(self.inner.clone())
    }

    /// Get the services service.
    pub fn services(&self) -> ServicesService {
        ServicesService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the credit notes service.
    pub fn credit_notes(&self) -> CreditNotesService {
        CreditNotesService::new(self.inner.clone())
    }

    /// Get the organizations service.
    pub fn organizations(&self) -> OrganizationsService {
        OrganizationsService::new(self.inner.clone())
    }

    /// Get the payment methods service.
    pub fn payment_methods(&self) -> PaymentMethodsService {
        PaymentMethodsService::new(self.inner.clone())
    }

    /// Get the payment plans service.
    pub fn payment_plans(&self) -> PaymentPlansService {
        PaymentPlansService::new(self.inner.clone())
    }

    /// Get the fees service.
    pub fn fees(&self) -> FeesService {
        FeesService::new(self.inner.clone())
    }

    /// Get the documents service.
    pub fn documents(&self) -> DocumentsService {
        DocumentsService::new(self.inner.clone())
    }

    /// Get the document templates service.
    pub fn document_templates(&self) -> DocumentTemplatesService {
        DocumentTemplatesService::new(self.inner.clone())
    }

    /// Get the custom attributes service.
    pub fn custom_attributes(&self) -> CustomAttributesService {
        CustomAttributesService::new(self.inner.clone())
    }

    /// Get the geocoding service.
    pub fn geocoding(&self) -> GeocodingService {
        GeocodingService::new(self.inner.clone())
    }

    /// Get the jobs service.
    pub fn jobs(&self) -> JobsService {
        JobsService::new(self.inner.clone())
    }

    /// Get the job comments service.
    pub fn job_comments(&self) -> JobCommentsService {
        JobCommentsService::new(self.inner.clone())
    }

    /// Get the job tasks service.
    pub fn job_tasks(&self) -> JobTasksService {
        JobTasksService::new(self.inner.clone())
    }

    /// Get the job attachments service.
    pub fn job_attachments(&self) -> JobAttachmentsService {
        JobAttachmentsService::new(self.inner.clone())
    }

    /// Make a raw GET request against the CRM API.
    ///
    /// Escape hatch for endpoints not covered by the typed services. The
    /// path is appended to the configured base URL.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.inner.get(path, config).await
    }

    /// Make a raw POST request against the CRM API.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.inner.post(path, body, config).await
    }

    /// Make a raw PATCH request against the CRM API.
    pub async fn patch<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.inner.patch(path, body, config).await
    }

    /// Make a raw PUT request against the CRM API.
    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.inner.put(path, body, config).await
    }

    /// Make a raw DELETE request against the CRM API.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.inner.delete(path, config).await
    }

    /// Download an opaque binary body (PDFs, document files).
    pub async fn download_file(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<Vec<u8>> {
        self.inner.download_file(path, config).await
    }
}

impl Clone for UispCrmClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for UispCrmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UispCrmClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ClientInner {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Build request headers: content type, then call-site overrides, then
    /// the app key. Insertion order makes the app key win over any
    /// call-site attempt to replace it.
    fn build_headers(&self, request: Option<&RequestConfig>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(request) = request {
            for (name, value) in &request.headers {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|_| configuration_error())?;
                let value = HeaderValue::from_str(value).map_err(|_| configuration_error())?;
                headers.insert(name, value);
            }
        }

        headers.insert(
            APP_KEY_HEADER,
            HeaderValue::from_str(self.config.app_key()).map_err(|_| configuration_error())?,
        );

        Ok(headers)
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        request: Option<&RequestConfig>,
    ) -> Result<reqwest::RequestBuilder> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut builder = self
            .http
            .request(method, &url)
            .headers(self.build_headers(request)?);
        if let Some(timeout) = request.and_then(|r| r.timeout) {
            builder = builder.timeout(timeout);
        }
        Ok(builder)
    }

    /// The single request primitive: one method call, one network call,
    /// one classified outcome. No retry, no deduplication, no cache.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        request: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self.prepare(method, path, request)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        request: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request::<T, ()>(Method::GET, path, None, request).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        request: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, body, request).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        request: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, body, request).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        request: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, body, request).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        request: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request::<T, ()>(Method::DELETE, path, None, request)
            .await
    }

    /// Fetch an opaque binary body (invoice PDFs, document files,
    /// attachments). Same request construction as [`request`](Self::request),
    /// but the body is returned unparsed.
    pub(crate) async fn download_file(
        &self,
        path: &str,
        request: Option<&RequestConfig>,
    ) -> Result<Vec<u8>> {
        let builder = self.prepare(Method::GET, path, request)?;
        let response = builder.send().await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(classify_failure(response).await)
        }
    }

    /// Normalize a response: any 2xx wraps the decoded body; anything else
    /// is classified into an [`Error`].
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();

        if status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            let bytes = response.bytes().await?;
            // Unit endpoints (delete, void, pause) respond with an empty body.
            let data = if bytes.is_empty() {
                serde_json::from_slice(b"null")
            } else {
                serde_json::from_slice(&bytes)
            }
            .map_err(|err| Error::Generic {
                message: format!("Failed to decode response body: {err}"),
                status: Some(status.as_u16()),
            })?;

            Ok(ApiResponse {
                data,
                status: status.as_u16(),
                status_text,
            })
        } else {
            Err(classify_failure(response).await)
        }
    }
}

/// Classify a non-2xx response, preferring the server's `message` field
/// over the status text.
async fn classify_failure(response: reqwest::Response) -> Error {
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or("");
    let body: serde_json::Value = response.json().await.unwrap_or_default();
    let message = body.get("message").and_then(serde_json::Value::as_str);

    let err = Error::from_status(status.as_u16(), message, status_text);
    tracing::debug!(status = status.as_u16(), code = err.code(), "request failed");
    err
}

fn configuration_error() -> Error {
    Error::Generic {
        message: CONFIGURATION_FAILURE.to_string(),
        status: None,
    }
}

/// A normalized successful response.
///
/// Constructed fresh for every request; carries the decoded body along
/// with the HTTP status line.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The decoded response body
    pub data: T,
    /// HTTP status code
    pub status: u16,
    /// HTTP status text
    pub status_text: String,
}
