//! Clients service: client records plus their bank accounts, contacts,
//! logs, and tags.

use std::sync::Arc;

use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    ClientBankAccount, ClientBankAccountReadOnly, ClientContactReadOnly, ClientContactWritable,
    ClientCredentials, ClientLogReadOnly, ClientLogSearchParams, ClientLogWritable,
    ClientReadOnly, ClientSearchParams, ClientTag, ClientTagReadOnly, ClientWritable,
    PaginationParams,
};
use crate::Result;

/// Service for client operations.
///
/// # Example
///
/// ```no_run
/// use uisp_crm_rs::models::{ClientSearchParams, ClientWritable};
///
/// # async fn example(client: uisp_crm_rs::UispCrmClient) -> uisp_crm_rs::Result<()> {
/// // Find active clients matching a query
/// let params = ClientSearchParams {
///     query: Some("doe".to_string()),
///     is_archived: Some(0),
///     ..Default::default()
/// };
/// let found = client.clients().list(Some(&params)).await?;
///
/// // Create a new client
/// let new_client = client.clients().create(&ClientWritable {
///     first_name: Some("John".to_string()),
///     last_name: Some("Doe".to_string()),
///     email: Some("john.doe@example.com".to_string()),
///     ..Default::default()
/// }).await?;
/// println!("created client {}", new_client.data.id);
/// # Ok(())
/// # }
/// ```
pub struct ClientsService {
    inner: Arc<ClientInner>,
}

impl ClientsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of clients.
    pub async fn list(
        &self,
        params: Option<&ClientSearchParams>,
    ) -> Result<ApiResponse<Vec<ClientReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/clients{query}"), None).await
    }

    /// Create a new client.
    pub async fn create(&self, client: &ClientWritable) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner.post("/clients", Some(client), None).await
    }

    /// Retrieve a specific client by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner.get(&format!("/clients/{id}"), None).await
    }

    /// Update a client.
    pub async fn update(
        &self,
        id: i64,
        client: &ClientWritable,
    ) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner
            .patch(&format!("/clients/{id}"), Some(client), None)
            .await
    }

    /// Delete a client permanently.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/clients/{id}"), None).await
    }

    /// Add a tag to a client.
    pub async fn add_tag(&self, client_id: i64, tag_id: i64) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner
            .patch(
                &format!("/clients/{client_id}/add-tag/{tag_id}"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Remove a tag from a client.
    pub async fn remove_tag(
        &self,
        client_id: i64,
        tag_id: i64,
    ) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner
            .patch(
                &format!("/clients/{client_id}/remove-tag/{tag_id}"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Send a client-zone invitation email to a client.
    pub async fn send_invitation(&self, id: i64) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner
            .patch(&format!("/clients/{id}/send-invitation"), None::<&()>, None)
            .await
    }

    /// Archive a client.
    pub async fn archive(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .patch(&format!("/clients/{id}/archive"), None::<&()>, None)
            .await
    }

    /// Restore an archived client.
    pub async fn restore(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .patch(&format!("/clients/{id}/restore"), None::<&()>, None)
            .await
    }

    /// Find clients matching client-zone credentials.
    pub async fn authenticate(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<ApiResponse<Vec<ClientReadOnly>>> {
        self.inner
            .post("/clients/authenticated", Some(credentials), None)
            .await
    }

    /// Geocode the client's address and update its GPS coordinates.
    pub async fn geocode(&self, id: i64) -> Result<ApiResponse<ClientReadOnly>> {
        self.inner
            .patch(&format!("/clients/{id}/geocode"), None::<&()>, None)
            .await
    }

    /// Retrieve a client bank account by ID.
    pub async fn get_bank_account(&self, id: i64) -> Result<ApiResponse<ClientBankAccountReadOnly>> {
        self.inner
            .get(&format!("/clients/bank-accounts/{id}"), None)
            .await
    }

    /// Update a client bank account.
    pub async fn update_bank_account(
        &self,
        id: i64,
        bank_account: &ClientBankAccount,
    ) -> Result<ApiResponse<ClientBankAccountReadOnly>> {
        self.inner
            .patch(
                &format!("/clients/bank-accounts/{id}"),
                Some(bank_account),
                None,
            )
            .await
    }

    /// Delete a client bank account.
    pub async fn delete_bank_account(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/clients/bank-accounts/{id}"), None)
            .await
    }

    /// Retrieve all bank accounts of a client.
    pub async fn list_bank_accounts(
        &self,
        client_id: i64,
    ) -> Result<ApiResponse<Vec<ClientBankAccountReadOnly>>> {
        self.inner
            .get(&format!("/clients/{client_id}/bank-accounts"), None)
            .await
    }

    /// Create a bank account for a client.
    pub async fn create_bank_account(
        &self,
        client_id: i64,
        bank_account: &ClientBankAccount,
    ) -> Result<ApiResponse<ClientBankAccountReadOnly>> {
        self.inner
            .post(
                &format!("/clients/{client_id}/bank-accounts"),
                Some(bank_account),
                None,
            )
            .await
    }

    /// Retrieve a client contact by ID.
    pub async fn get_contact(&self, id: i64) -> Result<ApiResponse<ClientContactReadOnly>> {
        self.inner.get(&format!("/clients/contacts/{id}"), None).await
    }

    /// Update a client contact.
    pub async fn update_contact(
        &self,
        id: i64,
        contact: &ClientContactWritable,
    ) -> Result<ApiResponse<ClientContactReadOnly>> {
        self.inner
            .patch(&format!("/clients/contacts/{id}"), Some(contact), None)
            .await
    }

    /// Delete a client contact.
    pub async fn delete_contact(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/clients/contacts/{id}"), None)
            .await
    }

    /// Retrieve all contacts of a client.
    pub async fn list_contacts(
        &self,
        client_id: i64,
    ) -> Result<ApiResponse<Vec<ClientContactReadOnly>>> {
        self.inner
            .get(&format!("/clients/{client_id}/contacts"), None)
            .await
    }

    /// Create a contact for a client.
    pub async fn create_contact(
        &self,
        client_id: i64,
        contact: &ClientContactWritable,
    ) -> Result<ApiResponse<ClientContactReadOnly>> {
        self.inner
            .post(
                &format!("/clients/{client_id}/contacts"),
                Some(contact),
                None,
            )
            .await
    }

    /// Retrieve a collection of client log entries.
    pub async fn list_logs(
        &self,
        params: Option<&ClientLogSearchParams>,
    ) -> Result<ApiResponse<Vec<ClientLogReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/client-logs{query}"), None).await
    }

    /// Create a client log entry.
    pub async fn create_log(
        &self,
        log: &ClientLogWritable,
    ) -> Result<ApiResponse<ClientLogReadOnly>> {
        self.inner.post("/client-logs", Some(log), None).await
    }

    /// Retrieve a client log entry by ID.
    pub async fn get_log(&self, id: i64) -> Result<ApiResponse<ClientLogReadOnly>> {
        self.inner.get(&format!("/client-logs/{id}"), None).await
    }

    /// Update a client log entry.
    pub async fn update_log(
        &self,
        id: i64,
        log: &ClientLogWritable,
    ) -> Result<ApiResponse<ClientLogReadOnly>> {
        self.inner
            .patch(&format!("/client-logs/{id}"), Some(log), None)
            .await
    }

    /// Delete a client log entry.
    pub async fn delete_log(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/client-logs/{id}"), None).await
    }

    /// Retrieve a collection of client tags.
    pub async fn list_tags(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<ClientTagReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/client-tags{query}"), None).await
    }

    /// Create a client tag.
    pub async fn create_tag(&self, tag: &ClientTag) -> Result<ApiResponse<ClientTagReadOnly>> {
        self.inner.post("/client-tags", Some(tag), None).await
    }

    /// Retrieve a client tag by ID.
    pub async fn get_tag(&self, id: i64) -> Result<ApiResponse<ClientTagReadOnly>> {
        self.inner.get(&format!("/client-tags/{id}"), None).await
    }

    /// Update a client tag.
    pub async fn update_tag(
        &self,
        id: i64,
        tag: &ClientTag,
    ) -> Result<ApiResponse<ClientTagReadOnly>> {
        self.inner
            .patch(&format!("/client-tags/{id}"), Some(tag), None)
            .await
    }

    /// Delete a client tag.
    pub async fn delete_tag(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/client-tags/{id}"), None).await
    }
}
