//! Organization-level services: organizations, payment methods, payment
//! plans, and fees.

use std::sync::Arc;

use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    Email, Fee, FeeSearchParams, NextInvoiceNumber, NextProformaInvoiceNumber, NextQuoteNumber,
    OrganizationReadOnly, OrganizationWritable, PaymentMethodReadOnly, PaymentMethodSearchParams,
    PaymentMethodWritable, PaymentPlanReadOnly, PaymentPlanWritable,
};
use crate::Result;

/// Service for organization operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: uisp_crm_rs::UispCrmClient) -> uisp_crm_rs::Result<()> {
/// let organizations = client.organizations().list().await?;
/// for org in &organizations.data {
///     println!("{}: {}", org.id, org.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrganizationsService {
    inner: Arc<ClientInner>,
}

impl OrganizationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve all organizations.
    pub async fn list(&self) -> Result<ApiResponse<Vec<OrganizationReadOnly>>> {
        self.inner.get("/organizations", None).await
    }

    /// Create an organization.
    pub async fn create(
        &self,
        organization: &OrganizationWritable,
    ) -> Result<ApiResponse<OrganizationReadOnly>> {
        self.inner
            .post("/organizations", Some(organization), None)
            .await
    }

    /// Retrieve a specific organization by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<OrganizationReadOnly>> {
        self.inner.get(&format!("/organizations/{id}"), None).await
    }

    /// Update an organization.
    pub async fn update(
        &self,
        id: i64,
        organization: &OrganizationWritable,
    ) -> Result<ApiResponse<OrganizationReadOnly>> {
        self.inner
            .patch(&format!("/organizations/{id}"), Some(organization), None)
            .await
    }

    /// Delete an organization.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/organizations/{id}"), None).await
    }

    /// Get the number the next invoice will receive.
    pub async fn next_invoice_number(&self, id: i64) -> Result<ApiResponse<NextInvoiceNumber>> {
        self.inner
            .get(&format!("/organizations/{id}/next-invoice-number"), None)
            .await
    }

    /// Get the number the next proforma invoice will receive.
    pub async fn next_proforma_invoice_number(
        &self,
        id: i64,
    ) -> Result<ApiResponse<NextProformaInvoiceNumber>> {
        self.inner
            .get(
                &format!("/organizations/{id}/next-proforma-invoice-number"),
                None,
            )
            .await
    }

    /// Get the number the next quote will receive.
    pub async fn next_quote_number(&self, id: i64) -> Result<ApiResponse<NextQuoteNumber>> {
        self.inner
            .get(&format!("/organizations/{id}/next-quote-number"), None)
            .await
    }

    /// Enqueue an email message to be sent by an organization.
    pub async fn enqueue_email(
        &self,
        organization_id: i64,
        email: &Email,
    ) -> Result<ApiResponse<()>> {
        self.inner
            .post(&format!("/email/{organization_id}/enqueue"), Some(email), None)
            .await
    }
}

/// Service for payment method operations.
pub struct PaymentMethodsService {
    inner: Arc<ClientInner>,
}

impl PaymentMethodsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of payment methods.
    pub async fn list(
        &self,
        params: Option<&PaymentMethodSearchParams>,
    ) -> Result<ApiResponse<Vec<PaymentMethodReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/payment-methods{query}"), None)
            .await
    }

    /// Create a payment method.
    pub async fn create(
        &self,
        payment_method: &PaymentMethodWritable,
    ) -> Result<ApiResponse<PaymentMethodReadOnly>> {
        self.inner
            .post("/payment-methods", Some(payment_method), None)
            .await
    }

    /// Retrieve a specific payment method by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<PaymentMethodReadOnly>> {
        self.inner.get(&format!("/payment-methods/{id}"), None).await
    }

    /// Update a payment method.
    pub async fn update(
        &self,
        id: i64,
        payment_method: &PaymentMethodWritable,
    ) -> Result<ApiResponse<PaymentMethodReadOnly>> {
        self.inner
            .patch(&format!("/payment-methods/{id}"), Some(payment_method), None)
            .await
    }

    /// Delete a payment method.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/payment-methods/{id}"), None)
            .await
    }
}

/// Service for payment plan operations.
pub struct PaymentPlansService {
    inner: Arc<ClientInner>,
}

impl PaymentPlansService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve all payment plans.
    pub async fn list(&self) -> Result<ApiResponse<Vec<PaymentPlanReadOnly>>> {
        self.inner.get("/payment-plans", None).await
    }

    /// Create a payment plan.
    pub async fn create(
        &self,
        payment_plan: &PaymentPlanWritable,
    ) -> Result<ApiResponse<PaymentPlanReadOnly>> {
        self.inner
            .post("/payment-plans", Some(payment_plan), None)
            .await
    }

    /// Retrieve a specific payment plan by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<PaymentPlanReadOnly>> {
        self.inner.get(&format!("/payment-plans/{id}"), None).await
    }

    /// Cancel a payment plan.
    pub async fn cancel(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .patch(&format!("/payment-plans/{id}/cancel"), None::<&()>, None)
            .await
    }
}

/// Service for fee operations.
pub struct FeesService {
    inner: Arc<ClientInner>,
}

impl FeesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of fees.
    pub async fn list(&self, params: Option<&FeeSearchParams>) -> Result<ApiResponse<Vec<Fee>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner.get(&format!("/fees{query}"), None).await
    }

    /// Retrieve a specific fee by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<Fee>> {
        self.inner.get(&format!("/fees/{id}"), None).await
    }

    /// Delete a fee. Only uninvoiced fees not present on a quote can be
    /// deleted.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner.delete(&format!("/fees/{id}"), None).await
    }
}
