//! Services service: recurring/prepaid services, change requests, and
//! prepaid service periods.

use std::sync::Arc;

use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    PrepaidServicePeriod, PrepaidServicePeriodSearchParams, PrepaidServicePeriodWritable,
    ServiceActivate, ServiceChangeRequest, ServiceChangeRequestReadOnly, ServicePause,
    ServiceReadOnly, ServiceSearchParams, ServiceTrafficShapingOverride, ServiceUpdate,
    ServiceUsage, ServiceWritable, PaginationParams,
};
use crate::Result;

/// Service for service (subscription) operations.
///
/// # Example
///
/// ```no_run
/// use uisp_crm_rs::models::{ServiceSearchParams, ServiceStatus, ServiceWritable};
///
/// # async fn example(client: uisp_crm_rs::UispCrmClient) -> uisp_crm_rs::Result<()> {
/// // Active and suspended services of one client
/// let params = ServiceSearchParams {
///     client_id: Some(42),
///     statuses: Some(vec![ServiceStatus::Active, ServiceStatus::Suspended]),
///     ..Default::default()
/// };
/// let services = client.services().list(Some(&params)).await?;
///
/// // Create a service for that client
/// let mut writable = ServiceWritable::new("Internet 100/20");
/// writable.price = Some(29.99);
/// let created = client.services().create(42, &writable).await?;
/// println!("service {} created", created.data.id);
/// # Ok(())
/// # }
/// ```
pub struct ServicesService {
    inner: Arc<ClientInner>,
}

impl ServicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of services.
    pub async fn list(
        &self,
        params: Option<&ServiceSearchParams>,
    ) -> Result<ApiResponse<Vec<ServiceReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/clients/services{query}"), None)
            .await
    }

    /// Retrieve a specific service by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner.get(&format!("/clients/services/{id}"), None).await
    }

    /// Update a service.
    pub async fn update(
        &self,
        id: i64,
        service: &ServiceUpdate,
    ) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .patch(&format!("/clients/services/{id}"), Some(service), None)
            .await
    }

    /// Delete a service.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/clients/services/{id}"), None)
            .await
    }

    /// Create a service for a client.
    pub async fn create(
        &self,
        client_id: i64,
        service: &ServiceWritable,
    ) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .post(&format!("/clients/{client_id}/services"), Some(service), None)
            .await
    }

    /// Retrieve usage data for one invoicing period of a recurring
    /// service. `datetime` selects the period containing that instant.
    pub async fn data_usage(&self, id: i64, datetime: &str) -> Result<ApiResponse<ServiceUsage>> {
        self.inner
            .get(&format!("/clients/services/{id}/data-usage/{datetime}"), None)
            .await
    }

    /// Geocode the service's address and update its GPS coordinates.
    pub async fn geocode(&self, id: i64) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .patch(&format!("/clients/services/{id}/geocode"), None::<&()>, None)
            .await
    }

    /// End a recurring service immediately. The current day is not
    /// invoiced.
    pub async fn end(&self, id: i64) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .patch(&format!("/clients/services/{id}/end"), None::<&()>, None)
            .await
    }

    /// Activate a quoted service. The owning client lead is converted to
    /// a regular client.
    pub async fn activate_quoted(
        &self,
        id: i64,
        options: Option<&ServiceActivate>,
    ) -> Result<ApiResponse<ServiceReadOnly>> {
        let default = ServiceActivate::default();
        let body = options.unwrap_or(&default);
        self.inner
            .patch(
                &format!("/clients/services/{id}/activate-quoted"),
                Some(body),
                None,
            )
            .await
    }

    /// Enable a traffic shaping override on a service.
    pub async fn enable_traffic_shaping_override(
        &self,
        id: i64,
        over: &ServiceTrafficShapingOverride,
    ) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .patch(
                &format!("/clients/services/{id}/traffic-shaping-override"),
                Some(over),
                None,
            )
            .await
    }

    /// Disable the traffic shaping override on a service.
    pub async fn disable_traffic_shaping_override(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .delete(
                &format!("/clients/services/{id}/traffic-shaping-override"),
                None,
            )
            .await
    }

    /// Pause a service for a date range.
    pub async fn pause(&self, id: i64, pause: &ServicePause) -> Result<ApiResponse<()>> {
        self.inner
            .patch(&format!("/clients/services/{id}/pause"), Some(pause), None)
            .await
    }

    /// Cancel a deferred change on a service.
    pub async fn cancel_deferred_change(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .patch(
                &format!("/clients/services/{id}/cancel-deferred-change"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Suspend a service.
    pub async fn suspend(&self, id: i64) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .patch(&format!("/clients/services/{id}/suspend"), None::<&()>, None)
            .await
    }

    /// Cancel a service suspension.
    pub async fn cancel_suspend(&self, id: i64) -> Result<ApiResponse<ServiceReadOnly>> {
        self.inner
            .patch(
                &format!("/clients/services/{id}/cancel-suspend"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Retrieve a collection of service change requests.
    pub async fn list_change_requests(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<ServiceChangeRequestReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/service-change-requests{query}"), None)
            .await
    }

    /// Create a service change request. Available only for recurring
    /// services.
    pub async fn create_change_request(
        &self,
        request: &ServiceChangeRequest,
    ) -> Result<ApiResponse<ServiceChangeRequestReadOnly>> {
        self.inner
            .post("/service-change-requests", Some(request), None)
            .await
    }

    /// Retrieve a service change request by its UUID.
    pub async fn get_change_request(
        &self,
        id: &str,
    ) -> Result<ApiResponse<ServiceChangeRequestReadOnly>> {
        self.inner
            .get(&format!("/service-change-requests/{id}"), None)
            .await
    }

    /// Delete a service change request.
    pub async fn delete_change_request(&self, id: &str) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/service-change-requests/{id}"), None)
            .await
    }

    /// Accept a service change request.
    pub async fn accept_change_request(&self, id: &str) -> Result<ApiResponse<()>> {
        self.inner
            .patch(
                &format!("/service-change-requests/{id}/accept"),
                None::<&()>,
                None,
            )
            .await
    }

    /// Retrieve a collection of prepaid service periods.
    pub async fn list_prepaid_periods(
        &self,
        params: Option<&PrepaidServicePeriodSearchParams>,
    ) -> Result<ApiResponse<Vec<PrepaidServicePeriod>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/prepaid-service-periods{query}"), None)
            .await
    }

    /// Retrieve a prepaid service period by ID.
    pub async fn get_prepaid_period(&self, id: i64) -> Result<ApiResponse<PrepaidServicePeriod>> {
        self.inner
            .get(&format!("/prepaid-service-periods/{id}"), None)
            .await
    }

    /// Create a prepaid service period.
    pub async fn create_prepaid_period(
        &self,
        period: &PrepaidServicePeriodWritable,
    ) -> Result<ApiResponse<PrepaidServicePeriod>> {
        self.inner
            .post("/prepaid-service-periods", Some(period), None)
            .await
    }

    /// Update a prepaid service period.
    pub async fn update_prepaid_period(
        &self,
        id: i64,
        period: &PrepaidServicePeriodWritable,
    ) -> Result<ApiResponse<PrepaidServicePeriod>> {
        self.inner
            .patch(
                &format!("/prepaid-service-periods/{id}"),
                Some(period),
                None,
            )
            .await
    }

    /// Delete a prepaid service period.
    pub async fn delete_prepaid_period(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/prepaid-service-periods/{id}"), None)
            .await
    }
}
