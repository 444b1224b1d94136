//! Service models: recurring/prepaid services, change requests, and
//! prepaid service periods.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

use super::base::SortDirection;

/// Lifecycle status of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ServiceStatus {
    /// Prepared, not yet active
    Prepared,
    /// Active
    Active,
    /// Ended
    Ended,
    /// Suspended
    Suspended,
    /// Prepared and blocked
    PreparedBlocked,
    /// Obsolete
    Obsolete,
    /// Deferred
    Deferred,
    /// Quoted (lead)
    Quoted,
    /// Unrecognized value from a newer server
    Unknown(i32),
}

impl From<i32> for ServiceStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => ServiceStatus::Prepared,
            1 => ServiceStatus::Active,
            2 => ServiceStatus::Ended,
            3 => ServiceStatus::Suspended,
            4 => ServiceStatus::PreparedBlocked,
            5 => ServiceStatus::Obsolete,
            6 => ServiceStatus::Deferred,
            7 => ServiceStatus::Quoted,
            other => ServiceStatus::Unknown(other),
        }
    }
}

impl From<ServiceStatus> for i32 {
    fn from(value: ServiceStatus) -> Self {
        match value {
            ServiceStatus::Prepared => 0,
            ServiceStatus::Active => 1,
            ServiceStatus::Ended => 2,
            ServiceStatus::Suspended => 3,
            ServiceStatus::PreparedBlocked => 4,
            ServiceStatus::Obsolete => 5,
            ServiceStatus::Deferred => 6,
            ServiceStatus::Quoted => 7,
            ServiceStatus::Unknown(other) => other,
        }
    }
}

impl From<ServiceStatus> for Scalar {
    fn from(value: ServiceStatus) -> Self {
        Scalar::Int(i32::from(value).into())
    }
}

/// Invoicing period type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum InvoicingPeriodType {
    /// Monthly
    Month,
    /// Daily
    Day,
    /// Weekly
    Week,
    /// Forward
    Forward,
    /// Backward
    Backward,
    /// Unrecognized value from a newer server
    Unknown(i32),
}

impl From<i32> for InvoicingPeriodType {
    fn from(value: i32) -> Self {
        match value {
            1 => InvoicingPeriodType::Month,
            2 => InvoicingPeriodType::Day,
            3 => InvoicingPeriodType::Week,
            4 => InvoicingPeriodType::Forward,
            5 => InvoicingPeriodType::Backward,
            other => InvoicingPeriodType::Unknown(other),
        }
    }
}

impl From<InvoicingPeriodType> for i32 {
    fn from(value: InvoicingPeriodType) -> Self {
        match value {
            InvoicingPeriodType::Month => 1,
            InvoicingPeriodType::Day => 2,
            InvoicingPeriodType::Week => 3,
            InvoicingPeriodType::Forward => 4,
            InvoicingPeriodType::Backward => 5,
            InvoicingPeriodType::Unknown(other) => other,
        }
    }
}

/// Discount type applied to a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DiscountType {
    /// Percentage discount
    Percentage,
    /// Fixed-amount discount
    Fixed,
    /// Unrecognized value from a newer server
    Unknown(i32),
}

impl From<i32> for DiscountType {
    fn from(value: i32) -> Self {
        match value {
            1 => DiscountType::Percentage,
            2 => DiscountType::Fixed,
            other => DiscountType::Unknown(other),
        }
    }
}

impl From<DiscountType> for i32 {
    fn from(value: DiscountType) -> Self {
        match value {
            DiscountType::Percentage => 1,
            DiscountType::Fixed => 2,
            DiscountType::Unknown(other) => other,
        }
    }
}

/// Rounding mode for generated invoice items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum InvoiceItemRounding {
    /// Standard rounding
    Standard,
    /// No rounding
    NoRounding,
    /// Unrecognized value from a newer server
    Unknown(i32),
}

impl From<i32> for InvoiceItemRounding {
    fn from(value: i32) -> Self {
        match value {
            1 => InvoiceItemRounding::Standard,
            2 => InvoiceItemRounding::NoRounding,
            other => InvoiceItemRounding::Unknown(other),
        }
    }
}

impl From<InvoiceItemRounding> for i32 {
    fn from(value: InvoiceItemRounding) -> Self {
        match value {
            InvoiceItemRounding::Standard => 1,
            InvoiceItemRounding::NoRounding => 2,
            InvoiceItemRounding::Unknown(other) => other,
        }
    }
}

/// A custom attribute attached to a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCustomAttribute {
    /// Attribute key
    pub key: String,
    /// Attribute value
    pub value: String,
}

/// A service as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReadOnly {
    /// Service ID
    pub id: i64,
    /// Owning client
    pub client_id: i64,
    /// Owning organization
    pub organization_id: i64,
    /// Service label
    pub name: String,
    /// Lifecycle status
    pub status: ServiceStatus,
    /// Price per invoicing period
    #[serde(default)]
    pub price: f64,
    /// Service plan the service was created from
    #[serde(default)]
    pub service_plan_id: Option<i64>,
    /// Service plan name
    #[serde(default)]
    pub service_plan_name: Option<String>,
    /// Service plan period length
    #[serde(default)]
    pub service_plan_period: Option<i32>,
    /// Service plan price
    #[serde(default)]
    pub service_plan_price: Option<f64>,
    /// Invoicing start date (ISO 8601)
    #[serde(default)]
    pub invoicing_start: Option<String>,
    /// Invoicing end date (ISO 8601)
    #[serde(default)]
    pub invoicing_end: Option<String>,
    /// Invoicing period type
    #[serde(default)]
    pub invoicing_period_type: Option<InvoicingPeriodType>,
    /// Day of period the invoicing starts on
    #[serde(default)]
    pub invoicing_period_start_day: Option<i32>,
    /// Month of period the invoicing starts in
    #[serde(default)]
    pub invoicing_period_start_month: Option<i32>,
    /// Invoicing period length
    #[serde(default)]
    pub invoicing_period: Option<i32>,
    /// Days to shift the next invoicing day
    #[serde(default)]
    pub next_invoicing_day_adjustment: Option<i32>,
    /// Invoice prorated amounts separately
    #[serde(default)]
    pub invoicing_prorated_separately: Option<bool>,
    /// Invoice this service separately
    #[serde(default)]
    pub invoicing_separately: Option<bool>,
    /// End of the last invoiced period (ISO 8601)
    #[serde(default)]
    pub invoicing_last_period_end: Option<String>,
    /// Days to shift the invoicing day
    #[serde(default)]
    pub invoicing_day_adjustment: Option<i32>,
    /// Send invoice emails automatically
    #[serde(default)]
    pub send_emails_automatically: Option<bool>,
    /// Apply available credit automatically
    #[serde(default)]
    pub use_credit_automatically: Option<bool>,
    /// Active-from date (ISO 8601)
    #[serde(default)]
    pub active_from: Option<String>,
    /// Active-to date (ISO 8601)
    #[serde(default)]
    pub active_to: Option<String>,
    /// Contract identifier
    #[serde(default)]
    pub contract_id: Option<String>,
    /// Contract end date (ISO 8601)
    #[serde(default)]
    pub contract_end_date: Option<String>,
    /// Minimum contract length in months
    #[serde(default)]
    pub minimum_contract_length_months: Option<i32>,
    /// Setup fee
    #[serde(default)]
    pub setup_fee: Option<f64>,
    /// Early termination fee
    #[serde(default)]
    pub early_termination_fee_price: Option<f64>,
    /// Discount type
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    /// Discount value
    #[serde(default)]
    pub discount_value: Option<f64>,
    /// Label for the discount on invoices
    #[serde(default)]
    pub discount_invoice_label: Option<String>,
    /// Discount valid from (ISO 8601)
    #[serde(default)]
    pub discount_from: Option<String>,
    /// Discount valid to (ISO 8601)
    #[serde(default)]
    pub discount_to: Option<String>,
    /// Whether the service is taxable
    #[serde(default)]
    pub taxable: Option<bool>,
    /// First applied tax
    #[serde(default)]
    pub tax1_id: Option<i64>,
    /// Second applied tax
    #[serde(default)]
    pub tax2_id: Option<i64>,
    /// Third applied tax
    #[serde(default)]
    pub tax3_id: Option<i64>,
    /// Installation address latitude
    #[serde(default)]
    pub address_gps_lat: Option<f64>,
    /// Installation address longitude
    #[serde(default)]
    pub address_gps_lon: Option<f64>,
    /// Street address, line 1
    #[serde(default)]
    pub street1: Option<String>,
    /// Street address, line 2
    #[serde(default)]
    pub street2: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// Country ID
    #[serde(default)]
    pub country_id: Option<i64>,
    /// State ID
    #[serde(default)]
    pub state_id: Option<i64>,
    /// ZIP / postal code
    #[serde(default)]
    pub zip_code: Option<String>,
    /// Internal note
    #[serde(default)]
    pub note: Option<String>,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Last update date (ISO 8601)
    #[serde(default)]
    pub updated_date: Option<String>,
    /// Custom attributes
    #[serde(default)]
    pub custom_attributes: Vec<ServiceCustomAttribute>,
    /// Service that superseded this one
    #[serde(default)]
    pub superseded_by_id: Option<i64>,
    /// Service this one supersedes
    #[serde(default)]
    pub superseding_service_id: Option<i64>,
    /// Whether the installation site has an outage
    #[serde(default)]
    pub has_outage: Option<bool>,
    /// Download burst (bytes)
    #[serde(default)]
    pub download_burst: Option<i64>,
    /// Upload burst (bytes)
    #[serde(default)]
    pub upload_burst: Option<i64>,
    /// Download speed (Mbps)
    #[serde(default)]
    pub download_speed: Option<f64>,
    /// Upload speed (Mbps)
    #[serde(default)]
    pub upload_speed: Option<f64>,
    /// FCC block identifier
    #[serde(default)]
    pub fcc_block_id: Option<String>,
    /// Download speed override (Mbps)
    #[serde(default)]
    pub download_speed_override: Option<f64>,
    /// Upload speed override (Mbps)
    #[serde(default)]
    pub upload_speed_override: Option<f64>,
    /// Tariff period in effect
    #[serde(default)]
    pub tariff_period_id: Option<i64>,
    /// Data usage limit (GB)
    #[serde(default)]
    pub data_usage_limit: Option<f64>,
    /// Rounding mode for generated invoice items
    #[serde(default)]
    pub invoice_item_rounding: Option<InvoiceItemRounding>,
}

/// Fields accepted when creating a service for a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWritable {
    /// Service label
    pub name: String,
    /// Service plan to create the service from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_plan_id: Option<i64>,
    /// Price per invoicing period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Invoicing start date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_start: Option<String>,
    /// Invoicing end date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_end: Option<String>,
    /// Invoicing period type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period_type: Option<InvoicingPeriodType>,
    /// Day of period the invoicing starts on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period_start_day: Option<i32>,
    /// Month of period the invoicing starts in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period_start_month: Option<i32>,
    /// Invoicing period length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period: Option<i32>,
    /// Days to shift the next invoicing day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_invoicing_day_adjustment: Option<i32>,
    /// Invoice prorated amounts separately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_prorated_separately: Option<bool>,
    /// Invoice this service separately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_separately: Option<bool>,
    /// Days to shift the invoicing day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_day_adjustment: Option<i32>,
    /// Send invoice emails automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_emails_automatically: Option<bool>,
    /// Apply available credit automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_credit_automatically: Option<bool>,
    /// Active-from date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_from: Option<String>,
    /// Active-to date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_to: Option<String>,
    /// Contract identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    /// Contract end date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end_date: Option<String>,
    /// Minimum contract length in months
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_contract_length_months: Option<i32>,
    /// Setup fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<f64>,
    /// Early termination fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_termination_fee_price: Option<f64>,
    /// Discount type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    /// Discount value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    /// Label for the discount on invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_invoice_label: Option<String>,
    /// Discount valid from (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_from: Option<String>,
    /// Discount valid to (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_to: Option<String>,
    /// Whether the service is taxable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// First applied tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax1_id: Option<i64>,
    /// Second applied tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax2_id: Option<i64>,
    /// Third applied tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax3_id: Option<i64>,
    /// Installation address latitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_gps_lat: Option<f64>,
    /// Installation address longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_gps_lon: Option<f64>,
    /// Street address, line 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    /// Street address, line 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    /// State ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i64>,
    /// ZIP / postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Internal note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Custom attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Vec<ServiceCustomAttribute>>,
    /// Download burst (bytes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_burst: Option<i64>,
    /// Upload burst (bytes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_burst: Option<i64>,
    /// Download speed (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_speed: Option<f64>,
    /// Upload speed (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_speed: Option<f64>,
    /// FCC block identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcc_block_id: Option<String>,
    /// Download speed override (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_speed_override: Option<f64>,
    /// Upload speed override (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_speed_override: Option<f64>,
    /// Tariff period to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_period_id: Option<i64>,
    /// Data usage limit (GB)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_usage_limit: Option<f64>,
    /// Rounding mode for generated invoice items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_item_rounding: Option<InvoiceItemRounding>,
}

impl ServiceWritable {
    /// Create a writable service with the given label, everything else
    /// unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_plan_id: None,
            price: None,
            invoicing_start: None,
            invoicing_end: None,
            invoicing_period_type: None,
            invoicing_period_start_day: None,
            invoicing_period_start_month: None,
            invoicing_period: None,
            next_invoicing_day_adjustment: None,
            invoicing_prorated_separately: None,
            invoicing_separately: None,
            invoicing_day_adjustment: None,
            send_emails_automatically: None,
            use_credit_automatically: None,
            active_from: None,
            active_to: None,
            contract_id: None,
            contract_end_date: None,
            minimum_contract_length_months: None,
            setup_fee: None,
            early_termination_fee_price: None,
            discount_type: None,
            discount_value: None,
            discount_invoice_label: None,
            discount_from: None,
            discount_to: None,
            taxable: None,
            tax1_id: None,
            tax2_id: None,
            tax3_id: None,
            address_gps_lat: None,
            address_gps_lon: None,
            street1: None,
            street2: None,
            city: None,
            country_id: None,
            state_id: None,
            zip_code: None,
            note: None,
            custom_attributes: None,
            download_burst: None,
            upload_burst: None,
            download_speed: None,
            upload_speed: None,
            fcc_block_id: None,
            download_speed_override: None,
            upload_speed_override: None,
            tariff_period_id: None,
            data_usage_limit: None,
            invoice_item_rounding: None,
        }
    }
}

/// Partial update for an existing service. Identical to
/// [`ServiceWritable`] except every field, including the label, is
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdate {
    /// Service label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service plan to move the service to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_plan_id: Option<i64>,
    /// Price per invoicing period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Invoicing start date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_start: Option<String>,
    /// Invoicing end date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_end: Option<String>,
    /// Invoicing period type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period_type: Option<InvoicingPeriodType>,
    /// Day of period the invoicing starts on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period_start_day: Option<i32>,
    /// Month of period the invoicing starts in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period_start_month: Option<i32>,
    /// Invoicing period length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_period: Option<i32>,
    /// Days to shift the next invoicing day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_invoicing_day_adjustment: Option<i32>,
    /// Invoice prorated amounts separately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_prorated_separately: Option<bool>,
    /// Invoice this service separately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_separately: Option<bool>,
    /// Days to shift the invoicing day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_day_adjustment: Option<i32>,
    /// Send invoice emails automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_emails_automatically: Option<bool>,
    /// Apply available credit automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_credit_automatically: Option<bool>,
    /// Active-from date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_from: Option<String>,
    /// Active-to date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_to: Option<String>,
    /// Contract identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    /// Contract end date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end_date: Option<String>,
    /// Minimum contract length in months
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_contract_length_months: Option<i32>,
    /// Setup fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<f64>,
    /// Early termination fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_termination_fee_price: Option<f64>,
    /// Discount type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    /// Discount value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    /// Label for the discount on invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_invoice_label: Option<String>,
    /// Discount valid from (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_from: Option<String>,
    /// Discount valid to (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_to: Option<String>,
    /// Whether the service is taxable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// First applied tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax1_id: Option<i64>,
    /// Second applied tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax2_id: Option<i64>,
    /// Third applied tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax3_id: Option<i64>,
    /// Installation address latitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_gps_lat: Option<f64>,
    /// Installation address longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_gps_lon: Option<f64>,
    /// Street address, line 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    /// Street address, line 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    /// State ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i64>,
    /// ZIP / postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Internal note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Custom attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Vec<ServiceCustomAttribute>>,
    /// Download burst (bytes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_burst: Option<i64>,
    /// Upload burst (bytes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_burst: Option<i64>,
    /// Download speed (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_speed: Option<f64>,
    /// Upload speed (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_speed: Option<f64>,
    /// FCC block identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcc_block_id: Option<String>,
    /// Download speed override (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_speed_override: Option<f64>,
    /// Upload speed override (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_speed_override: Option<f64>,
    /// Tariff period to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_period_id: Option<i64>,
    /// Data usage limit (GB)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_usage_limit: Option<f64>,
    /// Rounding mode for generated invoice items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_item_rounding: Option<InvoiceItemRounding>,
}

/// Filters for the service list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ServiceSearchParams {
    /// Filter by organization
    pub organization_id: Option<i64>,
    /// Filter by client
    pub client_id: Option<i64>,
    /// Filter by statuses (any match)
    pub statuses: Option<Vec<ServiceStatus>>,
    /// 1 for prepaid only, 0 for recurring only
    pub prepaid: Option<i32>,
    /// 1 for services with an outage only
    pub has_outage: Option<i32>,
    /// Filter by custom attribute ID
    pub custom_attribute_id: Option<i64>,
    /// Custom attribute key to match
    pub custom_attribute_key: Option<String>,
    /// Custom attribute value to match
    pub custom_attribute_value: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
}

impl ServiceSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("organizationId", self.organization_id);
        q.push_opt("clientId", self.client_id);
        q.push_opt("statuses", self.statuses.clone());
        q.push_opt("prepaid", self.prepaid);
        q.push_opt("hasOutage", self.has_outage);
        q.push_opt("customAttributeId", self.custom_attribute_id);
        q.push_opt("customAttributeKey", self.custom_attribute_key.clone());
        q.push_opt("customAttributeValue", self.custom_attribute_value.clone());
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q
    }
}

/// Options for activating a quoted service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceActivate {
    /// Activation date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate_date: Option<String>,
    /// Invoice the setup fee immediately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee_invoice_immediately: Option<bool>,
}

/// Date range for pausing a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePause {
    /// First paused day (ISO 8601)
    pub pause_from: String,
    /// Last paused day (ISO 8601)
    pub pause_to: String,
}

/// Traffic shaping override values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTrafficShapingOverride {
    /// Download speed override (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_speed_override: Option<f64>,
    /// Upload speed override (Mbps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_speed_override: Option<f64>,
}

/// Data usage for one invoicing period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsage {
    /// Downloaded volume
    pub download: f64,
    /// Uploaded volume
    pub upload: f64,
    /// Unit of the download figure
    pub download_unit: String,
    /// Unit of the upload figure
    pub upload_unit: String,
}

/// Status of a service change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ServiceChangeRequestStatus {
    /// Awaiting decision
    Open,
    /// Approved
    Approved,
    /// Rejected
    Rejected,
    /// Unrecognized value from a newer server
    Unknown(i32),
}

impl From<i32> for ServiceChangeRequestStatus {
    fn from(value: i32) -> Self {
        match value {
            1 => ServiceChangeRequestStatus::Open,
            2 => ServiceChangeRequestStatus::Approved,
            3 => ServiceChangeRequestStatus::Rejected,
            other => ServiceChangeRequestStatus::Unknown(other),
        }
    }
}

impl From<ServiceChangeRequestStatus> for i32 {
    fn from(value: ServiceChangeRequestStatus) -> Self {
        match value {
            ServiceChangeRequestStatus::Open => 1,
            ServiceChangeRequestStatus::Approved => 2,
            ServiceChangeRequestStatus::Rejected => 3,
            ServiceChangeRequestStatus::Unknown(other) => other,
        }
    }
}

/// Fields accepted when creating a service change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChangeRequest {
    /// Service to change
    pub service_id: i64,
    /// Target service plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_plan_id: Option<i64>,
    /// Request note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A service change request as returned by the API.
///
/// Change requests are identified by string UUIDs, unlike every other
/// CRM entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChangeRequestReadOnly {
    /// Change request UUID
    pub id: String,
    /// Service to change
    pub service_id: i64,
    /// Target service plan
    #[serde(default)]
    pub service_plan_id: Option<i64>,
    /// Request note
    #[serde(default)]
    pub note: Option<String>,
    /// Creation date (ISO 8601)
    pub created_date: String,
    /// Request status
    pub status: ServiceChangeRequestStatus,
}

/// A prepaid service period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepaidServicePeriod {
    /// Period ID
    pub id: i64,
    /// Owning service
    pub service_id: i64,
    /// Invoice covering this period
    #[serde(default)]
    pub invoice_id: Option<i64>,
    /// Period start date (ISO 8601)
    pub start_date: String,
    /// Period end date (ISO 8601)
    pub end_date: String,
    /// Period price
    pub price: f64,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Fields accepted when creating or updating a prepaid service period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepaidServicePeriodWritable {
    /// Owning service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    /// Invoice covering this period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i64>,
    /// Period start date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Period end date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Period price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Sort keys accepted by the prepaid service period list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrepaidServicePeriodOrderBy {
    /// `createdDate`
    CreatedDate,
    /// `startDate`
    StartDate,
    /// `endDate`
    EndDate,
}

impl PrepaidServicePeriodOrderBy {
    /// The wire form of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrepaidServicePeriodOrderBy::CreatedDate => "createdDate",
            PrepaidServicePeriodOrderBy::StartDate => "startDate",
            PrepaidServicePeriodOrderBy::EndDate => "endDate",
        }
    }
}

impl From<PrepaidServicePeriodOrderBy> for Scalar {
    fn from(order: PrepaidServicePeriodOrderBy) -> Self {
        Scalar::Str(order.as_str().to_string())
    }
}

/// Filters for the prepaid service period list endpoint.
#[derive(Debug, Clone, Default)]
pub struct PrepaidServicePeriodSearchParams {
    /// Filter by service
    pub service_id: Option<i64>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
    /// Sort key
    pub order: Option<PrepaidServicePeriodOrderBy>,
    /// Sort direction
    pub direction: Option<SortDirection>,
    /// Periods created on or after this date (ISO 8601)
    pub created_date_from: Option<String>,
    /// Periods created on or before this date (ISO 8601)
    pub created_date_to: Option<String>,
    /// Periods starting on or after this date (ISO 8601)
    pub start_date_from: Option<String>,
    /// Periods starting on or before this date (ISO 8601)
    pub start_date_to: Option<String>,
    /// Periods ending on or after this date (ISO 8601)
    pub end_date_from: Option<String>,
    /// Periods ending on or before this date (ISO 8601)
    pub end_date_to: Option<String>,
}

impl PrepaidServicePeriodSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("serviceId", self.service_id);
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q.push_opt("order", self.order.map(Scalar::from));
        q.push_opt("direction", self.direction.map(Scalar::from));
        q.push_opt("createdDateFrom", self.created_date_from.clone());
        q.push_opt("createdDateTo", self.created_date_to.clone());
        q.push_opt("startDateFrom", self.start_date_from.clone());
        q.push_opt("startDateTo", self.start_date_to.clone());
        q.push_opt("endDateFrom", self.end_date_from.clone());
        q.push_opt("endDateTo", self.end_date_to.clone());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_round_trips_through_i32() {
        assert_eq!(ServiceStatus::from(1), ServiceStatus::Active);
        assert_eq!(i32::from(ServiceStatus::Quoted), 7);
        assert_eq!(ServiceStatus::from(42), ServiceStatus::Unknown(42));
    }

    #[test]
    fn status_deserializes_from_wire_integer() {
        let json = serde_json::json!({
            "id": 1,
            "clientId": 2,
            "organizationId": 1,
            "name": "Internet 100/20",
            "status": 3,
        });
        let service: ServiceReadOnly = serde_json::from_value(json).unwrap();
        assert_eq!(service.status, ServiceStatus::Suspended);
    }

    #[test]
    fn statuses_filter_serializes_as_repeated_array_key() {
        let params = ServiceSearchParams {
            statuses: Some(vec![ServiceStatus::Active, ServiceStatus::Suspended]),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().to_query_string(),
            "?statuses[]=1&statuses[]=3"
        );
    }

    #[test]
    fn writable_requires_only_the_name() {
        let service = ServiceWritable::new("Internet 50/10");
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["name"], "Internet 50/10");
        assert!(json.get("price").is_none());
    }
}
