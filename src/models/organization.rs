//! Organization models: organizations, payment methods, payment plans,
//! fees, and outbound email.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

use super::base::FeeType;

/// Fields accepted when creating or updating an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationWritable {
    /// Organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    /// Tax ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
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
    /// Bank account label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_name: Option<String>,
    /// Bank account field 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_field1: Option<String>,
    /// Bank account field 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_field2: Option<String>,
    /// Logo stamp (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_stamp: Option<String>,
    /// Stamp (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp: Option<String>,
    /// Whether this is the selected (default) organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// An organization as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationReadOnly {
    /// Organization ID
    pub id: i64,
    /// Organization name
    pub name: String,
    /// Registration number
    pub registration_number: Option<String>,
    /// Tax ID
    pub tax_id: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Street address, line 1
    pub street1: Option<String>,
    /// Street address, line 2
    pub street2: Option<String>,
    /// City
    pub city: Option<String>,
    /// Country ID
    pub country_id: Option<i64>,
    /// State ID
    pub state_id: Option<i64>,
    /// ZIP / postal code
    pub zip_code: Option<String>,
    /// Bank account label
    pub bank_account_name: Option<String>,
    /// Bank account field 1
    pub bank_account_field1: Option<String>,
    /// Bank account field 2
    pub bank_account_field2: Option<String>,
    /// Logo stamp (base64)
    pub logo_stamp: Option<String>,
    /// Stamp (base64)
    pub stamp: Option<String>,
    /// Whether this is the selected (default) organization
    #[serde(default)]
    pub selected: bool,
    /// Currency code
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Next invoice number for an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextInvoiceNumber {
    /// The number the next invoice will receive
    pub next_invoice_number: String,
}

/// Next proforma invoice number for an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextProformaInvoiceNumber {
    /// The number the next proforma invoice will receive
    pub next_proforma_invoice_number: String,
}

/// Next quote number for an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuoteNumber {
    /// The number the next quote will receive
    pub next_quote_number: String,
}

/// Fields accepted when creating or updating a payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodWritable {
    /// Method label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Method identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Whether the method is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether the method is visible to clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// A payment method as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodReadOnly {
    /// Method ID
    pub id: i64,
    /// Method label
    pub name: String,
    /// Method identifier
    #[serde(default)]
    pub method: Option<String>,
    /// Whether the method is enabled
    #[serde(default)]
    pub enabled: bool,
    /// Whether the method is visible to clients
    #[serde(default)]
    pub visible: bool,
    /// Whether the method is system-defined
    #[serde(default)]
    pub is_system: bool,
}

/// Filters for the payment method list endpoint.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethodSearchParams {
    /// Filter by client visibility
    pub visible: Option<bool>,
    /// Filter by system-defined flag
    pub is_system: Option<bool>,
}

impl PaymentMethodSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("visible", self.visible);
        q.push_opt("isSystem", self.is_system);
        q
    }
}

/// Fields accepted when creating a payment plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanWritable {
    /// Plan label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// Billing period in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_days: Option<i32>,
    /// Use the smallest possible period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smallest_period: Option<bool>,
    /// Whether the plan is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A payment plan as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanReadOnly {
    /// Plan ID
    pub id: i64,
    /// Plan label
    pub name: String,
    /// Owning organization
    pub organization_id: i64,
    /// Billing period in days
    #[serde(default)]
    pub period_days: i32,
    /// Use the smallest possible period
    #[serde(default)]
    pub smallest_period: bool,
    /// Whether the plan is active
    #[serde(default)]
    pub active: bool,
}

/// A fee as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    /// Fee ID
    pub id: i64,
    /// Charged client
    pub client_id: i64,
    /// Fee type
    pub r#type: FeeType,
    /// Fee label
    pub name: String,
    /// Fee amount
    #[serde(default)]
    pub price: f64,
    /// Whether the fee is taxable
    #[serde(default)]
    pub taxable: bool,
    /// Invoice the fee was billed on
    #[serde(default)]
    pub invoice_id: Option<i64>,
    /// Label used on the invoice
    #[serde(default)]
    pub invoice_label: Option<String>,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Invoice item the fee became
    #[serde(default)]
    pub invoice_item_id: Option<i64>,
}

/// Filters for the fee list endpoint.
#[derive(Debug, Clone, Default)]
pub struct FeeSearchParams {
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
    /// Filter by client
    pub client_id: Option<i64>,
    /// Filter by fee type
    pub r#type: Option<FeeType>,
    /// 1 for invoiced only, 0 for uninvoiced only
    pub invoiced: Option<i32>,
}

impl FeeSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q.push_opt("clientId", self.client_id);
        q.push_opt("type", self.r#type.map(Scalar::from));
        q.push_opt("invoiced", self.invoiced);
        q
    }
}

/// An email message to enqueue through an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Subject line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,
    /// Carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    /// Blind-carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    /// Attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
}

/// An attachment on an enqueued email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAttachment {
    /// File name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// File content (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// MIME content type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}
