//! Invoice models: invoices, invoice items, and invoice templates.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

use super::base::SortDirection;

/// Fields accepted when creating, updating, or previewing an invoice.
///
/// Items referenced by `id` are updated in place; items without an `id`
/// are appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWritable {
    /// Issuing organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// Invoice template to render with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_template_id: Option<i64>,
    /// Maturity days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_days: Option<i32>,
    /// Notes printed on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Internal notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    /// Discount percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Discount label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_label: Option<String>,
    /// Invoice line items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_items: Option<Vec<InvoiceItemWritable>>,
    /// Custom attribute key/value pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<serde_json::Value>,
}

/// An invoice as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceReadOnly {
    /// Invoice ID
    pub id: i64,
    /// Billed client
    pub client_id: i64,
    /// Issuing organization
    pub organization_id: i64,
    /// Invoice number
    pub number: String,
    /// Client first name at issue time
    #[serde(default)]
    pub client_first_name: Option<String>,
    /// Client last name at issue time
    #[serde(default)]
    pub client_last_name: Option<String>,
    /// Client company name at issue time
    #[serde(default)]
    pub client_company_name: Option<String>,
    /// Client custom identifier at issue time
    #[serde(default)]
    pub client_user_ident: Option<String>,
    /// Invoice total
    #[serde(default)]
    pub total: f64,
    /// Amount already paid
    #[serde(default)]
    pub amount_paid: f64,
    /// Invoice status
    #[serde(default)]
    pub status: i32,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Date the invoice email was sent (ISO 8601)
    #[serde(default)]
    pub email_sent_date: Option<String>,
    /// Maturity date (ISO 8601)
    #[serde(default)]
    pub maturity_date: Option<String>,
    /// Template the invoice was rendered with
    #[serde(default)]
    pub invoice_template_id: Option<i64>,
    /// Organization name at issue time
    #[serde(default)]
    pub organization_name: Option<String>,
    /// Organization registration number at issue time
    #[serde(default)]
    pub organization_registration_number: Option<String>,
    /// Organization tax ID at issue time
    #[serde(default)]
    pub organization_tax_id: Option<String>,
    /// Organization street, line 1
    #[serde(default)]
    pub organization_street1: Option<String>,
    /// Organization street, line 2
    #[serde(default)]
    pub organization_street2: Option<String>,
    /// Organization city
    #[serde(default)]
    pub organization_city: Option<String>,
    /// Organization country ID
    #[serde(default)]
    pub organization_country_id: Option<i64>,
    /// Organization state ID
    #[serde(default)]
    pub organization_state_id: Option<i64>,
    /// Organization ZIP / postal code
    #[serde(default)]
    pub organization_zip_code: Option<String>,
    /// Organization bank account label
    #[serde(default)]
    pub organization_bank_account_name: Option<String>,
    /// Organization bank account field 1
    #[serde(default)]
    pub organization_bank_account_field1: Option<String>,
    /// Organization bank account field 2
    #[serde(default)]
    pub organization_bank_account_field2: Option<String>,
    /// Currency code
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Discount percentage
    #[serde(default)]
    pub discount: Option<f64>,
    /// Discount label
    #[serde(default)]
    pub discount_label: Option<String>,
    /// Notes printed on the invoice
    #[serde(default)]
    pub notes: Option<String>,
    /// Internal notes
    #[serde(default)]
    pub admin_notes: Option<String>,
    /// Whether this is a proforma invoice
    #[serde(default)]
    pub proforma: bool,
    /// Custom attribute key/value pairs
    #[serde(default)]
    pub custom_attributes: serde_json::Value,
    /// Invoice line items
    #[serde(default)]
    pub invoice_items: Vec<InvoiceItemReadOnly>,
}

/// Sort keys accepted by the invoice list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceOrderBy {
    /// `clientLastName`
    ClientLastName,
    /// `createdDate`
    CreatedDate,
    /// `number`
    Number,
}

impl InvoiceOrderBy {
    /// The wire form of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceOrderBy::ClientLastName => "clientLastName",
            InvoiceOrderBy::CreatedDate => "createdDate",
            InvoiceOrderBy::Number => "number",
        }
    }
}

impl From<InvoiceOrderBy> for Scalar {
    fn from(order: InvoiceOrderBy) -> Self {
        Scalar::Str(order.as_str().to_string())
    }
}

/// Filters for the invoice list endpoint.
#[derive(Debug, Clone, Default)]
pub struct InvoiceSearchParams {
    /// Filter by organization
    pub organization_id: Option<i64>,
    /// Filter by client
    pub client_id: Option<i64>,
    /// Invoices created on or after this date (ISO 8601)
    pub created_date_from: Option<String>,
    /// Invoices created on or before this date (ISO 8601)
    pub created_date_to: Option<String>,
    /// Filter by statuses (any match)
    pub statuses: Option<Vec<i32>>,
    /// Filter by invoice number
    pub number: Option<String>,
    /// 1 for overdue only
    pub overdue: Option<i32>,
    /// 1 for proforma only, 0 for regular only
    pub proforma: Option<i32>,
    /// Custom attribute key to match
    pub custom_attribute_key: Option<String>,
    /// Custom attribute value to match
    pub custom_attribute_value: Option<String>,
    /// Full-text query
    pub query: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
    /// Sort key
    pub order: Option<InvoiceOrderBy>,
    /// Sort direction
    pub direction: Option<SortDirection>,
}

impl InvoiceSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("organizationId", self.organization_id);
        q.push_opt("clientId", self.client_id);
        q.push_opt("createdDateFrom", self.created_date_from.clone());
        q.push_opt("createdDateTo", self.created_date_to.clone());
        q.push_opt("statuses", self.statuses.clone());
        q.push_opt("number", self.number.clone());
        q.push_opt("overdue", self.overdue);
        q.push_opt("proforma", self.proforma);
        q.push_opt("customAttributeKey", self.custom_attribute_key.clone());
        q.push_opt("customAttributeValue", self.custom_attribute_value.clone());
        q.push_opt("query", self.query.clone());
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q.push_opt("order", self.order.map(Scalar::from));
        q.push_opt("direction", self.direction.map(Scalar::from));
        q
    }
}

/// Fields accepted when creating or updating an invoice line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemWritable {
    /// Existing item to update; omit to append a new item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Item type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Line label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Unit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// First tax rate (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate1: Option<f64>,
    /// Second tax rate (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate2: Option<f64>,
    /// Third tax rate (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate3: Option<f64>,
    /// Discount (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Label for the discount on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_invoice_label: Option<String>,
    /// Discount amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    /// Product the line refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
}

/// An invoice line item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemReadOnly {
    /// Item ID
    pub id: i64,
    /// Owning invoice
    pub invoice_id: i64,
    /// Item type
    #[serde(default)]
    pub r#type: Option<String>,
    /// Line label
    #[serde(default)]
    pub label: Option<String>,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Quantity
    #[serde(default)]
    pub quantity: f64,
    /// Unit label
    #[serde(default)]
    pub unit: Option<String>,
    /// First tax rate (percent)
    #[serde(default)]
    pub tax_rate1: Option<f64>,
    /// Second tax rate (percent)
    #[serde(default)]
    pub tax_rate2: Option<f64>,
    /// Third tax rate (percent)
    #[serde(default)]
    pub tax_rate3: Option<f64>,
    /// Discount (percent)
    #[serde(default)]
    pub discount_percent: Option<f64>,
    /// Label for the discount on the invoice
    #[serde(default)]
    pub discount_invoice_label: Option<String>,
    /// Discount amount
    #[serde(default)]
    pub discount_value: Option<f64>,
    /// Line total
    #[serde(default)]
    pub total: f64,
    /// Total discount on the line
    #[serde(default)]
    pub total_discount: f64,
    /// Total tax on the line
    #[serde(default)]
    pub total_tax: f64,
    /// Product the line refers to
    #[serde(default)]
    pub product_id: Option<i64>,
}

/// An invoice template as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTemplateReadOnly {
    /// Template ID
    pub id: i64,
    /// Owning organization
    #[serde(default)]
    pub organization_id: Option<i64>,
    /// Template name
    pub name: String,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Whether the template renders without errors
    #[serde(default)]
    pub is_valid: bool,
    /// Official name printed on documents
    #[serde(default)]
    pub official_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_mix_scalars_and_arrays() {
        let params = InvoiceSearchParams {
            client_id: Some(12),
            statuses: Some(vec![1, 2]),
            overdue: Some(1),
            order: Some(InvoiceOrderBy::CreatedDate),
            direction: Some(SortDirection::Asc),
            ..Default::default()
        };
        let qs = params.to_query().to_query_string();
        assert!(qs.contains("clientId=12"));
        assert!(qs.contains("statuses[]=1&statuses[]=2"));
        assert!(qs.contains("overdue=1"));
        assert!(qs.contains("order=createdDate"));
        assert!(qs.contains("direction=ASC"));
    }

    #[test]
    fn item_type_field_uses_raw_identifier() {
        let item = InvoiceItemWritable {
            r#type: Some("service".to_string()),
            label: Some("Internet".to_string()),
            price: Some(29.99),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "service");
        assert!(json.get("id").is_none());
    }
}
