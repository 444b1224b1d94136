//! Credit note models: credit notes, their items, and templates.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

use super::base::SortDirection;
use super::invoice::InvoiceItemWritable;

/// Fields accepted when creating or updating a credit note.
///
/// Items share the invoice item shape; see [`InvoiceItemWritable`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteWritable {
    /// Issuing organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// Credit note template to render with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_note_template_id: Option<i64>,
    /// Credit note number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Notes printed on the credit note
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
    /// Credit note line items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_note_items: Option<Vec<InvoiceItemWritable>>,
}

/// A credit note as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteReadOnly {
    /// Credit note ID
    pub id: i64,
    /// Credited client
    pub client_id: i64,
    /// Issuing organization
    pub organization_id: i64,
    /// Credit note number
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
    /// Credit note total
    #[serde(default)]
    pub total: f64,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Date the credit note email was sent (ISO 8601)
    #[serde(default)]
    pub email_sent_date: Option<String>,
    /// Template the credit note was rendered with
    #[serde(default)]
    pub credit_note_template_id: Option<i64>,
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
    /// Notes printed on the credit note
    #[serde(default)]
    pub notes: Option<String>,
    /// Internal notes
    #[serde(default)]
    pub admin_notes: Option<String>,
    /// Credit note line items
    #[serde(default)]
    pub credit_note_items: Vec<CreditNoteItemReadOnly>,
}

/// A credit note line item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteItemReadOnly {
    /// Item ID
    pub id: i64,
    /// Owning credit note
    pub credit_note_id: i64,
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
    /// Label for the discount on the credit note
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

/// Sort keys accepted by the credit note list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditNoteOrderBy {
    /// `clientFirstName`
    ClientFirstName,
    /// `clientLastName`
    ClientLastName,
    /// `createdDate`
    CreatedDate,
    /// `number`
    Number,
}

impl CreditNoteOrderBy {
    /// The wire form of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditNoteOrderBy::ClientFirstName => "clientFirstName",
            CreditNoteOrderBy::ClientLastName => "clientLastName",
            CreditNoteOrderBy::CreatedDate => "createdDate",
            CreditNoteOrderBy::Number => "number",
        }
    }
}

impl From<CreditNoteOrderBy> for Scalar {
    fn from(order: CreditNoteOrderBy) -> Self {
        Scalar::Str(order.as_str().to_string())
    }
}

/// Filters for the credit note list endpoint.
#[derive(Debug, Clone, Default)]
pub struct CreditNoteSearchParams {
    /// Filter by organization
    pub organization_id: Option<i64>,
    /// Filter by client
    pub client_id: Option<i64>,
    /// Credit notes created on or after this date (ISO 8601)
    pub created_date_from: Option<String>,
    /// Credit notes created on or before this date (ISO 8601)
    pub created_date_to: Option<String>,
    /// Filter by credit note number
    pub number: Option<String>,
    /// Full-text query
    pub query: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
    /// Sort key
    pub order: Option<CreditNoteOrderBy>,
    /// Sort direction
    pub direction: Option<SortDirection>,
}

impl CreditNoteSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("organizationId", self.organization_id);
        q.push_opt("clientId", self.client_id);
        q.push_opt("createdDateFrom", self.created_date_from.clone());
        q.push_opt("createdDateTo", self.created_date_to.clone());
        q.push_opt("number", self.number.clone());
        q.push_opt("query", self.query.clone());
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q.push_opt("order", self.order.map(Scalar::from));
        q.push_opt("direction", self.direction.map(Scalar::from));
        q
    }
}

/// A credit note template as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteTemplateReadOnly {
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
