//! Client (subscriber) models: clients, bank accounts, contacts, tags,
//! and client logs.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

use super::base::SortDirection;

/// Fields accepted when creating or updating a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWritable {
    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// Custom client identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ident: Option<String>,
    /// Previous internet service provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_isp: Option<String>,
    /// Whether the client is a lead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lead: Option<bool>,
    /// Residential (1) or company (2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<i32>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Company registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_registration_number: Option<String>,
    /// Company tax ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_tax_id: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Client zone username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Client zone password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
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
    /// Send invoices by post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoice_by_post: Option<bool>,
    /// Invoice maturity days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_maturity_days: Option<i32>,
    /// Suspend services when payment is overdue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_service_due: Option<bool>,
    /// Delay suspension after maturity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_service_due_delayed: Option<bool>,
    /// Tax ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Generate recurring invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_invoices: Option<bool>,
    /// Address latitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_gps_lat: Option<f64>,
    /// Address longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_gps_lon: Option<f64>,
    /// Company contact first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_contact_first_name: Option<String>,
    /// Company contact last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_contact_last_name: Option<String>,
    /// Whether the client is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Avatar background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
    /// Custom attribute key/value pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<serde_json::Value>,
}

/// A client as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientReadOnly {
    /// Client ID
    pub id: i64,
    /// Owning organization
    pub organization_id: i64,
    /// Custom client identifier
    #[serde(default)]
    pub user_ident: Option<String>,
    /// Previous internet service provider
    pub previous_isp: Option<String>,
    /// Whether the client is a lead
    #[serde(default)]
    pub is_lead: bool,
    /// Residential (1) or company (2)
    #[serde(default)]
    pub client_type: i32,
    /// Company name
    pub company_name: Option<String>,
    /// Company registration number
    pub company_registration_number: Option<String>,
    /// Company tax ID
    pub company_tax_id: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Client zone username
    #[serde(default)]
    pub username: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
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
    /// Internal note
    pub note: Option<String>,
    /// Send invoices by post
    #[serde(default)]
    pub send_invoice_by_post: bool,
    /// Invoice maturity days
    #[serde(default)]
    pub invoice_maturity_days: Option<i32>,
    /// Suspend services when payment is overdue
    #[serde(default)]
    pub stop_service_due: bool,
    /// Delay suspension after maturity
    #[serde(default)]
    pub stop_service_due_delayed: bool,
    /// Tax ID
    pub tax_id: Option<String>,
    /// Registration date (ISO 8601)
    #[serde(default)]
    pub registration_date: Option<String>,
    /// Generate recurring invoices
    #[serde(default)]
    pub generate_invoices: bool,
    /// Address latitude
    pub address_gps_lat: Option<f64>,
    /// Address longitude
    pub address_gps_lon: Option<f64>,
    /// Company contact first name
    pub company_contact_first_name: Option<String>,
    /// Company contact last name
    pub company_contact_last_name: Option<String>,
    /// Whether the client is active
    #[serde(default)]
    pub is_active: bool,
    /// Avatar background color
    #[serde(default)]
    pub avatar_color: Option<String>,
    /// Whether any invoice is overdue
    #[serde(default)]
    pub has_overdue_invoice: bool,
    /// Account balance
    #[serde(default)]
    pub account_balance: f64,
    /// Outstanding amount
    #[serde(default)]
    pub account_outstanding: f64,
    /// Credit amount
    #[serde(default)]
    pub account_credit: f64,
    /// Currency code of the owning organization
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Name of the owning organization
    #[serde(default)]
    pub organization_name: Option<String>,
    /// Custom attribute key/value pairs
    #[serde(default)]
    pub custom_attributes: serde_json::Value,
    /// Tags attached to this client
    #[serde(default)]
    pub tags: Vec<ClientTagReadOnly>,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Sort keys accepted by the client list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientOrderBy {
    /// `user.firstName`
    FirstName,
    /// `user.lastName`
    LastName,
    /// `client.registrationDate`
    RegistrationDate,
    /// `client.id`
    Id,
}

impl ClientOrderBy {
    /// The wire form of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientOrderBy::FirstName => "user.firstName",
            ClientOrderBy::LastName => "user.lastName",
            ClientOrderBy::RegistrationDate => "client.registrationDate",
            ClientOrderBy::Id => "client.id",
        }
    }
}

impl From<ClientOrderBy> for Scalar {
    fn from(order: ClientOrderBy) -> Self {
        Scalar::Str(order.as_str().to_string())
    }
}

/// Filters for the client list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ClientSearchParams {
    /// Filter by organization
    pub organization_id: Option<i64>,
    /// Filter by custom identifier
    pub user_ident: Option<String>,
    /// Custom attribute key to match
    pub custom_attribute_key: Option<String>,
    /// Custom attribute value to match
    pub custom_attribute_value: Option<String>,
    /// 1 for leads only, 0 for clients only
    pub lead: Option<i32>,
    /// Filter by email
    pub email: Option<String>,
    /// Filter by phone
    pub phone: Option<String>,
    /// Filter by username
    pub username: Option<String>,
    /// 1 for archived only, 0 for active only
    pub is_archived: Option<i32>,
    /// Full-text query
    pub query: Option<String>,
    /// Filter by tag IDs (any match)
    pub client_tag_ids: Option<Vec<i64>>,
    /// Filter by uninvoiced fee types
    pub uninvoiced_fee_types: Option<Vec<i32>>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
    /// Sort key
    pub order: Option<ClientOrderBy>,
    /// Sort direction
    pub direction: Option<SortDirection>,
}

impl ClientSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("organizationId", self.organization_id);
        q.push_opt("userIdent", self.user_ident.clone());
        q.push_opt("customAttributeKey", self.custom_attribute_key.clone());
        q.push_opt("customAttributeValue", self.custom_attribute_value.clone());
        q.push_opt("lead", self.lead);
        q.push_opt("email", self.email.clone());
        q.push_opt("phone", self.phone.clone());
        q.push_opt("username", self.username.clone());
        q.push_opt("isArchived", self.is_archived);
        q.push_opt("query", self.query.clone());
        q.push_opt("clientTagIds", self.client_tag_ids.clone());
        q.push_opt("uninvoicedFeeTypes", self.uninvoiced_fee_types.clone());
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q.push_opt("order", self.order.map(Scalar::from));
        q.push_opt("direction", self.direction.map(Scalar::from));
        q
    }
}

/// Client zone credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCredentials {
    /// Client zone username
    pub username: String,
    /// Client zone password
    pub password: String,
}

/// Fields accepted when creating or updating a client bank account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBankAccount {
    /// Account label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bank-specific field 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field1: Option<String>,
    /// Bank-specific field 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field2: Option<String>,
    /// Bank-specific field 3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field3: Option<String>,
    /// Bank-specific field 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field4: Option<String>,
    /// Bank-specific field 5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field5: Option<String>,
}

/// A client bank account as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBankAccountReadOnly {
    /// Bank account ID
    pub id: i64,
    /// Owning client
    pub client_id: i64,
    /// Account label
    #[serde(default)]
    pub name: Option<String>,
    /// Bank-specific field 1
    pub field1: Option<String>,
    /// Bank-specific field 2
    pub field2: Option<String>,
    /// Bank-specific field 3
    pub field3: Option<String>,
    /// Bank-specific field 4
    pub field4: Option<String>,
    /// Bank-specific field 5
    pub field5: Option<String>,
}

/// Fields accepted when creating or updating a client contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContactWritable {
    /// Contact name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Receives billing emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_billing: Option<bool>,
    /// Receives general emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contact: Option<bool>,
    /// Contact type IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<i32>>,
}

/// A client contact as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContactReadOnly {
    /// Contact ID
    pub id: i64,
    /// Owning client
    pub client_id: i64,
    /// Contact name
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Receives billing emails
    #[serde(default)]
    pub is_billing: bool,
    /// Receives general emails
    #[serde(default)]
    pub is_contact: bool,
    /// Contact type IDs
    #[serde(default)]
    pub types: Vec<i32>,
}

/// Fields accepted when creating or updating a client tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTag {
    /// Tag label
    pub name: String,
    /// Background color (hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_background: Option<String>,
    /// Text color (hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_text: Option<String>,
}

/// A client tag as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTagReadOnly {
    /// Tag ID
    pub id: i64,
    /// Tag label
    pub name: String,
    /// Background color (hex)
    #[serde(default)]
    pub color_background: Option<String>,
    /// Text color (hex)
    #[serde(default)]
    pub color_text: Option<String>,
}

/// Fields accepted when creating or updating a client log entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLogWritable {
    /// Client the entry belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    /// Log message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Authoring user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A client log entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLogReadOnly {
    /// Log entry ID
    pub id: i64,
    /// Client the entry belongs to
    pub client_id: i64,
    /// Log message
    pub message: String,
    /// Authoring user
    pub user_id: Option<i64>,
    /// Authoring user's full name
    #[serde(default)]
    pub user_full_name: Option<String>,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Filters for the client log list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ClientLogSearchParams {
    /// Filter by client
    pub client_id: Option<i64>,
    /// Entries created on or after this date (ISO 8601)
    pub created_date_from: Option<String>,
    /// Entries created on or before this date (ISO 8601)
    pub created_date_to: Option<String>,
}

impl ClientLogSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("clientId", self.client_id);
        q.push_opt("createdDateFrom", self.created_date_from.clone());
        q.push_opt("createdDateTo", self.created_date_to.clone());
        q
    }
}

/// Pagination-only filters used by several list endpoints.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
}

impl PaginationParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_serialize_arrays_and_skip_absent() {
        let params = ClientSearchParams {
            organization_id: Some(1),
            client_tag_ids: Some(vec![3, 5]),
            query: Some("test search".to_string()),
            ..Default::default()
        };
        let qs = params.to_query().to_query_string();
        assert!(qs.contains("organizationId=1"));
        assert!(qs.contains("clientTagIds[]=3&clientTagIds[]=5"));
        assert!(qs.contains("query=test+search"));
        assert!(!qs.contains("email"));
    }

    #[test]
    fn order_by_uses_dotted_wire_names() {
        let params = ClientSearchParams {
            order: Some(ClientOrderBy::RegistrationDate),
            direction: Some(SortDirection::Desc),
            ..Default::default()
        };
        let qs = params.to_query().to_query_string();
        assert!(qs.contains("order=client.registrationDate"));
        assert!(qs.contains("direction=DESC"));
    }

    #[test]
    fn writable_skips_unset_fields() {
        let client = ClientWritable {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["firstName"], "John");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn read_only_tolerates_minimal_payload() {
        let json = serde_json::json!({
            "id": 7,
            "organizationId": 1,
            "previousIsp": null,
            "companyName": null,
            "companyRegistrationNumber": null,
            "companyTaxId": null,
            "firstName": "Jane",
            "lastName": "Doe",
            "phone": null,
            "street1": null,
            "street2": null,
            "city": null,
            "countryId": null,
            "stateId": null,
            "zipCode": null,
            "note": null,
            "taxId": null,
            "addressGpsLat": null,
            "addressGpsLon": null,
            "companyContactFirstName": null,
            "companyContactLastName": null,
        });
        let client: ClientReadOnly = serde_json::from_value(json).unwrap();
        assert_eq!(client.id, 7);
        assert_eq!(client.first_name.as_deref(), Some("Jane"));
        assert!(client.tags.is_empty());
    }
}
