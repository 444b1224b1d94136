//! Document models: documents, document templates, custom attribute
//! definitions, and geocoding results.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

use super::base::CustomAttributeType;

/// Fields accepted when creating a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWritable {
    /// Client the document belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    /// Document name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// File content (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    /// MIME content type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A document as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReadOnly {
    /// Document ID
    pub id: i64,
    /// Client the document belongs to
    pub client_id: Option<i64>,
    /// Document name
    pub name: String,
    /// File size in bytes
    #[serde(default)]
    pub size: i64,
    /// MIME content type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Document kind (`document`, `image`, `other`)
    #[serde(default)]
    pub r#type: Option<String>,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Filters for the document list endpoint.
#[derive(Debug, Clone, Default)]
pub struct DocumentSearchParams {
    /// Filter by client
    pub client_id: Option<i64>,
    /// Filter by document kinds (any match)
    pub types: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
}

impl DocumentSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("clientId", self.client_id);
        q.push_opt("types", self.types.clone());
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q
    }
}

/// A document template as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTemplateReadOnly {
    /// Template ID
    pub id: i64,
    /// Owning organization
    #[serde(default)]
    pub organization_id: Option<i64>,
    /// Template name
    pub name: String,
    /// Template kind
    #[serde(default)]
    pub r#type: Option<String>,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Whether the template renders without errors
    #[serde(default)]
    pub is_valid: bool,
}

/// Fields accepted when creating or updating a custom attribute
/// definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeWritable {
    /// Attribute display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Entity kind the attribute attaches to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<CustomAttributeType>,
    /// Attribute key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A custom attribute definition as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeReadOnly {
    /// Attribute ID
    pub id: i64,
    /// Attribute display name
    pub name: String,
    /// Entity kind the attribute attaches to
    #[serde(default)]
    pub attribute_type: Option<CustomAttributeType>,
    /// Attribute key
    pub key: String,
}

/// Filters for the custom attribute list endpoint.
#[derive(Debug, Clone, Default)]
pub struct CustomAttributeSearchParams {
    /// Filter by entity kind
    pub attribute_type: Option<CustomAttributeType>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
}

impl CustomAttributeSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("attributeType", self.attribute_type.map(Scalar::from));
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q
    }
}

/// A geocoded location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Formatted address
    pub address: String,
    /// Country name
    pub country: Option<String>,
    /// State name
    pub state: Option<String>,
    /// City name
    pub city: Option<String>,
    /// ZIP / postal code
    pub zip_code: Option<String>,
}

/// A suggested address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSuggestion {
    /// Suggestion identifier
    pub id: String,
    /// Formatted address
    pub address: String,
    /// Country name
    pub country: Option<String>,
    /// State name
    pub state: Option<String>,
    /// City name
    pub city: Option<String>,
    /// ZIP / postal code
    pub zip_code: Option<String>,
}

/// Parameters for the geocode endpoint.
#[derive(Debug, Clone, Default)]
pub struct GeocodingParams {
    /// Address to geocode
    pub address: Option<String>,
    /// Latitude for reverse geocoding
    pub lat: Option<String>,
    /// Longitude for reverse geocoding
    pub lon: Option<String>,
}

impl GeocodingParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("address", self.address.clone());
        q.push_opt("lat", self.lat.clone());
        q.push_opt("lon", self.lon.clone());
        q
    }
}

/// Parameters for the address suggestion endpoint.
#[derive(Debug, Clone, Default)]
pub struct AddressSuggestionParams {
    /// Partial address to complete
    pub query: Option<String>,
    /// Latitude bias
    pub lat: Option<String>,
    /// Longitude bias
    pub lon: Option<String>,
    /// Session token for grouping suggestion requests
    pub session_token: Option<String>,
}

impl AddressSuggestionParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("query", self.query.clone());
        q.push_opt("lat", self.lat.clone());
        q.push_opt("lon", self.lon.clone());
        q.push_opt("sessionToken", self.session_token.clone());
        q
    }
}
