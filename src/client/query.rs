//! Query-string construction for search and list endpoints.
//!
//! The UISP CRM API takes filters as standard URL query parameters, with
//! array-valued filters repeated as `key[]=value` pairs (e.g. `statuses[]`,
//! `clientTagIds[]`). [`QueryParams`] collects typed values in insertion
//! order and [`QueryParams::to_query_string`] serializes them.

use std::fmt;

use url::form_urlencoded;

/// A single scalar query value, coerced to its string form on encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean value, encoded as `true`/`false`
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// A query parameter value: one scalar, or a sequence serialized as
/// repeated `key[]=element` pairs in element order.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A single `key=value` pair
    Scalar(Scalar),
    /// Repeated `key[]=element` pairs, order preserved
    Seq(Vec<Scalar>),
}

impl From<Scalar> for QueryValue {
    fn from(value: Scalar) -> Self {
        QueryValue::Scalar(value)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Scalar(s.into())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Scalar(s.into())
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Scalar(n.into())
    }
}

impl From<i32> for QueryValue {
    fn from(n: i32) -> Self {
        QueryValue::Scalar(n.into())
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Scalar(n.into())
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Scalar(x.into())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Scalar(b.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::Seq(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered collection of query parameters.
///
/// Keys with an absent (`None`) value are kept in the collection but never
/// appear in the serialized output.
///
/// # Example
///
/// ```
/// use uisp_crm_rs::client::query::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.push("limit", 10);
/// params.push("query", "test search");
/// params.push("statuses", vec![1, 2]);
/// params.push_opt("clientId", None::<i64>);
///
/// assert_eq!(
///     params.to_query_string(),
///     "?limit=10&query=test+search&statuses[]=1&statuses[]=2",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((key.into(), Some(value.into())));
    }

    /// Append a parameter that may be absent. Absent parameters are
    /// skipped during serialization regardless of their key.
    pub fn push_opt<V: Into<QueryValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.pairs.push((key.into(), value.map(Into::into)));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Returns `true` if no parameters have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize into a query string.
    ///
    /// Returns `""` when the collection is empty or every value is absent;
    /// otherwise a string starting with `?`. Encoding follows standard URL
    /// query rules (space becomes `+`). Sequence values produce one
    /// `key[]=element` pair per element; keys that already end in `[]` or
    /// `%5B%5D` keep their suffix without doubling it.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            let Some(value) = value else { continue };
            match value {
                QueryValue::Scalar(scalar) => {
                    append_pair(&mut out, &encode(key), scalar);
                }
                QueryValue::Seq(items) => {
                    let key = seq_key(key);
                    for item in items {
                        append_pair(&mut out, &key, item);
                    }
                }
            }
        }
        if out.is_empty() {
            out
        } else {
            format!("?{out}")
        }
    }
}

/// Serialize `params` into a query string. See
/// [`QueryParams::to_query_string`] for the contract.
pub fn build_query_string(params: &QueryParams) -> String {
    params.to_query_string()
}

fn encode(component: &str) -> String {
    form_urlencoded::byte_serialize(component.as_bytes()).collect()
}

/// Sequence keys get a `[]` suffix unless the caller already supplied one,
/// in either literal or percent-encoded spelling.
fn seq_key(key: &str) -> String {
    if let Some(base) = key.strip_suffix("[]") {
        format!("{}[]", encode(base))
    } else if let Some(base) = key.strip_suffix("%5B%5D") {
        format!("{}%5B%5D", encode(base))
    } else {
        format!("{}[]", encode(key))
    }
}

fn append_pair(out: &mut String, encoded_key: &str, value: &Scalar) {
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(encoded_key);
    out.push('=');
    out.push_str(&encode(&value.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_serialize_to_empty_string() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn all_absent_params_serialize_to_empty_string() {
        let mut params = QueryParams::new();
        params.push_opt("limit", None::<i64>);
        params.push_opt("query", None::<&str>);
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn scalars_encode_with_leading_question_mark() {
        let params = QueryParams::new()
            .with("limit", 10)
            .with("offset", 0)
            .with("query", "test search");
        let qs = params.to_query_string();
        assert!(qs.starts_with('?'));
        assert!(qs.contains("limit=10"));
        assert!(qs.contains("offset=0"));
        assert!(qs.contains("query=test+search"));
    }

    #[test]
    fn sequences_repeat_the_key_in_order() {
        let params = QueryParams::new().with("statuses", vec![1, 2, 3]);
        assert_eq!(
            params.to_query_string(),
            "?statuses[]=1&statuses[]=2&statuses[]=3"
        );
    }

    #[test]
    fn absent_values_are_skipped() {
        let mut params = QueryParams::new();
        params.push("limit", 10);
        params.push_opt("offset", None::<i64>);
        params.push_opt("query", None::<&str>);
        params.push("isArchived", 0);
        let qs = params.to_query_string();
        assert!(qs.contains("limit=10"));
        assert!(qs.contains("isArchived=0"));
        assert!(!qs.contains("offset"));
        assert!(!qs.contains("query"));
    }

    #[test]
    fn presuffixed_keys_are_not_double_bracketed() {
        let params = QueryParams::new().with("statuses[]", vec![1, 2]);
        assert_eq!(params.to_query_string(), "?statuses[]=1&statuses[]=2");

        let params = QueryParams::new().with("statuses%5B%5D", vec![1]);
        assert_eq!(params.to_query_string(), "?statuses%5B%5D=1");
    }

    #[test]
    fn scalar_coercion_matches_wire_expectations() {
        let params = QueryParams::new()
            .with("visible", true)
            .with("price", 29.99)
            .with("whole", 10.0);
        let qs = params.to_query_string();
        assert!(qs.contains("visible=true"));
        assert!(qs.contains("price=29.99"));
        assert!(qs.contains("whole=10"));
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = QueryParams::new().with("query", "a&b=c");
        assert_eq!(params.to_query_string(), "?query=a%26b%3Dc");
    }

    #[test]
    fn mixed_absent_and_sequence_values() {
        let mut params = QueryParams::new();
        params.push_opt("uninvoicedFeeTypes", None::<Vec<i64>>);
        params.push("clientTagIds", vec![7]);
        assert_eq!(params.to_query_string(), "?clientTagIds[]=7");
    }
}
