//! Shared enums and parameter types used across resource models.

use serde::{Deserialize, Serialize};

use crate::client::query::Scalar;

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// The wire form of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl From<SortDirection> for Scalar {
    fn from(direction: SortDirection) -> Self {
        Scalar::Str(direction.as_str().to_string())
    }
}

/// Fee type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FeeType {
    /// Late payment fee
    LateFee,
    /// One-time setup fee
    SetupFee,
    /// Early termination fee
    EarlyTerminationFee,
    /// Unrecognized value from a newer server
    Unknown(i32),
}

impl From<i32> for FeeType {
    fn from(value: i32) -> Self {
        match value {
            1 => FeeType::LateFee,
            2 => FeeType::SetupFee,
            3 => FeeType::EarlyTerminationFee,
            other => FeeType::Unknown(other),
        }
    }
}

impl From<FeeType> for i32 {
    fn from(value: FeeType) -> Self {
        match value {
            FeeType::LateFee => 1,
            FeeType::SetupFee => 2,
            FeeType::EarlyTerminationFee => 3,
            FeeType::Unknown(other) => other,
        }
    }
}

impl From<FeeType> for Scalar {
    fn from(value: FeeType) -> Self {
        Scalar::Int(i32::from(value).into())
    }
}

/// Entity kind a custom attribute is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomAttributeType {
    /// Attached to clients
    Client,
    /// Attached to invoices
    Invoice,
    /// Attached to payments
    Payment,
    /// Attached to services
    Service,
}

impl CustomAttributeType {
    /// The wire form of this attribute type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomAttributeType::Client => "client",
            CustomAttributeType::Invoice => "invoice",
            CustomAttributeType::Payment => "payment",
            CustomAttributeType::Service => "service",
        }
    }
}

impl From<CustomAttributeType> for Scalar {
    fn from(value: CustomAttributeType) -> Self {
        Scalar::Str(value.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_type_round_trips_through_i32() {
        assert_eq!(FeeType::from(2), FeeType::SetupFee);
        assert_eq!(i32::from(FeeType::LateFee), 1);
        assert_eq!(FeeType::from(9), FeeType::Unknown(9));
        assert_eq!(i32::from(FeeType::Unknown(9)), 9);
    }

    #[test]
    fn sort_direction_serializes_uppercase() {
        let json = serde_json::to_string(&SortDirection::Asc).unwrap();
        assert_eq!(json, "\"ASC\"");
    }
}
