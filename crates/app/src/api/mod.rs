//! Typed clients for the backend's HTTP endpoints.
//!
//! Each endpoint gets an explicit result record instead of a dynamic
//! blob: a response that does not match the record surfaces as
//! [`ApiError::Parse`](crate::provider::ApiError::Parse) rather than
//! propagating silently. Mutation acknowledgments are the one exception;
//! their shape is backend-owned and the admin screen relays them to the
//! live channel verbatim, so they stay [`serde_json::Value`].

mod auth;
mod graphics;
mod users;

pub use auth::{AuthApi, SignInRequest, SignUpRequest};
pub use graphics::{AvgTime, GraphicsApi, TotalSales};
pub use users::{
    UpdateProfileAdmRequest, UpdateProfileRequest, UpdateUserAdmRequest, UpdateUserRequest, UserApi,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a decimal the backend may send as a string or a number.
///
/// Unparseable values become zero; a garbled amount must not take a
/// chart down.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Lenient string-or-number decimal conversion.
pub(crate) fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
        Value::Number(n) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_from_string() {
        assert_eq!(
            decimal_from_value(&json!("150.50")),
            "150.50".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_decimal_from_number() {
        assert_eq!(
            decimal_from_value(&json!(150.5)),
            "150.5".parse::<Decimal>().unwrap()
        );
        assert_eq!(decimal_from_value(&json!(1000)), Decimal::from(1000));
    }

    #[test]
    fn test_garbage_becomes_zero() {
        assert_eq!(decimal_from_value(&json!("not a number")), Decimal::ZERO);
        assert_eq!(decimal_from_value(&json!(null)), Decimal::ZERO);
        assert_eq!(decimal_from_value(&json!({"total": 1})), Decimal::ZERO);
    }
}
