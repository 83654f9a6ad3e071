//! Dashboard statistics endpoints.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use comandas_core::Series;

use crate::provider::{ApiError, ApiTransport, Method};

use super::lenient_decimal;

/// Running sales total (`graphics/totalSales`).
///
/// The backend serves the amount as a string or a number depending on the
/// aggregation path; both decode into an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TotalSales {
    #[serde(deserialize_with = "lenient_decimal")]
    pub total: Decimal,
}

/// Average order preparation time in minutes (`graphics/avgTime`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AvgTime {
    #[serde(deserialize_with = "lenient_decimal")]
    pub minutos: Decimal,
}

/// Client for the `graphics/*` endpoints.
#[derive(Clone)]
pub struct GraphicsApi {
    transport: Arc<dyn ApiTransport>,
}

impl GraphicsApi {
    /// Create a new client over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Monthly sales totals for the current year.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// `{labels, data}` series.
    #[instrument(skip(self))]
    pub async fn sales(&self) -> Result<Series, ApiError> {
        let response = self
            .transport
            .request(Method::Get, "graphics/sales", None)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Top-selling products for the given month (1-12).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// `{labels, data}` series.
    #[instrument(skip(self))]
    pub async fn best_seller(&self, month: u32) -> Result<Series, ApiError> {
        let response = self
            .transport
            .request(
                Method::Get,
                "graphics/bestSeller",
                Some(serde_json::json!({ "mes": month })),
            )
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Clients ranked by purchase count.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// `{labels, data}` series.
    #[instrument(skip(self))]
    pub async fn best_client(&self) -> Result<Series, ApiError> {
        let response = self
            .transport
            .request(Method::Get, "graphics/bestClient", None)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// The running sales total.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// `{total}` record.
    #[instrument(skip(self))]
    pub async fn total_sales(&self) -> Result<TotalSales, ApiError> {
        let response = self
            .transport
            .request(Method::Get, "graphics/totalSales", None)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Average preparation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// `{minutos}` record.
    #[instrument(skip(self))]
    pub async fn avg_time(&self) -> Result<AvgTime, ApiError> {
        let response = self
            .transport
            .request(Method::Get, "graphics/avgTime", None)
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_total_decodes_string_and_number() {
        let from_string: TotalSales =
            serde_json::from_value(serde_json::json!({"total": "1000.00"})).unwrap();
        let from_number: TotalSales =
            serde_json::from_value(serde_json::json!({"total": 1000.0})).unwrap();
        assert_eq!(from_string.total, "1000.00".parse::<Decimal>().unwrap());
        assert_eq!(from_number.total, Decimal::from(1000));
    }

    #[test]
    fn test_avg_time_decodes() {
        let avg: AvgTime = serde_json::from_value(serde_json::json!({"minutos": "12.5"})).unwrap();
        assert_eq!(avg.minutos, "12.5".parse::<Decimal>().unwrap());
    }
}
