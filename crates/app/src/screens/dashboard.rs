//! Admin dashboard screen.

use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde_json::Value;

use comandas_core::Series;

use crate::api::{GraphicsApi, lenient_decimal};
use crate::error::AppError;
use crate::live::{LiveChannel, Subscription, topics};
use crate::provider::ApiError;
use crate::state::AppContext;

/// A chart-ready dataset: the series buckets plus the legend label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataset {
    /// Legend label.
    pub label: String,
    /// Bucket labels, in display order.
    pub labels: Vec<String>,
    /// Bucket values, parallel to `labels`.
    pub data: Vec<f64>,
}

impl ChartDataset {
    fn from_series(label: &str, series: Series) -> Self {
        Self {
            label: label.to_owned(),
            labels: series.labels,
            data: series.data,
        }
    }
}

/// An incremental sales event from the `grafica` topic.
///
/// `mes` is a 1-based month index; `total` arrives as a string or a
/// number and unparseable amounts count as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesEvent {
    pub mes: i64,
    #[serde(deserialize_with = "lenient_decimal")]
    pub total: Decimal,
}

/// Controller for the admin dashboard.
///
/// Four independent reads load the view; only when all four have settled
/// is the screen marked ready. After that, incremental events from the
/// live channel are merged additively into the sales chart and the
/// running total. The increments are trusted at face value - there is no
/// reconciliation against the initial fetch, so a missed or duplicated
/// event drifts the totals until the next full load.
pub struct DashboardScreen {
    graphics: GraphicsApi,
    live: Arc<dyn LiveChannel>,
    /// Month (1-12) the best-seller ranking is scoped to.
    pub month: u32,
    /// Monthly sales chart.
    pub sales: ChartDataset,
    /// Best-selling products chart.
    pub products: ChartDataset,
    /// Top clients chart.
    pub clients: ChartDataset,
    /// Running sales total card.
    pub total: Decimal,
    /// Average preparation time card, in minutes.
    pub avg_minutes: Decimal,
    /// Whether the initial load is in flight.
    pub loading: bool,
    /// Whether all four initial reads have settled.
    pub ready: bool,
    /// How many times the sales chart asked for a redraw.
    pub redraws: u64,
}

impl DashboardScreen {
    /// Create the screen scoped to the current local month.
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self::for_month(ctx, chrono::Local::now().month())
    }

    /// Create the screen scoped to an explicit month (1-12).
    #[must_use]
    pub fn for_month(ctx: &AppContext, month: u32) -> Self {
        Self {
            graphics: ctx.graphics().clone(),
            live: Arc::clone(ctx.live()),
            month,
            sales: ChartDataset::default(),
            products: ChartDataset::default(),
            clients: ChartDataset::default(),
            total: Decimal::ZERO,
            avg_minutes: Decimal::ZERO,
            loading: false,
            ready: false,
            redraws: 0,
        }
    }

    /// Run the four initial reads concurrently and build the view.
    ///
    /// The stats pair (total, then average) is sequential within its own
    /// read. Nothing bounds how long an individual read may take.
    ///
    /// # Errors
    ///
    /// Returns the first failing read's error; the screen stays
    /// not-ready in that case.
    pub async fn init(&mut self) -> Result<(), AppError> {
        self.loading = true;

        let result = tokio::try_join!(
            self.graphics.sales(),
            self.graphics.best_seller(self.month),
            self.graphics.best_client(),
            async {
                let total = self.graphics.total_sales().await?;
                let avg = self.graphics.avg_time().await?;
                Ok::<_, ApiError>((total, avg))
            },
        );

        self.loading = false;

        let (sales, products, clients, (total, avg)) = result.inspect_err(|err| {
            tracing::error!(error = %err, "dashboard load failed");
        })?;

        self.sales = ChartDataset::from_series("Total de Ventas ($)", sales);
        self.products = ChartDataset::from_series("Cantidad de Unidades", products);
        self.clients = ChartDataset::from_series("No. de compras", clients);
        self.total = total.total;
        self.avg_minutes = avg.minutos;
        self.ready = true;

        Ok(())
    }

    /// Subscribe to incremental sales events.
    ///
    /// Feed each received payload to [`DashboardScreen::apply_sales_event`].
    #[must_use]
    pub fn listen(&self) -> Subscription {
        self.live.subscribe(topics::SALES)
    }

    /// Merge one incremental sales event into the view.
    ///
    /// The delta lands in the sales bucket for `mes` when that bucket
    /// exists (counting a chart redraw), and in the running total either
    /// way. Payloads that are not a `{mes, total}` object are skipped.
    pub fn apply_sales_event(&mut self, payload: Value) {
        let event: SalesEvent = match serde_json::from_value(payload) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed sales event");
                return;
            }
        };

        if let Ok(index) = usize::try_from(event.mes - 1)
            && let Some(bucket) = self.sales.data.get_mut(index)
        {
            *bucket += event.total.to_f64().unwrap_or(0.0);
            self.redraws += 1;
        }

        self.total += event.total;
    }

    /// The running total card, rendered with two decimals.
    #[must_use]
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total)
    }
}
