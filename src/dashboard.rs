// Dashboard snapshot assembly
// Fetches every report's tasks, classifies and aggregates them, and freezes
// the result into an immutable snapshot for rendering. One report's fetch
// failure never blocks the others.

use crate::backend::{BackendClient, BackendError};
use crate::metrics::{aggregate, ReportMetrics};
use crate::reports::ReportKind;
use chrono::{DateTime, Utc};
use tracing::warn;

/// One dashboard card: either the aggregated metrics or the reason the
/// report's data is unavailable.
#[derive(Debug)]
pub enum ReportCard {
    Ready(ReportMetrics),
    Unavailable(BackendError),
}

/// Immutable fetched-then-aggregated view of all four reports. Mutations go
/// through the backend and are reflected by taking a fresh snapshot.
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub cards: Vec<(ReportKind, ReportCard)>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Fetch and aggregate every report. The four fetches are independent;
    /// a failing one is caught, logged, and surfaced as an unavailable card.
    pub async fn load(client: &BackendClient) -> DashboardSnapshot {
        let tasks_api = client.tasks();
        let fetches = ReportKind::ALL.map(|kind| {
            let tasks_api = tasks_api.clone();
            async move { (kind, tasks_api.fetch_report_tasks(kind).await) }
        });
        let results = futures_join4(fetches).await;

        let cards = results
            .into_iter()
            .map(|(kind, result)| match result {
                Ok(tasks) => (kind, ReportCard::Ready(aggregate(&tasks))),
                Err(err) => {
                    warn!(report = kind.slug(), error = %err, "report fetch failed");
                    (kind, ReportCard::Unavailable(err))
                }
            })
            .collect();

        DashboardSnapshot {
            cards,
            generated_at: Utc::now(),
        }
    }

    pub fn card(&self, kind: ReportKind) -> Option<&ReportCard> {
        self.cards
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, card)| card)
    }
}

/// Join the four per-report fetches. tokio::join! wants literal futures, so
/// unpack the fixed-size array.
async fn futures_join4<F, T>(futures: [F; 4]) -> Vec<T>
where
    F: std::future::Future<Output = T>,
{
    let [a, b, c, d] = futures;
    let (a, b, c, d) = tokio::join!(a, b, c, d);
    vec![a, b, c, d]
}
