//! Dashboard aggregation.

use chrono::{Datelike, Utc};
use log::error;

use crate::api::DashboardReader;
use crate::domain::dashboard::DashboardSummary;
use crate::domain::session::AdminSession;
use crate::dto::dashboard::{DashboardPageData, RevenueBar};
use crate::listing::notify::Notification;

/// Number of transactions shown in the "recent" panel.
pub const RECENT_TRANSACTIONS: usize = 5;

/// Loads the dashboard for the current calendar year.
pub async fn load_dashboard<D>(api: &D, session: &AdminSession) -> DashboardPageData
where
    D: DashboardReader + ?Sized,
{
    load_dashboard_for_year(api, session, Utc::now().year()).await
}

/// Each panel degrades on its own: the summary falls back to zeroes, the
/// revenue chart and the transactions panel to empty lists.
pub async fn load_dashboard_for_year<D>(api: &D, session: &AdminSession, year: i32) -> DashboardPageData
where
    D: DashboardReader + ?Sized,
{
    let mut notifications = Vec::new();

    let summary = match api.summary(session).await {
        Ok(summary) => summary,
        Err(err) => {
            error!("Failed to load dashboard summary: {err}");
            notifications.push(Notification::error("Failed to load dashboard data."));
            DashboardSummary::default()
        }
    };

    let revenue = match api.revenue(session, year).await {
        Ok(points) => RevenueBar::scale(points),
        Err(err) => {
            error!("Failed to load revenue for {year}: {err}");
            notifications.push(Notification::error("Failed to load revenue data."));
            Vec::new()
        }
    };

    let transactions = match api.recent_transactions(session).await {
        Ok(mut transactions) => {
            transactions.truncate(RECENT_TRANSACTIONS);
            transactions
        }
        Err(err) => {
            error!("Failed to load recent transactions: {err}");
            notifications.push(Notification::error("Failed to load recent transactions."));
            Vec::new()
        }
    };

    DashboardPageData {
        summary,
        revenue,
        transactions,
        year,
        notifications,
    }
}
