use serde::Serialize;

use crate::domain::dashboard::{DashboardSummary, RevenuePoint, Transaction};
use crate::listing::notify::Notification;

/// One bar of the revenue chart, scaled against the busiest month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBar {
    pub month: String,
    pub total: f64,
    /// Bar height in percent of the largest month.
    pub percent: u32,
}

impl RevenueBar {
    pub fn scale(points: Vec<RevenuePoint>) -> Vec<RevenueBar> {
        let max = points.iter().map(|point| point.count).fold(0.0_f64, f64::max);

        points
            .into_iter()
            .map(|point| {
                let percent = if max > 0.0 {
                    (point.count.max(0.0) / max * 100.0).round() as u32
                } else {
                    0
                };
                RevenueBar {
                    month: point.month,
                    total: point.count,
                    percent,
                }
            })
            .collect()
    }
}

/// Data required to render the dashboard.
pub struct DashboardPageData {
    pub summary: DashboardSummary,
    pub revenue: Vec<RevenueBar>,
    pub transactions: Vec<Transaction>,
    pub year: i32,
    pub notifications: Vec<Notification>,
}
