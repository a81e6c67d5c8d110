use serde::{Deserialize, Serialize};

use crate::models::MerchantStats;

/// Counts above which a merchant alert banner is raised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertThresholds {
    pub pending_orders: u64,
    pub low_stock: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardAlert {
    /// Orders waiting for the merchant to review them
    PendingOrders { count: u64 },
    /// Products that need restocking
    LowStock { count: u64 },
}

impl DashboardAlert {
    pub fn message(&self) -> String {
        match self {
            DashboardAlert::PendingOrders { count } => format!("{} orders awaiting review", count),
            DashboardAlert::LowStock { count } => format!("{} products need restocking", count),
        }
    }
}

/// Alert banners for the merchant dashboard, pending orders first
///
/// An empty result means the alerts section is hidden entirely.
pub fn merchant_alerts(stats: &MerchantStats, thresholds: &AlertThresholds) -> Vec<DashboardAlert> {
    let mut alerts = Vec::new();

    if stats.pending_orders > thresholds.pending_orders {
        alerts.push(DashboardAlert::PendingOrders { count: stats.pending_orders });
    }
    if stats.low_stock_products > thresholds.low_stock {
        alerts.push(DashboardAlert::LowStock { count: stats.low_stock_products });
    }

    alerts
}
