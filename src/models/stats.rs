use serde::{Deserialize, Serialize};

/// Platform-wide aggregates shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_stores: u64,
    pub total_products: u64,
    pub total_orders: u64,
    pub monthly_revenue: f64,
    pub active_users: u64,
}

/// Per-store aggregates shown on the merchant dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantStats {
    pub total_products: u64,
    pub total_orders: u64,
    pub monthly_revenue: f64,
    pub total_views: u64,
    pub pending_orders: u64,
    pub low_stock_products: u64,
}
