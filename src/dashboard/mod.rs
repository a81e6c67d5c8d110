//! Admin and merchant dashboard data
//!
//! Dashboards show aggregate counts fetched once per load and a set of alert banners
//! derived from those counts. Loading goes through [`loader`], banner selection through
//! [`alerts`].

pub mod alerts;
pub mod loader;

pub use alerts::{AlertThresholds, DashboardAlert, merchant_alerts};
pub use loader::{load_admin_stats, load_merchant_stats};
