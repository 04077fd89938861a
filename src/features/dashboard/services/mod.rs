mod dashboard_service;
mod dashboard_session;

pub use dashboard_service::DashboardService;
pub use dashboard_session::{failed_page, DashboardSession};
