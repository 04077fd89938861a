//! Pure pipeline over normalized records: provider order, filtering,
//! counting and the summary figures.

pub mod aggregate;
pub mod filter;
pub mod provider_order;
pub mod summary;

pub use aggregate::ProviderCounts;
pub use filter::{filter_records, DashboardFilter, Selection};
pub use provider_order::ProviderOrder;
pub use summary::{DashboardSummary, HighlightCard};
