//! People dashboard: filter by city and provider, summary cards, provider
//! donut chart and the person list.
//!
//! Records come from the people endpoint over HTTP, are canonicalized with
//! the same routine the endpoint uses, and are kept as a session until the
//! next page load.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/dashboard?cidade=&provedora=` | Server-rendered dashboard page |
//! | GET | `/api/dashboard?cidade=&provedora=` | Same view as JSON |

pub mod analytics;
pub mod chart;
pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use clients::PeopleApiClient;
pub use routes::routes;
pub use services::DashboardService;
