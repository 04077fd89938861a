//! Read API over the people collection.
//!
//! Documents are stored with historical field-name variants; every response
//! goes through the same canonicalization the dashboard applies on its side.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/pessoas` | No | All people records as `{ "data": [...] }` |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::PeopleService;
