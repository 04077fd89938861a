//! Static files from the public directory.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/favicon.ico` | Always `204 No Content` |
//! | * | `/{path}` | File below `PUBLIC_DIR`, `/` serves `index.html` |

pub mod handlers;
pub mod mime;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::AssetService;
