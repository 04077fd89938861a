//! Page templates rendered with minijinja.
//!
//! Templates are stored in `templates/` and use Jinja2 syntax. Names ending in
//! `.html.jinja` are HTML auto-escaped.

pub mod engine;

pub use engine::{TemplateEngine, TemplateError};
