pub mod constants;
pub mod templates;
pub mod text;
pub mod types;
