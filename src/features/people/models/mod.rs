pub mod person;

pub use person::{PersonRecord, RawDocument};
