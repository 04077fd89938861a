pub mod people_handler;

pub use people_handler::*;
