mod people_service;
mod people_store;

pub use people_service::PeopleService;
pub use people_store::{MongoPeopleStore, PeopleStore};
