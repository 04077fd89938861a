pub mod people_api_client;

pub use people_api_client::{FetchError, PeopleApiClient};
