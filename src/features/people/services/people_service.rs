use std::sync::Arc;

use crate::core::error::Result;
use crate::features::people::models::PersonRecord;
use crate::features::people::services::PeopleStore;

/// Service behind `GET /api/pessoas`
pub struct PeopleService {
    store: Arc<dyn PeopleStore>,
}

impl PeopleService {
    pub fn new(store: Arc<dyn PeopleStore>) -> Self {
        Self { store }
    }

    /// Full collection scan, canonicalized
    pub async fn list_people(&self) -> Result<Vec<PersonRecord>> {
        let documents = self.store.fetch_documents().await?;
        Ok(documents.into_iter().map(PersonRecord::from_raw).collect())
    }
}
