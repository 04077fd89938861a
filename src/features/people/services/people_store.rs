use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use serde_json::Value;
use std::sync::Arc;

use crate::core::database::MongoHandle;
use crate::core::error::Result;
use crate::features::people::models::RawDocument;

/// Read access to the people collection
#[async_trait]
pub trait PeopleStore: Send + Sync {
    /// Every document in the collection, re-keyed into JSON
    async fn fetch_documents(&self) -> Result<Vec<RawDocument>>;
}

/// `PeopleStore` backed by the shared MongoDB handle
pub struct MongoPeopleStore {
    handle: Arc<MongoHandle>,
}

impl MongoPeopleStore {
    pub fn new(handle: Arc<MongoHandle>) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl PeopleStore for MongoPeopleStore {
    async fn fetch_documents(&self) -> Result<Vec<RawDocument>> {
        let collection = self.handle.collection().await?;

        let documents: Vec<Document> = collection
            .find(doc! {})
            .await
            .map_err(|e| {
                tracing::error!("Failed to query people collection: {:?}", e);
                e
            })?
            .try_collect()
            .await?;

        tracing::debug!("Fetched {} people documents", documents.len());

        Ok(documents.into_iter().map(serialize_document).collect())
    }
}

/// Convert a BSON document into a JSON object: ObjectIds become hex strings,
/// dates become ISO-8601 strings, everything else uses relaxed extended JSON.
pub fn serialize_document(document: Document) -> RawDocument {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        other => other.into_relaxed_extjson(),
    }
}
