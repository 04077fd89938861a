use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Collection};
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::core::config::DatabaseConfig;

/// Process-wide MongoDB handle.
///
/// The client is created on the first call to [`MongoHandle::init`] (or any
/// accessor) and reused afterwards. Concurrent first callers all await the
/// same initialization; a failed attempt leaves the handle empty so the next
/// request tries again.
pub struct MongoHandle {
    config: DatabaseConfig,
    client: OnceCell<Client>,
}

impl MongoHandle {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Connect if not connected yet and return the shared client.
    pub async fn init(&self) -> Result<&Client, mongodb::error::Error> {
        self.client.get_or_try_init(|| self.connect()).await
    }

    /// The configured people collection, connecting on first use
    pub async fn collection(&self) -> Result<Collection<Document>, mongodb::error::Error> {
        let client = self.init().await?;
        Ok(client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection))
    }

    /// Close the client if it was ever created.
    pub async fn shutdown(&self) {
        if let Some(client) = self.client.get() {
            tracing::info!("MongoDB: closing connection");
            client.clone().shutdown().await;
        }
    }

    async fn connect(&self) -> Result<Client, mongodb::error::Error> {
        tracing::info!(
            "MongoDB: creating client for {}.{}",
            self.config.database,
            self.config.collection
        );

        let mut options = ClientOptions::parse(self.config.uri.as_str()).await?;
        options.retry_writes = Some(false);
        options.connect_timeout = Some(Duration::from_secs(self.config.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(self.config.connect_timeout_secs));
        if let Some(app_name) = &self.config.app_name {
            options.app_name = Some(app_name.clone());
        }
        if self.config.tls_allow_invalid_certificates {
            tracing::warn!("MongoDB: TLS certificate validation is disabled");
            options.tls = Some(Tls::Enabled(
                TlsOptions::builder().allow_invalid_certificates(true).build(),
            ));
        }

        let client = Client::with_options(options)?;

        // The driver connects lazily; ping so failures surface here
        client
            .database(&self.config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                tracing::error!("MongoDB: failed to connect: {}", e);
                e
            })?;

        tracing::info!("MongoDB: connection established");
        Ok(client)
    }
}
