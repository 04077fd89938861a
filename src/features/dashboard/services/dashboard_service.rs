use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::core::error::{AppError, Result};
use crate::features::dashboard::clients::{FetchError, PeopleApiClient};
use crate::features::dashboard::dtos::{DashboardPage, DashboardQueryParams, DashboardViewDto};
use crate::features::dashboard::services::{failed_page, DashboardSession};
use crate::shared::templates::TemplateEngine;

const PAGE_TEMPLATE: &str = "dashboard/page.html.jinja";

/// Loads people through the API client and answers dashboard views.
///
/// The last successful load is kept as the current session so filter
/// interactions never re-hit the network. The session lock is only held to
/// read or swap the `Arc`; fetches run under a separate load guard so at most
/// one is in flight.
pub struct DashboardService {
    client: PeopleApiClient,
    session: RwLock<Option<Arc<DashboardSession>>>,
    load_guard: Mutex<()>,
    templates: Arc<TemplateEngine>,
}

impl DashboardService {
    pub fn new(client: PeopleApiClient, templates: Arc<TemplateEngine>) -> Self {
        Self {
            client,
            session: RwLock::new(None),
            load_guard: Mutex::new(()),
            templates,
        }
    }

    /// Fetch again and replace the current session.
    ///
    /// A failed fetch leaves the previous session in place for other clients.
    pub async fn reload(&self) -> std::result::Result<Arc<DashboardSession>, FetchError> {
        let _loading = self.load_guard.lock().await;
        self.fetch().await
    }

    /// Current session, loading one if there is none yet
    pub async fn session(&self) -> std::result::Result<Arc<DashboardSession>, FetchError> {
        if let Some(session) = self.cached().await {
            tracing::debug!("Using cached dashboard session");
            return Ok(session);
        }

        let _loading = self.load_guard.lock().await;
        // Another request may have finished a load while we waited
        if let Some(session) = self.cached().await {
            return Ok(session);
        }
        self.fetch().await
    }

    /// Page context. A request without filter parameters is a page load and
    /// reloads; anything else reuses the current session.
    pub async fn page(&self, params: &DashboardQueryParams) -> DashboardPage {
        let loaded = if params.is_page_load() {
            self.reload().await
        } else {
            self.session().await
        };

        match loaded {
            Ok(session) => session.page(&params.to_filter()),
            Err(e) => failed_page(&e.to_string()),
        }
    }

    pub async fn render_page(&self, params: &DashboardQueryParams) -> Result<String> {
        let page = self.page(params).await;
        Ok(self.templates.render(PAGE_TEMPLATE, &page)?)
    }

    /// JSON view over the current session
    pub async fn view(&self, params: &DashboardQueryParams) -> Result<DashboardViewDto> {
        let session = self
            .session()
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
        Ok(session.view(&params.to_filter()))
    }

    async fn cached(&self) -> Option<Arc<DashboardSession>> {
        self.session.read().await.as_ref().map(Arc::clone)
    }

    /// Caller holds the load guard
    async fn fetch(&self) -> std::result::Result<Arc<DashboardSession>, FetchError> {
        match self.client.load().await {
            Ok(records) => {
                tracing::info!(
                    "Dashboard loaded {} records from {}",
                    records.len(),
                    self.client.endpoint()
                );
                let session = Arc::new(DashboardSession::new(records));
                *self.session.write().await = Some(Arc::clone(&session));
                Ok(session)
            }
            Err(e) => {
                tracing::warn!("Dashboard load from {} failed: {}", self.client.endpoint(), e);
                Err(e)
            }
        }
    }
}
