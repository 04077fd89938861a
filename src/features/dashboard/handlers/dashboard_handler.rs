use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardQueryParams, DashboardViewDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ErrorResponse;

// ============================================================================
// Page
// ============================================================================

/// Server-rendered dashboard
///
/// Without `cidade`/`provedora` the request counts as a page load and the
/// people endpoint is fetched again.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Dashboard",
    params(DashboardQueryParams),
    responses(
        (status = 200, description = "Dashboard HTML page", body = String, content_type = "text/html"),
        (status = 500, description = "Template rendering failed", body = ErrorResponse)
    )
)]
pub async fn dashboard_page(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<DashboardQueryParams>,
) -> Result<Html<String>> {
    let html = service.render_page(&params).await?;
    Ok(Html(html))
}

// ============================================================================
// View
// ============================================================================

/// Filtered dashboard view as JSON
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    params(DashboardQueryParams),
    responses(
        (status = 200, description = "Summary, chart and list for the selection", body = DashboardViewDto),
        (status = 502, description = "People endpoint unreachable", body = ErrorResponse)
    )
)]
pub async fn dashboard_view(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<DashboardQueryParams>,
) -> Result<Json<DashboardViewDto>> {
    let view = service.view(&params).await?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use crate::features::dashboard::clients::PeopleApiClient;
    use crate::features::dashboard::routes::routes;
    use crate::features::dashboard::services::DashboardService;
    use crate::shared::templates::TemplateEngine;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    async fn spawn_upstream(payload: Value, hits: Arc<AtomicUsize>) -> String {
        let router = Router::new().route(
            "/api/pessoas",
            get(move || {
                let payload = payload.clone();
                let hits = Arc::clone(&hits);
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(payload)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/pessoas", addr)
    }

    fn server(endpoint: String) -> TestServer {
        let client = PeopleApiClient::new(endpoint, Duration::from_secs(5)).unwrap();
        let templates = Arc::new(TemplateEngine::new(None).unwrap());
        let service = Arc::new(DashboardService::new(client, templates));
        TestServer::new(routes(service)).unwrap()
    }

    fn people() -> Value {
        json!({
            "data": [
                { "nome": "Ana", "cidade": "Recife", "provedora": "Claro" },
                { "nome": "Bruno", "cidade": "Olinda", "provedora": "Claro" },
                { "nome": "Carla", "cidade": "Recife", "provedora": "Oi" }
            ]
        })
    }

    #[tokio::test]
    async fn test_page_load_fetches_and_filters_reuse_session() {
        let hits = Arc::new(AtomicUsize::new(0));
        let server = server(spawn_upstream(people(), Arc::clone(&hits)).await);

        let response = server.get("/dashboard").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Carregamos 3 registros do banco."));
        assert!(html.contains("3 resultados"));
        assert!(html.contains("2 • 67%"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let response = server
            .get("/dashboard")
            .add_query_param("cidade", "Olinda")
            .add_query_param("provedora", "todos")
            .await;
        response.assert_status_ok();
        assert!(response.text().contains("1 resultado"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let response = server.get("/dashboard").await;
        response.assert_status_ok();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unmatched_city_renders_empty_list() {
        let hits = Arc::new(AtomicUsize::new(0));
        let server = server(spawn_upstream(people(), hits).await);

        let response = server
            .get("/dashboard")
            .add_query_param("cidade", "Caruaru")
            .await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("0 resultados"));
        assert!(html.contains("Nenhum registro encontrado com os filtros selecionados."));
        assert!(html.contains("3 no total"));
    }

    #[tokio::test]
    async fn test_empty_database_is_not_an_error() {
        let hits = Arc::new(AtomicUsize::new(0));
        let server = server(spawn_upstream(json!({ "data": [] }), hits).await);

        let response = server.get("/dashboard").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Nenhum registro foi encontrado no banco de dados."));
        assert!(!html.contains("Não foi possível carregar os dados"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_empty() {
        let hits = Arc::new(AtomicUsize::new(0));
        let server = server(spawn_upstream(json!({ "data": "not-an-array" }), hits).await);

        let response = server.get("/api/dashboard").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["summary"]["total"], 0);
        assert_eq!(body["records"], json!([]));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api/pessoas", listener.local_addr().unwrap());
        drop(listener);
        let server = server(endpoint);

        let response = server.get("/dashboard").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Não foi possível carregar os dados ("));
        assert!(html.contains("Erro ao buscar dados."));

        let response = server.get("/api/dashboard").await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["error"], "Não foi possível carregar os dados");
    }

    #[tokio::test]
    async fn test_json_view() {
        let hits = Arc::new(AtomicUsize::new(0));
        let server = server(spawn_upstream(people(), Arc::clone(&hits)).await);

        let response = server
            .get("/api/dashboard")
            .add_query_param("provedora", "Claro")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["summary"]["visible"], 2);
        assert_eq!(body["summary"]["total"], 3);
        assert_eq!(body["summary"]["top_provider"], "Claro");
        assert_eq!(body["filters"]["provedora"], "Claro");
        assert_eq!(body["chart"]["arcs"][0]["full_circle"], true);
        assert_eq!(body["options"]["provedoras"], json!(["Claro", "Oi"]));

        server.get("/api/dashboard").await.assert_status_ok();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
