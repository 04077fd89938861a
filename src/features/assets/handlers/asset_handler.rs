use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::assets::services::AssetService;

/// Browsers ask for it on every page; answer without touching the disk
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Any path no other route claimed
pub async fn serve_asset(State(service): State<Arc<AssetService>>, uri: Uri) -> Result<Response> {
    let asset = service.load(uri.path()).await?;
    Ok(([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response())
}

#[cfg(test)]
mod tests {
    use crate::features::assets::routes::routes;
    use crate::features::assets::services::AssetService;
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use std::sync::Arc;

    fn server(dir: &std::path::Path) -> TestServer {
        TestServer::new(routes(Arc::new(AssetService::new(dir)))).unwrap()
    }

    fn public_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Painel</h1>").unwrap();
        std::fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
        std::fs::write(dir.path().join("data.bin"), [0u8, 1, 2]).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = public_dir();
        let server = server(dir.path());

        let response = server.get("/").await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "text/html; charset=UTF-8"
        );
        assert_eq!(response.text(), "<h1>Painel</h1>");
    }

    #[tokio::test]
    async fn test_mime_by_extension() {
        let dir = public_dir();
        let server = server(dir.path());

        let response = server.get("/styles.css").await;
        response.assert_status_ok();
        assert_eq!(response.header(header::CONTENT_TYPE), "text/css; charset=UTF-8");

        let response = server.get("/data.bin").await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_favicon_is_no_content() {
        let dir = public_dir();
        let server = server(dir.path());

        let response = server.get("/favicon.ico").await;
        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_missing_file_is_plain_text_404() {
        let dir = public_dir();
        let server = server(dir.path());

        let response = server.get("/missing.js").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "text/plain; charset=UTF-8"
        );
        assert_eq!(response.text(), "Arquivo não encontrado");
    }

    #[tokio::test]
    async fn test_traversal_is_not_found() {
        let dir = public_dir();
        let server = server(dir.path());

        let response = server.get("/%2e%2e/secret.txt").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
