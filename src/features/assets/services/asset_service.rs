use std::path::{Component, Path, PathBuf};

use crate::core::error::{AppError, Result};
use crate::features::assets::mime::mime_for;

const NOT_FOUND_MESSAGE: &str = "Arquivo não encontrado";
const INDEX_FILE: &str = "index.html";

/// A file read from the public directory
#[derive(Debug)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Serves files below a single public directory
pub struct AssetService {
    root: PathBuf,
}

impl AssetService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path to a file under the root.
    ///
    /// `/` is the index document. Paths with `..`, root or prefix components
    /// never resolve.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = request_path.trim_start_matches('/');
        let relative = if relative.is_empty() { INDEX_FILE } else { relative };

        let mut resolved = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return None;
                }
            }
        }
        Some(resolved)
    }

    pub async fn load(&self, request_path: &str) -> Result<Asset> {
        let path = self.resolve(request_path).ok_or_else(|| {
            tracing::debug!("Rejected asset path: {}", request_path);
            AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
        })?;

        let is_file = tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            tracing::debug!("Asset not found: {}", path.display());
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        let body = tokio::fs::read(&path).await?;
        Ok(Asset {
            content_type: mime_for(&path),
            body,
        })
    }
}
