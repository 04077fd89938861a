//! Template engine for server-rendered pages using Jinja2 syntax.
//!
//! Templates ship embedded in the binary. When the configured template
//! directory exists, files found there override the embedded copies with the
//! same name, which keeps local styling tweaks possible without a rebuild.

use minijinja::Environment;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Templates compiled into the binary, keyed by their name relative to the
/// template directory.
const EMBEDDED_TEMPLATES: [(&str, &str); 2] = [
    (
        "dashboard/page.html.jinja",
        include_str!("../../../templates/dashboard/page.html.jinja"),
    ),
    (
        "dashboard/donut.html.jinja",
        include_str!("../../../templates/dashboard/donut.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Owns the template environment. Built once at startup and shared by handlers.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Build the environment from the embedded templates, then apply
    /// overrides from `template_dir` if it exists.
    pub fn new(template_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for (name, source) in EMBEDDED_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| TemplateError::RenderError(e.to_string()))?;
        }

        if let Some(dir) = template_dir.filter(|dir| dir.exists()) {
            load_templates_recursive(&mut env, dir, dir);
        }

        Ok(Self { env })
    }

    /// Render a template with any serializable context.
    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }

    /// List all available templates
    pub fn list_templates(&self) -> Vec<String> {
        self.env
            .templates()
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    if let Ok(entries) = std::fs::read_dir(current_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_templates_recursive(env, base_path, &path);
            } else if path.extension().is_some_and(|ext| ext == "jinja") {
                if let Ok(relative) = path.strip_prefix(base_path) {
                    let template_name = relative.to_string_lossy().replace('\\', "/");
                    if let Ok(content) = std::fs::read_to_string(&path) {
                        // Templates live for the whole process
                        let static_name: &'static str =
                            Box::leak(template_name.clone().into_boxed_str());
                        let static_content: &'static str = Box::leak(content.into_boxed_str());
                        if let Err(e) = env.add_template(static_name, static_content) {
                            tracing::warn!("Failed to load template {}: {}", template_name, e);
                        } else {
                            tracing::debug!("Loaded template override: {}", template_name);
                        }
                    }
                }
            }
        }
    }
}
