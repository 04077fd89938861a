use std::path::Path;

pub const DEFAULT_MIME: &str = "application/octet-stream";

const MIME_TYPES: [(&str, &str); 8] = [
    ("html", "text/html; charset=UTF-8"),
    ("css", "text/css; charset=UTF-8"),
    ("js", "application/javascript; charset=UTF-8"),
    ("json", "application/json; charset=UTF-8"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("ico", "image/x-icon"),
];

/// Content type from the file extension. Matching is case-sensitive.
pub fn mime_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(DEFAULT_MIME)
}
