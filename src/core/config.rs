use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub dashboard: DashboardConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Directory served for every path that is not an API route
    pub public_dir: PathBuf,
}

/// MongoDB connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Accept self-signed / mismatched certificates (managed clusters behind
    /// corporate proxies)
    pub tls_allow_invalid_certificates: bool,
    pub connect_timeout_secs: u64,
    pub app_name: Option<String>,
}

/// Settings for the server-rendered dashboard and its data fetcher
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Endpoint the dashboard loads people records from
    pub api_endpoint: String,
    pub fetch_timeout_secs: u64,
    pub template_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        let app = AppConfig::from_env()?;
        let dashboard = DashboardConfig::from_env(&app)?;

        Ok(Config {
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            app,
            dashboard,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let public_dir = PathBuf::from(env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()));

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            public_dir,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_URI: &'static str = "mongodb://127.0.0.1:27017/dacdb";
    const DEFAULT_DATABASE: &'static str = "dacdb";
    const DEFAULT_COLLECTION: &'static str = "usuarios";
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let uri = env::var("MONGODB_URI")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_URI.to_string());

        let database = env::var("MONGODB_DB").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string());

        let collection =
            env::var("MONGODB_COLLECTION").unwrap_or_else(|_| Self::DEFAULT_COLLECTION.to_string());

        let tls_allow_invalid_certificates = match env::var("MONGODB_TLS_ALLOW_INVALID_CERTIFICATES") {
            Ok(value) => parse_bool(&value).ok_or_else(|| {
                "MONGODB_TLS_ALLOW_INVALID_CERTIFICATES must be true or false".to_string()
            })?,
            Err(_) => false,
        };

        let connect_timeout_secs = env::var("MONGODB_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_CONNECT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "MONGODB_CONNECT_TIMEOUT_SECS must be a valid number".to_string())?;

        let app_name = env::var("MONGODB_APP_NAME").ok().filter(|s| !s.is_empty());

        Ok(Self {
            uri,
            database,
            collection,
            tls_allow_invalid_certificates,
            connect_timeout_secs,
            app_name,
        })
    }
}

impl DashboardConfig {
    const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

    pub fn from_env(app: &AppConfig) -> Result<Self, String> {
        // Defaults to this server's own people endpoint
        let api_endpoint = env::var("DASHBOARD_API")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("http://{}/api/pessoas", app.server_address()));

        let fetch_timeout_secs = env::var("DASHBOARD_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_FETCH_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DASHBOARD_FETCH_TIMEOUT_SECS must be a valid number".to_string())?;

        let template_dir =
            PathBuf::from(env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string()));

        Ok(Self {
            api_endpoint,
            fetch_timeout_secs,
            template_dir,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Pessoas Dashboard API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Read API over the people collection and provider dashboard".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

/// Accepts the usual spellings of a boolean flag
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
