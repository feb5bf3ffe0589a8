use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Report store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Load the two demo reports at startup
    pub seed_reports: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Configuration for the `reporta` terminal client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the reports collection endpoint
    pub api_url: String,
    /// Base URL of the Nominatim instance used for reverse geocoding
    pub nominatim_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        load_dotenv();

        Ok(Config {
            app: AppConfig::from_env()?,
            store: StoreConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Load .env file if exists, ignore if not found (optional for production)
fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("{} must be a boolean, got '{}'", name, other)),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let seed_reports = match env::var("SEED_REPORTS") {
            Ok(raw) => parse_bool("SEED_REPORTS", &raw)?,
            Err(_) => true,
        };

        Ok(Self { seed_reports })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            username: env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty()),
            password: env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty()),
            title: env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Reporta API".to_string()),
            version: env::var("SWAGGER_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "Citizen report feed and submission API".to_string()),
        })
    }

    /// Returns "username:password" when both are configured
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some(format!("{}:{}", u, p)),
            _ => None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_API_URL: &'static str = "http://127.0.0.1:3000/api/reports";
    pub const DEFAULT_NOMINATIM_URL: &'static str = "https://nominatim.openstreetmap.org";

    pub fn from_env() -> Self {
        load_dotenv();

        Self {
            api_url: env::var("REPORTA_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string()),
            nominatim_url: env::var("NOMINATIM_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_NOMINATIM_URL.to_string()),
        }
    }
}
