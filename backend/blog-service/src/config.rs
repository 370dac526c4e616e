/// Configuration management for Blog Service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("BLOG_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BLOG_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/blog".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
        })
    }
}
