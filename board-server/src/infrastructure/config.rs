use board_core::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub default_page_size: usize,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port = var("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let api_base_url = var("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let default_page_size = match var("DEFAULT_PAGE_SIZE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid DEFAULT_PAGE_SIZE: {}", e))?,
            None => DEFAULT_PAGE_SIZE,
        };
        if default_page_size == 0 {
            anyhow::bail!("DEFAULT_PAGE_SIZE must be positive");
        }
        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            api_base_url,
            default_page_size,
            cors_origins,
        })
    }
}
