use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub foods_path: String,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let foods_path = std::env::var("FOODS_PATH").unwrap_or_else(|_| "data/foods.json".into());
        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into()),
            endpoint: std::env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into()),
        };
        Ok(Self {
            database_url,
            foods_path,
            gemini,
        })
    }
}
