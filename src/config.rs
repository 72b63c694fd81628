use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Database opened at startup.
    #[config(env = "COQUERY_DATABASE_URL", default = "sqlite::memory:")]
    pub database_url: String,
    /// Largest edit distance at which an unknown table name is auto-corrected.
    #[config(env = "COQUERY_FUZZY_THRESHOLD", default = 2)]
    pub fuzzy_threshold: usize,
    #[config(env = "COQUERY_API_KEY")]
    pub api_key: Option<String>,
    #[config(env = "COQUERY_MODEL", default = "gemini-2.5-flash")]
    pub model: String,
    /// Base URL of the model API, when not talking to Google directly.
    #[config(env = "COQUERY_ASSISTANT_ENDPOINT")]
    pub assistant_endpoint: Option<String>,
    /// Number of assistant completions kept in memory.
    #[config(env = "COQUERY_ASSISTANT_CACHE", default = 64)]
    pub assistant_cache: u64,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Ok(Config::builder().env().load()?)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
