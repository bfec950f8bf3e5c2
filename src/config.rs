pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL").unwrap_or("/api/v1").to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| Config::new().api_base_url),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
