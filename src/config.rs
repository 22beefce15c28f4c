use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub image_search_url: String,
    pub image_search_key: String,
    pub image_search_cx: String,
    pub session_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a number"),
            image_search_url: env::var("IMAGE_SEARCH_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/customsearch/v1".to_string()),
            image_search_key: env::var("IMAGE_SEARCH_KEY").unwrap_or_default(),
            image_search_cx: env::var("IMAGE_SEARCH_CX").unwrap_or_default(),
            session_file: env::var("SESSION_FILE")
                .unwrap_or_else(|_| ".eventhub-session.json".to_string())
                .into(),
        }
    }
}
