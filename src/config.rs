/// URL por defecto del banco de preguntas.
pub const DEFAULT_ENDPOINT: &str = "https://sentence-construction.onrender.com/quiz";

#[cfg(not(target_arch = "wasm32"))]
const ENDPOINT_VAR: &str = "SENTENCE_QUIZ_ENDPOINT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub seconds_per_question: i64,
    pub coins: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            seconds_per_question: 30,
            coins: 10,
        }
    }
}

impl Config {
    /// Lee el endpoint del entorno (en WASM, del entorno de compilación).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint_override() {
            config.endpoint = endpoint;
        }
        config
    }
}

fn normalize_endpoint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn endpoint_override() -> Option<String> {
    std::env::var(ENDPOINT_VAR)
        .ok()
        .and_then(|v| normalize_endpoint(&v))
}

#[cfg(target_arch = "wasm32")]
fn endpoint_override() -> Option<String> {
    option_env!("SENTENCE_QUIZ_ENDPOINT").and_then(normalize_endpoint)
}
