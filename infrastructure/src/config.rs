use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TYPING_MIN_MS: u64 = 1500;
const DEFAULT_TYPING_MAX_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Canned,
    Remote,
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canned" => Ok(Variant::Canned),
            "remote" | "gemini" => Ok(Variant::Remote),
            other => Err(anyhow::anyhow!("unknown chat variant: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub variant: Variant,
    pub typing_delay_min: Duration,
    pub typing_delay_max: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            variant: Variant::Canned,
            typing_delay_min: Duration::from_millis(DEFAULT_TYPING_MIN_MS),
            typing_delay_max: Duration::from_millis(DEFAULT_TYPING_MAX_MS),
        }
    }
}

impl Config {
    /// `.env` (if present) then the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let variant = match lookup("CHAT_VARIANT") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring CHAT_VARIANT");
                defaults.variant
            }),
            None => defaults.variant,
        };

        let min_ms = parse_ms(lookup("CHAT_TYPING_MIN_MS"), DEFAULT_TYPING_MIN_MS);
        let max_ms = parse_ms(lookup("CHAT_TYPING_MAX_MS"), DEFAULT_TYPING_MAX_MS);
        let (min_ms, max_ms) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };

        Self {
            gemini_api_key: lookup("GEMINI_API_KEY")
                .map(|k| k.trim().to_string())
                .unwrap_or_default(),
            gemini_model: non_empty(lookup("GEMINI_MODEL")).unwrap_or(defaults.gemini_model),
            gemini_base_url: non_empty(lookup("GEMINI_BASE_URL"))
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            variant,
            typing_delay_min: Duration::from_millis(min_ms),
            typing_delay_max: Duration::from_millis(max_ms),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }

    pub fn without_typing_delay(mut self) -> Self {
        self.typing_delay_min = Duration::ZERO;
        self.typing_delay_max = Duration::ZERO;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_ms(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
