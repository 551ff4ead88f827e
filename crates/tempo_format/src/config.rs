/// Filter used when neither `TEMPO_FORMAT_LOG_LEVEL` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads values through `get` so tests need not touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_filter = get("TEMPO_FORMAT_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        Self { log_filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_dedicated_variable() {
        let get = |k: &str| match k {
            "TEMPO_FORMAT_LOG_LEVEL" => Some("debug".into()),
            "RUST_LOG" => Some("trace".into()),
            _ => None,
        };
        assert_eq!(Config::from_env_with(get).log_filter, "debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let get = |k: &str| match k {
            "RUST_LOG" => Some("info".into()),
            _ => None,
        };
        assert_eq!(Config::from_env_with(get).log_filter, "info");
    }

    #[test]
    fn defaults_when_unset_or_blank() {
        assert_eq!(Config::from_env_with(|_| None).log_filter, DEFAULT_LOG_FILTER);
        let blank = |k: &str| (k == "TEMPO_FORMAT_LOG_LEVEL").then(|| "  ".to_string());
        assert_eq!(Config::from_env_with(blank).log_filter, DEFAULT_LOG_FILTER);
    }
}
