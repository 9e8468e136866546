use std::str::FromStr;

/// Which document store backend to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Firestore via a service-account credential (see `atal_db::firestore`).
    Firestore,
    /// In-process store; contents are lost on exit.
    Memory,
    /// No store: only the default component catalog is served.
    Disabled,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(Self::Firestore),
            "memory" => Ok(Self::Memory),
            "none" | "disabled" => Ok(Self::Disabled),
            other => Err(format!(
                "unknown store backend '{other}' (expected firestore, memory or none)"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A `*` entry allows any origin (without credentials).
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on closing the document store after shutdown (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// Simulated inference latency for idea generation (default: `500`).
    pub idea_generation_delay_ms: u64,
    /// Document store backend (default: `firestore`).
    pub store_backend: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `HOST`                     | `0.0.0.0`   |
    /// | `PORT`                     | `8001`      |
    /// | `CORS_ORIGINS`             | `*`         |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`        |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `10`        |
    /// | `IDEA_GENERATION_DELAY_MS` | `500`       |
    /// | `STORE_BACKEND`            | `firestore` |
    ///
    /// # Panics
    ///
    /// Panics on malformed values so misconfiguration fails fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let idea_generation_delay_ms: u64 = std::env::var("IDEA_GENERATION_DELAY_MS")
            .unwrap_or_else(|_| "500".into())
            .parse()
            .expect("IDEA_GENERATION_DELAY_MS must be a valid u64");

        let store_backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "firestore".into())
            .parse()
            .unwrap_or_else(|e| panic!("STORE_BACKEND: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            idea_generation_delay_ms,
            store_backend,
        }
    }
}
