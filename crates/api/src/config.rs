use jaxbrew_core::simulation::TelemetryMode;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running on the brewery LAN.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Simulated or live temperatures (default: simulated).
    pub telemetry_mode: TelemetryMode,
    /// Tolerance band every vessel starts with (default: `0.0`).
    pub default_tolerance_c: f64,
    /// Upper bound on one alert channel send, in seconds (default: `10`).
    pub notify_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `TELEMETRY_MODE`       | `simulated`                |
    /// | `DEFAULT_TOLERANCE_C`  | `0.0`                      |
    /// | `NOTIFY_TIMEOUT_SECS`  | `10`                       |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let telemetry_mode: TelemetryMode = std::env::var("TELEMETRY_MODE")
            .unwrap_or_else(|_| "simulated".into())
            .parse()
            .unwrap_or_else(|e| panic!("TELEMETRY_MODE is invalid: {e}"));

        let default_tolerance_c: f64 = std::env::var("DEFAULT_TOLERANCE_C")
            .unwrap_or_else(|_| "0.0".into())
            .parse()
            .expect("DEFAULT_TOLERANCE_C must be a number");

        let notify_timeout_secs: u64 = std::env::var("NOTIFY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("NOTIFY_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            telemetry_mode,
            default_tolerance_c,
            notify_timeout_secs,
        }
    }
}
