//! Static configuration and environment overrides.

/// IEEE MA-L registry download location.
pub const OUI_CSV_URL: &str = "https://standards.ieee.org/develop/regauth/oui/oui.csv";

/// Environment variable overriding [`OUI_CSV_URL`] (e.g. a local mirror).
pub const ENV_OUI_CSV_URL: &str = "GENERATE_OUI_URL";

/// Environment variable naming the log4rs config file.
pub const ENV_LOG_CONFIG: &str = "GENERATE_OUI_LOG_CONFIG";

/// Default log4rs config file, looked up in the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Registry type of the 24-bit blocks we care about.
pub const REGISTRY_MA_L: &str = "MA-L";

/// Top-level key of the output document.
pub const OUTPUT_KEY: &str = "oui_24";

/// Prepended to every assignment to form the output key.
pub const PREFIX_MARKER: &str = "0x";

/// standards.ieee.org answers 418 to clients without a user agent.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Registry URL, honouring [`ENV_OUI_CSV_URL`] when set and non-empty.
pub fn oui_csv_url() -> String {
    match std::env::var(ENV_OUI_CSV_URL) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => OUI_CSV_URL.to_string(),
    }
}
