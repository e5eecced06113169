//! Runtime configuration from the environment.

use std::env;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000";

/// Server configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Origin the CORS layer allows.
    pub allow_origin: String,
}

impl ServerConfig {
    /// Read `ROSTER_LISTEN_ADDR` and `ROSTER_ALLOW_ORIGIN`, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("ROSTER_LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into()),
            allow_origin: env::var("ROSTER_ALLOW_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.into()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.into(),
            allow_origin: DEFAULT_ALLOW_ORIGIN.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.allow_origin, "http://localhost:3000");
    }
}

