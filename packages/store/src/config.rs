//! # Portal configuration: `euprava.toml`
//!
//! The portal talks to five independently deployed HTTP JSON services. Each
//! one is addressed by its own base URL; [`PortalConfig`] carries them plus
//! the HTTP settings shared by every request.
//!
//! ## Structure
//!
//! ```toml
//! [services]
//! sso = "http://localhost:8000/api/v1"
//! mup = "http://localhost:8001/api/v1"
//! police = "http://localhost:8002/api/v1"
//! court = "http://localhost:8003/api/v1"
//! statistics = "http://localhost:8004/api/v1"
//!
//! [http]
//! timeout_secs = 30   # ignored in the browser, fetch has no client timeout
//! ```
//!
//! ## Sources
//!
//! | Constructor | Source |
//! |-------------|--------|
//! | [`PortalConfig::default`] | Local development ports above. |
//! | [`PortalConfig::from_build_env`] | `EUPRAVA_API_BASE_URL_*` variables captured at **compile time**. A wasm bundle has no process environment, so the deployment bakes its URLs in at build, per service, falling back to the defaults. |
//! | [`PortalConfig::from_toml`] | A TOML document; missing sections and keys take their defaults. |
//! | [`PortalConfig::load_or_build_env`] | `euprava.toml` in a directory (native builds), else the build variables. |

use serde::{Deserialize, Serialize};

/// The backend services the portal integrates with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Sso,
    Mup,
    Police,
    Court,
    Statistics,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Sso,
        Service::Mup,
        Service::Police,
        Service::Court,
        Service::Statistics,
    ];

    /// Human-readable name used in notifications and logs.
    pub fn display_name(self) -> &'static str {
        match self {
            Service::Sso => "SSO",
            Service::Mup => "MUP",
            Service::Police => "traffic police",
            Service::Court => "court",
            Service::Statistics => "Institute for Statistics",
        }
    }
}

/// Top-level configuration stored in `euprava.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Base URL of every backend service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_sso")]
    pub sso: String,
    #[serde(default = "default_mup")]
    pub mup: String,
    #[serde(default = "default_police")]
    pub police: String,
    #[serde(default = "default_court")]
    pub court: String,
    #[serde(default = "default_statistics")]
    pub statistics: String,
}

fn default_sso() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_mup() -> String {
    "http://localhost:8001/api/v1".to_string()
}

fn default_police() -> String {
    "http://localhost:8002/api/v1".to_string()
}

fn default_court() -> String {
    "http://localhost:8003/api/v1".to_string()
}

fn default_statistics() -> String {
    "http://localhost:8004/api/v1".to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            sso: default_sso(),
            mup: default_mup(),
            police: default_police(),
            court: default_court(),
            statistics: default_statistics(),
        }
    }
}

/// HTTP settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (native builds only).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PortalConfig {
    /// Configuration with every service reached under one base URL,
    /// e.g. behind a single reverse proxy or a mock server.
    pub fn single_origin(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            services: ServicesConfig {
                sso: base.clone(),
                mup: base.clone(),
                police: base.clone(),
                court: base.clone(),
                statistics: base,
            },
            http: HttpConfig::default(),
        }
    }

    /// Builder method to override one service's base URL.
    pub fn with_service(mut self, service: Service, base_url: &str) -> Self {
        let url = base_url.trim_end_matches('/').to_string();
        match service {
            Service::Sso => self.services.sso = url,
            Service::Mup => self.services.mup = url,
            Service::Police => self.services.police = url,
            Service::Court => self.services.court = url,
            Service::Statistics => self.services.statistics = url,
        }
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.http.timeout_secs = secs;
        self
    }

    /// Configuration baked in at compile time from `EUPRAVA_API_BASE_URL_*`.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        let overrides = [
            (Service::Sso, option_env!("EUPRAVA_API_BASE_URL_SSO")),
            (Service::Mup, option_env!("EUPRAVA_API_BASE_URL_MUP")),
            (Service::Police, option_env!("EUPRAVA_API_BASE_URL_POLICE")),
            (Service::Court, option_env!("EUPRAVA_API_BASE_URL_COURT")),
            (Service::Statistics, option_env!("EUPRAVA_API_BASE_URL_STATISTICS")),
        ];
        for (service, url) in overrides {
            if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
                config = config.with_service(service, url);
            }
        }
        config
    }

    /// Base URL for a service, without a trailing slash.
    pub fn base_url(&self, service: Service) -> &str {
        let url = match service {
            Service::Sso => &self.services.sso,
            Service::Mup => &self.services.mup,
            Service::Police => &self.services.police,
            Service::Court => &self.services.court,
            Service::Statistics => &self.services.statistics,
        };
        url.trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "euprava.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read `euprava.toml` from `dir`. A missing file falls back to
    /// [`PortalConfig::from_build_env`], as does one that fails to parse.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_build_env(dir: &std::path::Path) -> Self {
        let path = dir.join(Self::filename());
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), "No config file ({}), using build settings", e);
                return Self::from_build_env();
            }
        };
        match Self::from_toml(&text) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded portal config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring invalid config: {}", e);
                Self::from_build_env()
            }
        }
    }
}
