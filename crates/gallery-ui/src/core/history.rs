//! History mode and base-path configuration for the router.
//!
//! # Design
//! - The base path comes from the deployment environment (`GALLERY_BASE_URL`) at build time.
//! - Normalise once at startup so matching never has to reason about slashes.

use std::fmt::{self, Display, Formatter};

use crate::core::error::ConfigError;

/// Build-time environment variable carrying the deployment sub-path.
pub const BASE_URL_ENV: &str = "GALLERY_BASE_URL";

/// Normalised deployment prefix applied to every route.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Root base path (`/`).
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Normalise a raw base path.
    ///
    /// Empty values map to the root; a leading slash is added and trailing slashes removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] for values carrying a scheme, query,
    /// fragment or whitespace.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidBasePath {
            value: raw.to_string(),
            reason,
        };
        let value = raw.trim();
        if value.contains("://") {
            return Err(invalid("scheme_not_allowed"));
        }
        if value.contains(['?', '#']) {
            return Err(invalid("query_or_fragment"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(invalid("whitespace"));
        }
        let trimmed = value.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        if trimmed.split('/').any(str::is_empty) {
            return Err(invalid("empty_segment"));
        }
        Ok(Self(format!("/{trimmed}")))
    }

    /// True when no prefix is applied.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Normalised text, always starting with `/`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strip the prefix from a browser location. Locations outside the prefix yield `None`.
    #[must_use]
    pub fn strip<'a>(&self, location: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(location);
        }
        let rest = location.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            return Some("/");
        }
        rest.starts_with(['/', '?', '#']).then_some(rest)
    }

    /// Prefix a route path for use as a browser location.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if self.is_root() {
            return path.to_string();
        }
        if path == "/" {
            return self.0.clone();
        }
        format!("{}{path}", self.0)
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for BasePath {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Navigation strategy. Only browser history (real URL paths) is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// HTML5 history rooted at the base path.
    Browser(BasePath),
}

impl HistoryMode {
    /// Base path for the mode.
    #[must_use]
    pub const fn base(&self) -> &BasePath {
        match self {
            Self::Browser(base) => base,
        }
    }
}

impl Default for HistoryMode {
    fn default() -> Self {
        Self::Browser(BasePath::root())
    }
}

/// Router configuration assembled at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Navigation strategy and base path.
    pub history: HistoryMode,
}

impl RouterConfig {
    /// Configuration from an optional deployment base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL is malformed.
    pub fn from_base_url(value: Option<&str>) -> Result<Self, ConfigError> {
        let base = value.map_or_else(|| Ok(BasePath::root()), BasePath::parse)?;
        Ok(Self {
            history: HistoryMode::Browser(base),
        })
    }

    /// Configuration from `GALLERY_BASE_URL` as captured at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the captured value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_base_url(option_env!("GALLERY_BASE_URL"))
    }

    /// Base path in effect.
    #[must_use]
    pub const fn base(&self) -> &BasePath {
        self.history.base()
    }
}
