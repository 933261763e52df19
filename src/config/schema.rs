//! Configuration schema definitions.
//!
//! This module defines the route file structure. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::dispatch::{Dispatcher, Handler};
use crate::routing::{PatternCache, Router};

/// Root configuration for a dispatcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Match patterns case-sensitively.
    pub case_sensitive: bool,

    /// Keep compiled patterns in a shared cache.
    pub cache_patterns: bool,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Routes in scan order.
    pub routes: Vec<RouteConfig>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            cache_patterns: true,
            observability: ObservabilityConfig::default(),
            routes: Vec::new(),
        }
    }
}

/// A pattern bound to a `Class::method` target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/blog(/@year(/@month))").
    pub pattern: String,

    /// Handler target (e.g., "BlogController::archive").
    pub handler: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (e.g., "info" or "route_dispatch=debug").
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl DispatchConfig {
    /// A router honoring `cache_patterns`, sharing `cache` when caching is on.
    pub fn router(&self, cache: &PatternCache) -> Router {
        if self.cache_patterns {
            Router::with_cache(cache.clone())
        } else {
            Router::uncached()
        }
    }

    /// Register every configured route on `dispatcher` as a class-method handler.
    ///
    /// Returns the number of routes bound. Targets that are not of the form
    /// `Class::method` are skipped; `validate_config` reports them.
    pub fn bind(&self, dispatcher: &mut Dispatcher) -> usize {
        dispatcher.set_case_sensitive(self.case_sensitive);

        let mut bound = 0;
        for route in &self.routes {
            match Handler::parse_target(&route.handler) {
                Some(handler) => {
                    dispatcher.set(route.pattern.as_str(), handler);
                    bound += 1;
                }
                None => {
                    tracing::warn!(
                        pattern = %route.pattern,
                        handler = %route.handler,
                        "Skipping route with malformed handler target"
                    );
                }
            }
        }
        bound
    }

    /// Build a dispatcher for `path` with every configured route bound.
    pub fn dispatcher(&self, cache: &PatternCache, path: &str) -> Dispatcher {
        let mut dispatcher = Dispatcher::with_router(self.router(cache), path);
        self.bind(&mut dispatcher);
        dispatcher
    }
}
