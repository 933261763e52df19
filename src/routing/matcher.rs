//! Path matching against route patterns.
//!
//! # Responsibilities
//! - Test a path against a pattern (exact, `*`, or compiled regex)
//! - Keep the params of the last successful match
//! - Build paths from patterns (reverse generation)
//!
//! # Design Decisions
//! - Failures are `false`/`None`, never errors: a pattern that does not
//!   compile simply never matches (and is logged)
//! - Compiled patterns come from a shared `PatternCache` unless caching is off
//! - Case sensitivity is a per-call input, not router state

use std::sync::Arc;

use serde_json::Value;

use crate::routing::cache::PatternCache;
use crate::routing::params::Params;
use crate::routing::pattern::{CompiledPattern, PatternError};
use crate::routing::reverse;

/// Matches paths against route patterns.
#[derive(Debug, Clone, Default)]
pub struct Router {
    cache: Option<PatternCache>,
    params: Params,
}

impl Router {
    /// Create a router with its own pattern cache.
    pub fn new() -> Self {
        Self::with_cache(PatternCache::new())
    }

    /// Create a router backed by a shared cache.
    pub fn with_cache(cache: PatternCache) -> Self {
        Self {
            cache: Some(cache),
            params: Params::default(),
        }
    }

    /// Create a router that compiles every pattern on each use.
    pub fn uncached() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> Option<&PatternCache> {
        self.cache.as_ref()
    }

    /// Compile `pattern`, going through the cache when there is one.
    pub fn compile(
        &self,
        pattern: &str,
        case_sensitive: bool,
    ) -> Result<Arc<CompiledPattern>, PatternError> {
        match &self.cache {
            Some(cache) => cache.get_or_compile(pattern, case_sensitive),
            None => CompiledPattern::compile(pattern, case_sensitive).map(Arc::new),
        }
    }

    /// Case-insensitive match of `path` against `pattern`.
    pub fn matches(&mut self, pattern: &str, path: &str) -> bool {
        self.match_path(pattern, path, false)
    }

    /// Match `path` against `pattern`.
    ///
    /// On success the extracted values are available from [`Router::params`]
    /// until the next call.
    pub fn match_path(&mut self, pattern: &str, path: &str, case_sensitive: bool) -> bool {
        self.params = Params::default();

        if pattern == "*" || pattern == path {
            return true;
        }

        let compiled = match self.compile(pattern, case_sensitive) {
            Ok(compiled) => compiled,
            Err(e) => {
                tracing::warn!(pattern, error = %e, "Route pattern rejected");
                return false;
            }
        };

        match compiled.captures(path) {
            Some(params) => {
                tracing::trace!(pattern, path, params = params.len(), "Pattern matched");
                self.params = params;
                true
            }
            None => false,
        }
    }

    /// Params of the last successful match.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Take the params of the last match, leaving them empty.
    pub fn take_params(&mut self) -> Params {
        std::mem::take(&mut self.params)
    }

    /// Build a path from `pattern`; `None` when `values` runs out.
    pub fn make(&self, pattern: &str, values: &[Value]) -> Option<String> {
        reverse::make(pattern, values)
    }
}
