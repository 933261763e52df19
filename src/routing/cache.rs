//! Shared cache of compiled patterns.
//!
//! Dispatchers are built per request, so the cache lives outside them and
//! is cloned into each `Router`. Entries are keyed by (pattern, case flag)
//! and never invalidated: compilation is deterministic.

use std::sync::Arc;

use dashmap::DashMap;

use crate::routing::pattern::{CompiledPattern, PatternError};

/// A thread-safe map of compiled patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternCache {
    inner: Arc<DashMap<(String, bool), Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached compilation of `pattern`, compiling it on first use.
    ///
    /// Failed compilations are not cached.
    pub fn get_or_compile(
        &self,
        pattern: &str,
        case_sensitive: bool,
    ) -> Result<Arc<CompiledPattern>, PatternError> {
        let key = (pattern.to_string(), case_sensitive);
        if let Some(hit) = self.inner.get(&key) {
            return Ok(hit.value().clone());
        }

        let compiled = Arc::new(CompiledPattern::compile(pattern, case_sensitive)?);
        tracing::trace!(pattern, case_sensitive, "Compiled route pattern");
        Ok(self.inner.entry(key).or_insert(compiled).value().clone())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}
