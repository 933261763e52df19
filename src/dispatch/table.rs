//! Ordered pattern → handler registry.
//!
//! # Design Decisions
//! - Scan order is insertion order
//! - Re-registering a pattern replaces its handler in place; the route keeps
//!   its original position and therefore its priority
//! - Lookups are exact on the pattern string, never a path match
//! - Linear scans: route tables are small and scanned in full on dispatch anyway

use crate::dispatch::handler::Handler;

/// A pattern bound to a handler.
#[derive(Debug)]
pub struct Route {
    pattern: String,
    handler: Handler,
}

impl Route {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut Handler {
        &mut self.handler
    }
}

#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update the route for `pattern`; returns the replaced handler.
    pub fn insert(&mut self, pattern: String, handler: Handler) -> Option<Handler> {
        match self.position(&pattern) {
            Some(index) => Some(std::mem::replace(&mut self.routes[index].handler, handler)),
            None => {
                self.routes.push(Route { pattern, handler });
                None
            }
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&Handler> {
        self.position(pattern).map(|index| &self.routes[index].handler)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.position(pattern).is_some()
    }

    /// Remove the route for `pattern`, keeping the order of the others.
    pub fn remove(&mut self, pattern: &str) -> Option<Handler> {
        self.position(pattern)
            .map(|index| self.routes.remove(index).handler)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Route> {
        self.routes.iter_mut()
    }

    /// Patterns in scan order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn position(&self, pattern: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.pattern == pattern)
    }
}
