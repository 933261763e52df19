//! First-match dispatch for one request path.
//!
//! # Responsibilities
//! - Own the route table and the last handler result
//! - Scan routes in registration order against the fixed path
//! - Invoke the first matching route's handler with its positional values
//!
//! # Design Decisions
//! - One dispatcher per path; nothing is shared except the pattern cache
//! - `run` reports failure as `false` and leaves the stored result alone
//! - Matching stops at the first matching route even if its handler fails

use serde_json::Value;

use crate::dispatch::args::Args;
use crate::dispatch::controller::ControllerRegistry;
use crate::dispatch::handler::Handler;
use crate::dispatch::table::RouteTable;
use crate::routing::Router;

/// Maps one path to a registered handler and invokes it.
#[derive(Debug)]
pub struct Dispatcher {
    router: Router,
    path: String,
    case_sensitive: bool,
    routes: RouteTable,
    classes: ControllerRegistry,
    result: Option<Value>,
}

impl Dispatcher {
    /// Create a dispatcher for `path` with a private pattern cache.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_router(Router::new(), path)
    }

    /// Create a dispatcher for `path` that matches through `router`.
    pub fn with_router(router: Router, path: impl Into<String>) -> Self {
        Self {
            router,
            path: path.into(),
            case_sensitive: false,
            routes: RouteTable::new(),
            classes: ControllerRegistry::new(),
            result: None,
        }
    }

    /// Builder form of [`Dispatcher::set_case_sensitive`].
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Use `classes` to resolve class-method handlers.
    pub fn with_classes(mut self, classes: ControllerRegistry) -> Self {
        self.classes = classes;
        self
    }

    /// Match patterns case-sensitively from the next `run` on (default: false).
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn classes(&self) -> &ControllerRegistry {
        &self.classes
    }

    /// Classes may be registered any time before `run`.
    pub fn classes_mut(&mut self) -> &mut ControllerRegistry {
        &mut self.classes
    }

    /// The path this dispatcher routes.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bind `pattern` to `handler`. An existing route keeps its position.
    pub fn set(&mut self, pattern: impl Into<String>, handler: Handler) {
        let pattern = pattern.into();
        if self.routes.insert(pattern.clone(), handler).is_some() {
            tracing::debug!(pattern = %pattern, "Route handler replaced");
        }
    }

    pub fn has(&self, pattern: &str) -> bool {
        self.routes.contains(pattern)
    }

    pub fn get(&self, pattern: &str) -> Option<&Handler> {
        self.routes.get(pattern)
    }

    pub fn remove(&mut self, pattern: &str) -> bool {
        self.routes.remove(pattern).is_some()
    }

    /// Patterns in scan order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.patterns()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dispatch the path to the first matching route.
    ///
    /// Returns `true` when a route matched and its handler ran; the handler's
    /// return value is then available from [`Dispatcher::result`].
    pub fn run(&mut self) -> bool {
        let Self {
            router,
            path,
            case_sensitive,
            routes,
            classes,
            result,
        } = self;

        for route in routes.iter_mut() {
            if !router.match_path(route.pattern(), path, *case_sensitive) {
                continue;
            }

            let args = Args::from_values(router.take_params().into_values());
            let arity = args.len();

            return match route.handler_mut().invoke(classes, args) {
                Ok(value) => {
                    tracing::debug!(
                        path = %path,
                        route = route.pattern(),
                        args = arity,
                        "Route dispatched"
                    );
                    *result = Some(value);
                    true
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path,
                        route = route.pattern(),
                        error = %e,
                        "Route handler could not be invoked"
                    );
                    false
                }
            };
        }

        tracing::debug!(path = %path, routes = routes.len(), "No route matched");
        false
    }

    /// Return value of the last handler that ran, if any.
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }
}
