//! Controller classes for class-method handlers.
//!
//! A class is a name bound to a no-argument constructor. Routes refer to
//! classes by name; the name is looked up only when a route fires, and a
//! fresh instance is built for each invocation.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::dispatch::args::Args;
use crate::dispatch::handler::HandlerError;

/// An instantiated controller.
pub trait Controller {
    /// Invoke `method` with `args`.
    ///
    /// Returns `None` when the controller has no such method. Implementations
    /// usually match on the name and delegate to [`invoke`](crate::dispatch::handler::invoke):
    ///
    /// ```
    /// use route_dispatch::dispatch::{invoke, Args, Controller, HandlerError, Param};
    /// use serde_json::Value;
    ///
    /// #[derive(Default)]
    /// struct Blog;
    ///
    /// impl Controller for Blog {
    ///     fn call(&mut self, method: &str, args: Args) -> Option<Result<Value, HandlerError>> {
    ///         match method {
    ///             "show" => Some(invoke(|slug: Param| slug, args)),
    ///             _ => None,
    ///         }
    ///     }
    /// }
    /// ```
    fn call(&mut self, method: &str, args: Args) -> Option<Result<Value, HandlerError>>;
}

type Constructor = Box<dyn Fn() -> Box<dyn Controller>>;

/// Class name → constructor.
///
/// Names are stored without a leading `\`, so `\App\Blog` and `App\Blog`
/// refer to the same class.
#[derive(Default)]
pub struct ControllerRegistry {
    classes: HashMap<String, Constructor>,
}

fn normalize(name: &str) -> &str {
    name.trim_start_matches('\\')
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `C` under `name`, constructed with `C::default()`.
    pub fn register<C>(&mut self, name: &str) -> &mut Self
    where
        C: Controller + Default + 'static,
    {
        self.register_with(name, || Box::new(C::default()))
    }

    /// Register a class with an explicit constructor.
    pub fn register_with<F>(&mut self, name: &str, constructor: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Controller> + 'static,
    {
        self.classes
            .insert(normalize(name).to_string(), Box::new(constructor));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(normalize(name))
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.classes.remove(normalize(name)).is_some()
    }

    /// Build a fresh instance of `name`.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn Controller>> {
        self.classes.get(normalize(name)).map(|construct| construct())
    }

    /// Instantiate `class` and call `method` on it.
    pub fn invoke(&self, class: &str, method: &str, args: Args) -> Result<Value, HandlerError> {
        let mut instance = self
            .instantiate(class)
            .ok_or_else(|| HandlerError::UnknownClass(class.to_string()))?;

        instance
            .call(method, args)
            .unwrap_or_else(|| {
                Err(HandlerError::UnknownMethod {
                    class: class.to_string(),
                    method: method.to_string(),
                })
            })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.classes.keys().collect();
        names.sort();
        f.debug_struct("ControllerRegistry")
            .field("classes", &names)
            .finish()
    }
}
