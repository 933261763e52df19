//! Route handlers and how they are invoked.
//!
//! # Responsibilities
//! - Represent a handler as a callable or a (class, method) pair
//! - Adapt plain closures of 0 to 5 arguments to the positional convention
//! - Resolve class-method handlers at invocation time
//!
//! # Design Decisions
//! - Nothing is resolved at registration; a class may be registered after
//!   its routes and before the dispatcher runs
//! - Return values are any `Serialize` type, stored as JSON values

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::dispatch::args::{Args, Packed, Param};
use crate::dispatch::controller::ControllerRegistry;

/// Why a matched route's handler could not be invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("class `{0}` is not registered")]
    UnknownClass(String),

    #[error("class `{class}` has no method `{method}`")]
    UnknownMethod { class: String, method: String },

    #[error("handler takes {expected} arguments, {received} given")]
    TooFewArguments { expected: usize, received: usize },

    #[error("handler takes discrete arguments, {received} values were packed")]
    UnexpectedPacked { received: usize },

    #[error("handler takes packed arguments, {received} values were spread")]
    UnexpectedSpread { received: usize },

    #[error("handler output is not representable: {0}")]
    Output(String),
}

/// Convert a handler's return value into the stored result.
pub fn output<R: Serialize>(value: R) -> Result<Value, HandlerError> {
    serde_json::to_value(value).map_err(|e| HandlerError::Output(e.to_string()))
}

/// Functions usable as handlers.
///
/// Implemented for closures taking 0 to 5 [`Param`] arguments, a single
/// [`Packed`] argument, or the raw [`Args`]. `Marker` only exists to keep
/// the implementations apart.
pub trait HandlerFn<Marker> {
    fn call_with(&mut self, args: Args) -> Result<Value, HandlerError>;
}

macro_rules! param_ty {
    ($arg:ident) => {
        Param
    };
}

macro_rules! spread_handler {
    ($arity:literal => $($arg:ident),*) => {
        impl<F, R> HandlerFn<fn($(param_ty!($arg)),*) -> R> for F
        where
            F: FnMut($(param_ty!($arg)),*) -> R,
            R: Serialize,
        {
            #[allow(unused_mut, unused_variables, unused_comparisons)]
            fn call_with(&mut self, args: Args) -> Result<Value, HandlerError> {
                let mut values = match args {
                    Args::Spread(values) if values.len() >= $arity => values.into_iter(),
                    // Without parameters there is nothing to unpack
                    Args::Packed(values) if $arity == 0 => values.into_iter(),
                    Args::Spread(values) => {
                        return Err(HandlerError::TooFewArguments {
                            expected: $arity,
                            received: values.len(),
                        })
                    }
                    Args::Packed(values) => {
                        return Err(HandlerError::UnexpectedPacked { received: values.len() })
                    }
                };
                $(let $arg: Param = values.next().unwrap_or_default();)*
                output((self)($($arg),*))
            }
        }
    };
}

spread_handler!(0 =>);
spread_handler!(1 => a);
spread_handler!(2 => a, b);
spread_handler!(3 => a, b, c);
spread_handler!(4 => a, b, c, d);
spread_handler!(5 => a, b, c, d, e);

impl<F, R> HandlerFn<fn(Packed) -> R> for F
where
    F: FnMut(Packed) -> R,
    R: Serialize,
{
    fn call_with(&mut self, args: Args) -> Result<Value, HandlerError> {
        match args {
            Args::Packed(values) => output((self)(Packed(values))),
            Args::Spread(values) => Err(HandlerError::UnexpectedSpread {
                received: values.len(),
            }),
        }
    }
}

impl<F, R> HandlerFn<fn(Args) -> R> for F
where
    F: FnMut(Args) -> R,
    R: Serialize,
{
    fn call_with(&mut self, args: Args) -> Result<Value, HandlerError> {
        output((self)(args))
    }
}

/// Invoke `f` with `args` under the positional convention.
pub fn invoke<F, M>(mut f: F, args: Args) -> Result<Value, HandlerError>
where
    F: HandlerFn<M>,
{
    f.call_with(args)
}

type BoxedCallable = Box<dyn FnMut(Args) -> Result<Value, HandlerError>>;

/// What a route is bound to.
pub enum Handler {
    /// A closure or function.
    Callable(BoxedCallable),
    /// A registered controller class and one of its methods. The class is
    /// instantiated with its no-argument constructor on every invocation.
    ClassMethod { class: String, method: String },
}

impl Handler {
    /// Wrap a closure or function.
    pub fn callable<F, M>(f: F) -> Self
    where
        F: HandlerFn<M> + 'static,
    {
        let mut f = f;
        Handler::Callable(Box::new(move |args: Args| f.call_with(args)))
    }

    pub fn class_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        Handler::ClassMethod {
            class: class.into(),
            method: method.into(),
        }
    }

    /// Parse a qualified `Class::method` target.
    ///
    /// The class part may carry namespace separators (`\App\Blog::show`).
    pub fn parse_target(target: &str) -> Option<Self> {
        let (class, method) = target.rsplit_once("::")?;
        if class.is_empty() || method.is_empty() {
            return None;
        }
        Some(Self::class_method(class, method))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Handler::Callable(_))
    }

    /// The (class, method) pair for class-method handlers.
    pub fn target(&self) -> Option<(&str, &str)> {
        match self {
            Handler::ClassMethod { class, method } => Some((class, method)),
            Handler::Callable(_) => None,
        }
    }

    /// Resolve and invoke with `args`.
    pub fn invoke(
        &mut self,
        classes: &ControllerRegistry,
        args: Args,
    ) -> Result<Value, HandlerError> {
        match self {
            Handler::Callable(f) => (f)(args),
            Handler::ClassMethod { class, method } => classes.invoke(class, method, args),
        }
    }
}

impl<C: Into<String>, M: Into<String>> From<(C, M)> for Handler {
    fn from((class, method): (C, M)) -> Self {
        Handler::class_method(class, method)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Callable(_) => f.write_str("Callable(..)"),
            Handler::ClassMethod { class, method } => write!(f, "ClassMethod({}::{})", class, method),
        }
    }
}
