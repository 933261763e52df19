//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher::run()
//!     → table.rs (routes in registration order)
//!     → routing::Router (match each pattern against the fixed path)
//!     → first match: Params → positional values
//!     → args.rs (0-5 spread, 6+ packed)
//!     → handler.rs (callable, or controller.rs class + method)
//!     → result stored on the dispatcher
//! ```

pub mod args;
pub mod controller;
pub mod dispatcher;
pub mod handler;
pub mod table;

pub use args::{Args, Packed, Param, SPREAD_LIMIT};
pub use controller::{Controller, ControllerRegistry};
pub use dispatcher::Dispatcher;
pub use handler::{invoke, Handler, HandlerError, HandlerFn};
pub use table::{Route, RouteTable};
