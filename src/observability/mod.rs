//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / dispatch / config produce:
//!     → tracing events with structured fields (pattern, path, route, error)
//!     → logging.rs subscriber (stderr, plain or JSON)
//! ```
//!
//! # Levels
//! - `trace`: pattern compiled, pattern matched
//! - `debug`: route dispatched, no route matched, handler replaced
//! - `warn`: pattern rejected, handler could not be invoked

pub mod logging;
