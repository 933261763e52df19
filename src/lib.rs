//! Route pattern matching and first-match dispatch.
//!
//! ```text
//!   pattern ──▶ routing::pattern ──▶ CompiledPattern (cached)
//!                                         │
//!   path ──▶ dispatch::Dispatcher ──▶ routing::Router::match_path
//!                 │                        │
//!                 │◀──── Params ───────────┘
//!                 ▼
//!           Handler (callable | Class::method) ──▶ result
//! ```

pub mod config;
pub mod dispatch;
pub mod observability;
pub mod routing;

pub use config::DispatchConfig;
pub use dispatch::{Dispatcher, Handler};
pub use routing::{Params, Router};
