//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Match:
//!     (pattern, path, case flag)
//!     → matcher.rs (fast paths: "*", literal equality)
//!     → cache.rs (compiled pattern lookup)
//!     → pattern.rs (token scan → regex synthesis → captures)
//!     → params.rs (named values + wildcard remainder)
//!
//! Reverse:
//!     (pattern, values) → reverse.rs → concrete path
//! ```
//!
//! # Pattern Language
//! - `*` alone matches any path
//! - a trailing `/*` captures the rest of the path as the last value
//! - `@name` captures one segment; `@name:regex` constrains it
//! - `( ... )` groups are optional; unmatched tokens are `None`
//! - without a trailing `/` the path may carry one; with it the slash is optional
//!
//! # Design Decisions
//! - First match wins; ordering belongs to the dispatcher's route table
//! - Deterministic: same input always compiles to the same matcher

pub mod cache;
pub mod matcher;
pub mod params;
pub mod pattern;
pub mod reverse;

pub use cache::PatternCache;
pub use matcher::Router;
pub use params::Params;
pub use pattern::{CompiledPattern, PatternError};
