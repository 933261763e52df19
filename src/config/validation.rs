//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route pattern compiles
//! - Check every handler target names a class and a method
//! - Detect duplicate patterns
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DispatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::DispatchConfig;
use crate::dispatch::Handler;
use crate::routing::CompiledPattern;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: pattern is empty")]
    EmptyPattern { index: usize },

    #[error("route #{index}: pattern `{pattern}` is already declared")]
    DuplicatePattern { index: usize, pattern: String },

    #[error("route #{index}: handler `{handler}` is not of the form Class::method")]
    InvalidHandler { index: usize, handler: String },

    #[error("route #{index}: {message}")]
    InvalidPattern { index: usize, message: String },

    #[error("log level `{0}` is not a valid filter")]
    InvalidLogLevel(String),
}

/// Validate `config`, collecting every error.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
        } else if !seen.insert(route.pattern.as_str()) {
            // A later duplicate would silently replace the earlier handler
            errors.push(ValidationError::DuplicatePattern {
                index,
                pattern: route.pattern.clone(),
            });
        } else if let Err(e) = CompiledPattern::compile(&route.pattern, config.case_sensitive) {
            errors.push(ValidationError::InvalidPattern {
                index,
                message: e.to_string(),
            });
        }

        if Handler::parse_target(&route.handler).is_none() {
            errors.push(ValidationError::InvalidHandler {
                index,
                handler: route.handler.clone(),
            });
        }
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(pattern: &str, handler: &str) -> RouteConfig {
        RouteConfig {
            pattern: pattern.into(),
            handler: handler.into(),
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = DispatchConfig::default();
        config.routes.push(route("/", "Home::index"));
        config.routes.push(route("/blog(/@year(/@month))", "Blog::archive"));
        config.routes.push(route("/files/*", r"\App\Files::serve"));
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DispatchConfig::default();
        config.routes.push(route("", "Home::index"));
        config.routes.push(route("/a", "Home"));
        config.routes.push(route("/a", "Home::a"));
        config.routes.push(route("/@id:[0-9", "Home::id"));
        config.observability.log_level = "route_dispatch=loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], ValidationError::EmptyPattern { index: 0 });
        assert_eq!(
            errors[1],
            ValidationError::InvalidHandler {
                index: 1,
                handler: "Home".into()
            }
        );
        assert_eq!(
            errors[2],
            ValidationError::DuplicatePattern {
                index: 2,
                pattern: "/a".into()
            }
        );
        assert!(matches!(errors[3], ValidationError::InvalidPattern { index: 3, .. }));
        assert!(matches!(errors[4], ValidationError::InvalidLogLevel(_)));
    }
}
