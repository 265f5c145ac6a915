//! Error types for route table construction, resolution and router configuration.

use thiserror::Error;

use crate::core::names::RouteName;

/// Errors raised while building or querying the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two definitions share the same symbolic name.
    #[error("duplicate route name")]
    DuplicateName {
        /// Name declared more than once.
        name: RouteName,
    },
    /// Definition pattern differs from the one the typed route declares for its name.
    #[error("route pattern does not match route name")]
    PatternMismatch {
        /// Route whose pattern is inconsistent.
        name: RouteName,
        /// Pattern declared by the definition.
        pattern: &'static str,
    },
    /// A required parameter was not supplied.
    #[error("missing route parameter")]
    MissingParam {
        /// Route being resolved.
        name: RouteName,
        /// Parameter that was expected.
        param: &'static str,
    },
    /// A parameter was supplied for a route that does not declare it.
    #[error("unexpected route parameter")]
    UnexpectedParam {
        /// Route being resolved.
        name: RouteName,
        /// Parameter that was supplied.
        param: &'static str,
    },
    /// Parameter value failed validation.
    #[error("invalid route parameter")]
    InvalidParam {
        /// Parameter being validated.
        param: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Location did not match any declared route.
    #[error("no route matches location")]
    Unmatched {
        /// Location that failed to match.
        path: String,
    },
    /// Route name string was not recognised.
    #[error("unknown route name")]
    UnknownName {
        /// Name text that failed to parse.
        value: String,
    },
}

/// Errors raised while building router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Base path value was rejected.
    #[error("invalid base path")]
    InvalidBasePath {
        /// Raw value supplied by the environment.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Result alias for route operations.
pub type RouteResult<T> = Result<T, RouteError>;
