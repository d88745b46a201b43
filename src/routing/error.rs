//! Routing errors.
//!
//! Everything except [`RouteError::NotFound`] is a configuration error and is
//! raised while tables are built or mounted, never during lookup.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate route path '{path}' (entries {first} and {second})")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },

    #[error("invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("declared component {component} has no route")]
    UnroutedComponent { component: &'static str },

    #[error("route '{path}' has an empty title")]
    EmptyTitle { path: String },

    #[error("prefix '{prefix}' is already mounted")]
    DuplicateMount { prefix: String },

    #[error("invalid mount prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },

    #[error("no route for '{path}'")]
    NotFound { path: String },
}

impl RouteError {
    /// True for resolution misses, false for configuration errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}
