//! Aggregate-boundary failures.
//!
//! Field-level problems never surface here directly: they are accumulated in
//! an [`ErrorCollector`](crate::ErrorCollector) and only turned into a
//! [`ResumeError::Validation`] when the aggregate decides an operation cannot
//! proceed.

use thiserror::Error;

use crate::domain::notification::ValidationErrors;

/// The kind of child entity an aggregate operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ChildKind {
    Career,
    Project,
    Certification,
    Portfolio,
    SocialLink,
    SelfPromotion,
}

/// Errors returned by [`Resume`](crate::Resume) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResumeError {
    /// One or more field-level validation messages were collected.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// An update targeted a child the resume does not own.
    #[error("{kind} not found: {id}")]
    ChildNotFound {
        /// Collection that was searched
        kind: ChildKind,
        /// Identity that was requested
        id: String,
    },

    /// An add, or a draft passed to `create`, reused an identity the
    /// collection already holds.
    #[error("{kind} already present: {id}")]
    DuplicateChild {
        /// Collection that already holds the identity
        kind: ChildKind,
        /// Identity that was reused
        id: String,
    },
}

impl ResumeError {
    /// Create a `ChildNotFound` error
    #[must_use]
    pub fn child_not_found(kind: ChildKind, id: impl std::fmt::Display) -> Self {
        Self::ChildNotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Create a `DuplicateChild` error
    #[must_use]
    pub fn duplicate_child(kind: ChildKind, id: impl std::fmt::Display) -> Self {
        Self::DuplicateChild {
            kind,
            id: id.to_string(),
        }
    }

    /// Field-level messages carried by a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::ChildNotFound { .. } | Self::DuplicateChild { .. } => None,
        }
    }

    /// Check if this is a `Validation` error
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ValidationErrors> for ResumeError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for aggregate operations
pub type Result<T> = std::result::Result<T, ResumeError>;
