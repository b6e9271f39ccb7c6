//! Persistence port for the resume aggregate.
//!
//! The domain layer only defines the trait. Storage backends implement it
//! outside this crate and hand back resumes built through the trusted
//! reconstruct path (usually [`Resume::from_snapshot`]).
//!
//! ```rust,ignore
//! use resume_core::{RepositoryResult, Resume, ResumeRepository, UserId};
//!
//! fn auto_saving(repo: &dyn ResumeRepository, user: UserId) -> RepositoryResult<Vec<Resume>> {
//!     Ok(repo
//!         .list_by_user(&user)?
//!         .into_iter()
//!         .filter(Resume::is_auto_save_enabled)
//!         .collect())
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::{
    aggregates::Resume,
    identifiers::{ResumeId, UserId},
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Failures a resume store reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("resume {0} is not stored")]
    ResumeNotFound(ResumeId),

    /// The stored copy was written after the copy being saved was loaded.
    #[error("resume {id} is stale: stored copy updated at {stored_at}, this copy at {updated_at}")]
    StaleResume {
        id: ResumeId,
        stored_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },

    /// A stored snapshot no longer decodes.
    #[error("snapshot of resume {id} is unreadable: {reason}")]
    CorruptSnapshot { id: ResumeId, reason: String },

    #[error("resume store failed: {0}")]
    Backend(String),
}

impl RepositoryError {
    /// Refuse to overwrite `stored` with the older `resume`.
    #[must_use]
    pub fn stale(resume: &Resume, stored: &Resume) -> Self {
        Self::StaleResume {
            id: resume.id(),
            stored_at: stored.updated_at(),
            updated_at: resume.updated_at(),
        }
    }

    #[must_use]
    pub fn corrupt_snapshot(id: ResumeId, reason: impl fmt::Display) -> Self {
        Self::CorruptSnapshot {
            id,
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn backend(reason: impl fmt::Display) -> Self {
        Self::Backend(reason.to_string())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResumeNotFound(_))
    }
}

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

// ============================================================================
// RESUME REPOSITORY
// ============================================================================

/// Repository for the [`Resume`] aggregate.
///
/// # Error Conditions
///
/// - `ResumeNotFound`: nothing stored under the identity
/// - `StaleResume`: the stored resume was saved after this copy was loaded
/// - `CorruptSnapshot`: stored data no longer decodes into a resume
/// - `Backend`: the store itself failed
pub trait ResumeRepository: Send + Sync {
    /// Load a resume by ID.
    ///
    /// # Errors
    ///
    /// Returns `ResumeNotFound` if no resume with the given ID exists, and
    /// `CorruptSnapshot` or `Backend` if it cannot be read.
    fn load(&self, id: &ResumeId) -> RepositoryResult<Resume>;

    /// Save a resume (create or update), children included.
    ///
    /// # Errors
    ///
    /// Returns `StaleResume` if a newer copy is stored, or `Backend` on write
    /// failure.
    fn save(&self, resume: &Resume) -> RepositoryResult<()>;

    /// Delete a resume and all of its children.
    ///
    /// # Errors
    ///
    /// Returns `ResumeNotFound` if the resume doesn't exist, or `Backend`.
    fn delete(&self, id: &ResumeId) -> RepositoryResult<()>;

    /// List every resume owned by a user.
    ///
    /// # Errors
    ///
    /// Returns `CorruptSnapshot` or `Backend` if any stored resume of the
    /// user cannot be read.
    fn list_by_user(&self, user_id: &UserId) -> RepositoryResult<Vec<Resume>>;

    /// Whether a resume is stored under `id`. A missing resume is `false`,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns any other `load` failure.
    fn exists(&self, id: &ResumeId) -> RepositoryResult<bool> {
        match self.load(id) {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
