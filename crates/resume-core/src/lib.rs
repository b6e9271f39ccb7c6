//! # Resume Core
//!
//! Invariant-enforcing core of the resume aggregate, strictly functional Rust
//! with zero unwraps.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! Validation is two-tiered:
//! - Value objects and child entities write field-level messages into an
//!   [`ErrorCollector`] and never fail on their own.
//! - The [`Resume`] aggregate checks the collector at its boundary and
//!   returns a single [`ResumeError`] carrying every collected message.
//!
//! ```rust,ignore
//! use resume_core::{Career, ErrorCollector, YearMonth};
//!
//! let mut errors = ErrorCollector::new();
//! let career = Career::create(&mut errors, "ABC", YearMonth::new(2020, 1)?, None, true);
//! let resume = resume.add_career(&mut errors, career)?;
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
mod error;
pub mod logging;

pub use config::{Config, ConfigError, LogConfig, PartialConfig, PartialLogConfig};
pub use domain::{
    aggregates::{Resume, ResumeDraft, ResumeSnapshot, ResumeTimestamps},
    entities::{
        Career, Certification, Portfolio, Process, Project, ProjectFields, SelfPromotion,
        SocialLink,
    },
    identifiers::{
        CareerId, CertificationId, PortfolioId, ProjectId, ResumeId, SelfPromotionId,
        SocialLinkId, UserId,
    },
    notification::{ErrorCollector, ValidationErrors},
    repository::{RepositoryError, RepositoryResult, ResumeRepository},
    value_objects::{
        CompanyName, DependencyStack, FullName, InfrastructureStack, Link, Period, ResumeName,
        TechStack, ToolingStack, YearMonth, YearMonthError,
    },
};
pub use error::{ChildKind, ResumeError, Result};
pub use logging::LoggingError;
