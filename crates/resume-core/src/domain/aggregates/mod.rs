//! # Aggregate Roots
//!
//! [`Resume`] is the only aggregate: the consistency boundary for a resume
//! and its six child collections.
//!
//! **Business rules:**
//! - No two careers may overlap in time
//! - A project's company must be the company of one of the careers
//! - Nothing changes when an operation fails
//!
//! **Usage:**
//! ```rust,ignore
//! use resume_core::{Career, ErrorCollector, Resume, ResumeDraft, UserId, YearMonth};
//!
//! let mut errors = ErrorCollector::new();
//! let resume = Resume::create(&mut errors, ResumeDraft::new(user, "Main", today, "Yamada", "Taro"))?;
//! let career = Career::create(&mut errors, "ABC", YearMonth::new(2020, 1)?, None, true);
//! let resume = resume.add_career(&mut errors, career)?;
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod invariants;
pub mod resume;
pub mod snapshot;

pub use resume::{Resume, ResumeDraft, ResumeTimestamps};
pub use snapshot::{
    CareerRecord, CertificationRecord, PortfolioRecord, ProjectRecord, ResumeSnapshot,
    SelfPromotionRecord, SocialLinkRecord,
};
