//! Resume aggregate root.
//!
//! # Invariants
//!
//! 1. No two careers overlap in time (see [`Period::overlaps`](crate::Period::overlaps)).
//! 2. Every project's company is the company of some career.
//!
//! Every operation takes `&self` and returns a new `Resume`. The child
//! collections are persistent vectors, so a copy shares structure with the
//! original and the original stays valid for any other holder.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::{fmt, hash::Hash};

use chrono::{DateTime, NaiveDate, Utc};
use im::Vector;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{invariants, snapshot::ResumeSnapshot};
use crate::{
    domain::{
        entities::{Career, Certification, Portfolio, Project, SelfPromotion, SocialLink},
        identifiers::{
            CareerId, CertificationId, PortfolioId, ProjectId, ResumeId, SelfPromotionId,
            SocialLinkId, UserId,
        },
        notification::ErrorCollector,
        value_objects::{FullName, ResumeName},
    },
    error::{ChildKind, ResumeError, Result},
};

// ============================================================================
// INPUT AND METADATA
// ============================================================================

/// Creation and last-modification instants of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTimestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeTimestamps {
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    fn touched(self) -> Self {
        Self {
            updated_at: Utc::now(),
            ..self
        }
    }
}

/// Raw fields of a resume, consumed by [`Resume::create`] and
/// [`Resume::reconstruct`].
///
/// Children are passed as already-built entities. When creating, build them
/// with the same collector you hand to `create` so their errors count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDraft {
    pub user_id: UserId,
    pub name: String,
    pub date: NaiveDate,
    pub last_name: String,
    pub first_name: String,
    pub auto_save_enabled: bool,
    pub careers: Vec<Career>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub portfolios: Vec<Portfolio>,
    pub social_links: Vec<SocialLink>,
    pub self_promotions: Vec<SelfPromotion>,
}

impl ResumeDraft {
    /// A draft with no children and auto-save off.
    #[must_use]
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        date: NaiveDate,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            date,
            last_name: last_name.into(),
            first_name: first_name.into(),
            auto_save_enabled: false,
            careers: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            portfolios: Vec::new(),
            social_links: Vec::new(),
            self_promotions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_auto_save(mut self, enabled: bool) -> Self {
        self.auto_save_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_career(mut self, career: Career) -> Self {
        self.careers.push(career);
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    #[must_use]
    pub fn with_certification(mut self, certification: Certification) -> Self {
        self.certifications.push(certification);
        self
    }

    #[must_use]
    pub fn with_portfolio(mut self, portfolio: Portfolio) -> Self {
        self.portfolios.push(portfolio);
        self
    }

    #[must_use]
    pub fn with_social_link(mut self, social_link: SocialLink) -> Self {
        self.social_links.push(social_link);
        self
    }

    #[must_use]
    pub fn with_self_promotion(mut self, self_promotion: SelfPromotion) -> Self {
        self.self_promotions.push(self_promotion);
        self
    }
}

// ============================================================================
// CHILD COLLECTIONS
// ============================================================================

/// Identity lookup and collection access shared by the six child kinds.
trait Child: Clone {
    type Id: Copy + Eq + Hash + fmt::Display;
    const KIND: ChildKind;

    fn child_id(&self) -> Self::Id;
    fn items(resume: &Resume) -> &Vector<Self>;
    fn items_mut(resume: &mut Resume) -> &mut Vector<Self>;
}

macro_rules! child {
    ($entity:ty, $id:ty, $kind:expr, $field:ident) => {
        impl Child for $entity {
            type Id = $id;
            const KIND: ChildKind = $kind;

            fn child_id(&self) -> Self::Id {
                self.id()
            }

            fn items(resume: &Resume) -> &Vector<Self> {
                &resume.$field
            }

            fn items_mut(resume: &mut Resume) -> &mut Vector<Self> {
                &mut resume.$field
            }
        }
    };
}

child!(Career, CareerId, ChildKind::Career, careers);
child!(Project, ProjectId, ChildKind::Project, projects);
child!(Certification, CertificationId, ChildKind::Certification, certifications);
child!(Portfolio, PortfolioId, ChildKind::Portfolio, portfolios);
child!(SocialLink, SocialLinkId, ChildKind::SocialLink, social_links);
child!(SelfPromotion, SelfPromotionId, ChildKind::SelfPromotion, self_promotions);

/// Fail with every collected message if the collector is not clean.
fn ensure_valid(
    resume_id: ResumeId,
    errors: &ErrorCollector,
    operation: &'static str,
    child: Option<ChildKind>,
) -> Result<()> {
    if errors.has_errors() {
        warn!(
            %resume_id,
            operation,
            child = ?child,
            fields = errors.errors().len(),
            messages = errors.len(),
            "resume operation rejected"
        );
        return Err(ResumeError::Validation(errors.to_validation_errors()));
    }
    Ok(())
}

// ============================================================================
// RESUME AGGREGATE ROOT
// ============================================================================

/// Resume aggregate root.
///
/// Owns six ordered child collections and enforces the career overlap and
/// project company rules across them. The collections are only reachable
/// read-only; add, update and remove operations are the only way to change
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    id: ResumeId,
    user_id: UserId,
    name: ResumeName,
    date: NaiveDate,
    full_name: FullName,
    auto_save_enabled: bool,
    timestamps: ResumeTimestamps,
    careers: Vector<Career>,
    projects: Vector<Project>,
    certifications: Vector<Certification>,
    portfolios: Vector<Portfolio>,
    social_links: Vector<SocialLink>,
    self_promotions: Vector<SelfPromotion>,
}

impl Resume {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a new resume with a fresh identity and timestamps.
    ///
    /// Validates the name and full name, checks the supplied careers
    /// pairwise for overlap and every project against those careers.
    ///
    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` if a draft collection repeats an
    /// identity. Otherwise returns `ResumeError::Validation` with every
    /// message in `errors`, including ones recorded before the call, if any
    /// rule failed.
    pub fn create(errors: &mut ErrorCollector, draft: ResumeDraft) -> Result<Self> {
        let resume = Self::reconstruct(ResumeId::generate(), draft, ResumeTimestamps::now());

        resume.ensure_distinct::<Career>()?;
        resume.ensure_distinct::<Project>()?;
        resume.ensure_distinct::<Certification>()?;
        resume.ensure_distinct::<Portfolio>()?;
        resume.ensure_distinct::<SocialLink>()?;
        resume.ensure_distinct::<SelfPromotion>()?;

        resume.name.validate(errors);
        resume.full_name.validate(errors);
        for (index, career) in resume.careers.iter().enumerate() {
            invariants::check_career_overlap(errors, career, resume.careers.iter().take(index));
        }
        for project in &resume.projects {
            invariants::check_project_company(errors, project, &resume.careers);
        }
        ensure_valid(resume.id, errors, "create", None)?;

        debug!(
            resume_id = %resume.id,
            user_id = %resume.user_id,
            careers = resume.careers.len(),
            projects = resume.projects.len(),
            "resume created"
        );
        Ok(resume)
    }

    /// Rehydrate a stored resume. Nothing is validated.
    #[must_use]
    pub fn reconstruct(id: ResumeId, draft: ResumeDraft, timestamps: ResumeTimestamps) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            name: ResumeName::reconstruct(draft.name),
            date: draft.date,
            full_name: FullName::reconstruct(draft.last_name, draft.first_name),
            auto_save_enabled: draft.auto_save_enabled,
            timestamps,
            careers: Vector::from(draft.careers),
            projects: Vector::from(draft.projects),
            certifications: Vector::from(draft.certifications),
            portfolios: Vector::from(draft.portfolios),
            social_links: Vector::from(draft.social_links),
            self_promotions: Vector::from(draft.self_promotions),
        }
    }

    /// Rehydrate from the flattened storage form.
    #[must_use]
    pub fn from_snapshot(snapshot: ResumeSnapshot) -> Self {
        Self::from(snapshot)
    }

    /// Flatten every field, identities and timestamps included.
    #[must_use]
    pub fn to_snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot::from(self)
    }

    fn touched(&self) -> Self {
        Self {
            timestamps: self.timestamps.touched(),
            ..self.clone()
        }
    }

    // ========================================================================
    // GENERIC CHILD OPERATIONS
    // ========================================================================

    fn ensure_distinct<T: Child>(&self) -> Result<()> {
        T::items(self)
            .iter()
            .map(T::child_id)
            .duplicates()
            .next()
            .map_or(Ok(()), |child_id| {
                Err(ResumeError::duplicate_child(T::KIND, child_id))
            })
    }

    fn ensure_absent<T: Child>(&self, child_id: T::Id) -> Result<()> {
        if T::items(self).iter().any(|item| item.child_id() == child_id) {
            return Err(ResumeError::duplicate_child(T::KIND, child_id));
        }
        Ok(())
    }

    fn position_of<T: Child>(&self, child_id: T::Id) -> Result<usize> {
        T::items(self)
            .iter()
            .position(|item| item.child_id() == child_id)
            .ok_or_else(|| ResumeError::child_not_found(T::KIND, child_id))
    }

    fn add_child<T: Child>(&self, errors: &ErrorCollector, child: T) -> Result<Self> {
        self.ensure_absent::<T>(child.child_id())?;
        self.push_child(errors, child)
    }

    /// Append `child`, whose identity is known to be new.
    fn push_child<T: Child>(&self, errors: &ErrorCollector, child: T) -> Result<Self> {
        ensure_valid(self.id, errors, "add", Some(T::KIND))?;

        let child_id = child.child_id();
        let mut next = self.touched();
        let items = T::items_mut(&mut next);
        items.push_back(child);
        debug!(
            resume_id = %self.id,
            child = %T::KIND,
            %child_id,
            count = items.len(),
            "child added"
        );
        Ok(next)
    }

    fn update_child<T: Child>(&self, errors: &ErrorCollector, child: T) -> Result<Self> {
        let index = self.position_of::<T>(child.child_id())?;
        self.replace_child(errors, index, child)
    }

    /// Replace the element at `index`, found by a prior identity lookup.
    fn replace_child<T: Child>(
        &self,
        errors: &ErrorCollector,
        index: usize,
        child: T,
    ) -> Result<Self> {
        ensure_valid(self.id, errors, "update", Some(T::KIND))?;

        let child_id = child.child_id();
        let mut next = self.touched();
        T::items_mut(&mut next)[index] = child;
        debug!(
            resume_id = %self.id,
            child = %T::KIND,
            %child_id,
            index,
            "child updated"
        );
        Ok(next)
    }

    fn remove_child<T: Child>(&self, child_id: T::Id) -> Self {
        let mut next = self.touched();
        let items = T::items_mut(&mut next);
        items.retain(|item| item.child_id() != child_id);
        debug!(
            resume_id = %self.id,
            child = %T::KIND,
            %child_id,
            count = items.len(),
            "child removed"
        );
        next
    }

    fn find_child<T: Child>(&self, child_id: T::Id) -> Option<&T> {
        T::items(self)
            .iter()
            .find(|item| item.child_id() == child_id)
    }

    // ========================================================================
    // CAREERS
    // ========================================================================

    /// Append a career.
    ///
    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` if the resume already holds a
    /// career with that identity, or `ResumeError::Validation` if the career
    /// overlaps an existing one or `errors` already holds messages. The
    /// resume is unchanged.
    pub fn add_career(&self, errors: &mut ErrorCollector, career: Career) -> Result<Self> {
        self.ensure_absent::<Career>(career.id())?;
        invariants::check_career_overlap(errors, &career, &self.careers);
        self.push_child(errors, career)
    }

    /// Replace the career with the same identity, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `ResumeError::ChildNotFound` if no career has that identity,
    /// or `ResumeError::Validation` as for [`Resume::add_career`].
    pub fn update_career(&self, errors: &mut ErrorCollector, career: Career) -> Result<Self> {
        let index = self.position_of::<Career>(career.id())?;
        invariants::check_career_overlap(errors, &career, &self.careers);
        self.replace_child(errors, index, career)
    }

    #[must_use]
    pub fn remove_career(&self, id: CareerId) -> Self {
        self.remove_child::<Career>(id)
    }

    // ========================================================================
    // PROJECTS
    // ========================================================================

    /// Append a project.
    ///
    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` for a reused identity, or
    /// `ResumeError::Validation` if no career is at the project's company or
    /// `errors` already holds messages.
    pub fn add_project(&self, errors: &mut ErrorCollector, project: Project) -> Result<Self> {
        self.ensure_absent::<Project>(project.id())?;
        invariants::check_project_company(errors, &project, &self.careers);
        self.push_child(errors, project)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::ChildNotFound` if no project has that identity,
    /// or `ResumeError::Validation` as for [`Resume::add_project`].
    pub fn update_project(&self, errors: &mut ErrorCollector, project: Project) -> Result<Self> {
        let index = self.position_of::<Project>(project.id())?;
        invariants::check_project_company(errors, &project, &self.careers);
        self.replace_child(errors, index, project)
    }

    #[must_use]
    pub fn remove_project(&self, id: ProjectId) -> Self {
        self.remove_child::<Project>(id)
    }

    // ========================================================================
    // CERTIFICATIONS, PORTFOLIOS, SOCIAL LINKS, SELF PROMOTIONS
    // ========================================================================

    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` for a reused identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn add_certification(
        &self,
        errors: &ErrorCollector,
        certification: Certification,
    ) -> Result<Self> {
        self.add_child(errors, certification)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::ChildNotFound` for an unknown identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn update_certification(
        &self,
        errors: &ErrorCollector,
        certification: Certification,
    ) -> Result<Self> {
        self.update_child(errors, certification)
    }

    #[must_use]
    pub fn remove_certification(&self, id: CertificationId) -> Self {
        self.remove_child::<Certification>(id)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` for a reused identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn add_portfolio(&self, errors: &ErrorCollector, portfolio: Portfolio) -> Result<Self> {
        self.add_child(errors, portfolio)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::ChildNotFound` for an unknown identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn update_portfolio(&self, errors: &ErrorCollector, portfolio: Portfolio) -> Result<Self> {
        self.update_child(errors, portfolio)
    }

    #[must_use]
    pub fn remove_portfolio(&self, id: PortfolioId) -> Self {
        self.remove_child::<Portfolio>(id)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` for a reused identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn add_social_link(&self, errors: &ErrorCollector, social_link: SocialLink) -> Result<Self> {
        self.add_child(errors, social_link)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::ChildNotFound` for an unknown identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn update_social_link(
        &self,
        errors: &ErrorCollector,
        social_link: SocialLink,
    ) -> Result<Self> {
        self.update_child(errors, social_link)
    }

    #[must_use]
    pub fn remove_social_link(&self, id: SocialLinkId) -> Self {
        self.remove_child::<SocialLink>(id)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::DuplicateChild` for a reused identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn add_self_promotion(
        &self,
        errors: &ErrorCollector,
        self_promotion: SelfPromotion,
    ) -> Result<Self> {
        self.add_child(errors, self_promotion)
    }

    /// # Errors
    ///
    /// Returns `ResumeError::ChildNotFound` for an unknown identity, or
    /// `ResumeError::Validation` if `errors` holds messages.
    pub fn update_self_promotion(
        &self,
        errors: &ErrorCollector,
        self_promotion: SelfPromotion,
    ) -> Result<Self> {
        self.update_child(errors, self_promotion)
    }

    #[must_use]
    pub fn remove_self_promotion(&self, id: SelfPromotionId) -> Self {
        self.remove_child::<SelfPromotion>(id)
    }

    // ========================================================================
    // RESUME FIELDS
    // ========================================================================

    /// # Errors
    ///
    /// Returns `ResumeError::Validation` if the name breaks a rule or
    /// `errors` already holds messages.
    pub fn rename(&self, errors: &mut ErrorCollector, name: impl Into<String>) -> Result<Self> {
        let name = ResumeName::new(errors, name);
        ensure_valid(self.id, errors, "rename", None)?;
        debug!(resume_id = %self.id, %name, "resume renamed");
        Ok(Self {
            name,
            ..self.touched()
        })
    }

    /// # Errors
    ///
    /// Returns `ResumeError::Validation` if either part breaks a rule or
    /// `errors` already holds messages.
    pub fn change_full_name(
        &self,
        errors: &mut ErrorCollector,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Self> {
        let full_name = FullName::new(errors, last_name, first_name);
        ensure_valid(self.id, errors, "change_full_name", None)?;
        debug!(resume_id = %self.id, "resume full name changed");
        Ok(Self {
            full_name,
            ..self.touched()
        })
    }

    /// # Errors
    ///
    /// Returns `ResumeError::Validation` if `errors` holds messages.
    pub fn change_date(&self, errors: &ErrorCollector, date: NaiveDate) -> Result<Self> {
        ensure_valid(self.id, errors, "change_date", None)?;
        debug!(resume_id = %self.id, %date, "resume date changed");
        Ok(Self {
            date,
            ..self.touched()
        })
    }

    #[must_use]
    pub fn set_auto_save(&self, enabled: bool) -> Self {
        debug!(resume_id = %self.id, enabled, "resume auto-save toggled");
        Self {
            auto_save_enabled: enabled,
            ..self.touched()
        }
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn id(&self) -> ResumeId {
        self.id
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn name(&self) -> &ResumeName {
        &self.name
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn full_name(&self) -> &FullName {
        &self.full_name
    }

    #[must_use]
    pub const fn is_auto_save_enabled(&self) -> bool {
        self.auto_save_enabled
    }

    #[must_use]
    pub const fn timestamps(&self) -> ResumeTimestamps {
        self.timestamps
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at
    }

    #[must_use]
    pub const fn careers(&self) -> &Vector<Career> {
        &self.careers
    }

    #[must_use]
    pub const fn projects(&self) -> &Vector<Project> {
        &self.projects
    }

    #[must_use]
    pub const fn certifications(&self) -> &Vector<Certification> {
        &self.certifications
    }

    #[must_use]
    pub const fn portfolios(&self) -> &Vector<Portfolio> {
        &self.portfolios
    }

    #[must_use]
    pub const fn social_links(&self) -> &Vector<SocialLink> {
        &self.social_links
    }

    #[must_use]
    pub const fn self_promotions(&self) -> &Vector<SelfPromotion> {
        &self.self_promotions
    }

    #[must_use]
    pub fn find_career(&self, id: CareerId) -> Option<&Career> {
        self.find_child(id)
    }

    #[must_use]
    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.find_child(id)
    }

    #[must_use]
    pub fn find_certification(&self, id: CertificationId) -> Option<&Certification> {
        self.find_child(id)
    }

    #[must_use]
    pub fn find_portfolio(&self, id: PortfolioId) -> Option<&Portfolio> {
        self.find_child(id)
    }

    #[must_use]
    pub fn find_social_link(&self, id: SocialLinkId) -> Option<&SocialLink> {
        self.find_child(id)
    }

    #[must_use]
    pub fn find_self_promotion(&self, id: SelfPromotionId) -> Option<&SelfPromotion> {
        self.find_child(id)
    }

    /// The career still in progress, if any.
    ///
    /// The overlap rule allows at most one.
    #[must_use]
    pub fn active_career(&self) -> Option<&Career> {
        self.careers.iter().find(|career| career.is_active())
    }

    /// Projects done at the given company.
    pub fn projects_at<'a>(&'a self, company_name: &'a str) -> impl Iterator<Item = &'a Project> {
        self.projects
            .iter()
            .filter(move |project| project.company_name().as_str() == company_name)
    }
}
