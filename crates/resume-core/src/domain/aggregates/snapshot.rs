//! Flattened, serializable form of a [`Resume`].
//!
//! This is the shape storage and backup collaborators read and write. It
//! carries every field losslessly, identities and timestamps included.
//! Turning a snapshot back into a resume is the trusted reconstruct path:
//! nothing is validated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::resume::{Resume, ResumeDraft, ResumeTimestamps};
use crate::domain::{
    entities::{Career, Certification, Portfolio, Project, ProjectFields, SelfPromotion, SocialLink},
    identifiers::{
        CareerId, CertificationId, PortfolioId, ProjectId, ResumeId, SelfPromotionId,
        SocialLinkId, UserId,
    },
    value_objects::{CompanyName, Link, Period, YearMonth},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    pub id: ResumeId,
    pub user_id: UserId,
    pub name: String,
    pub date: NaiveDate,
    pub last_name: String,
    pub first_name: String,
    pub auto_save_enabled: bool,
    #[serde(flatten)]
    pub timestamps: ResumeTimestamps,
    #[serde(default)]
    pub careers: Vec<CareerRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub certifications: Vec<CertificationRecord>,
    #[serde(default)]
    pub portfolios: Vec<PortfolioRecord>,
    #[serde(default)]
    pub social_links: Vec<SocialLinkRecord>,
    #[serde(default)]
    pub self_promotions: Vec<SelfPromotionRecord>,
}

impl ResumeSnapshot {
    /// Serialize as pretty-printed JSON, the backup file body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed or incomplete input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: CareerId,
    pub company_name: String,
    pub start_date: YearMonth,
    pub end_date: Option<YearMonth>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub id: CertificationId,
    pub name: String,
    pub date: YearMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub id: PortfolioId,
    pub name: String,
    pub overview: String,
    pub tech_stack: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkRecord {
    pub id: SocialLinkId,
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPromotionRecord {
    pub id: SelfPromotionId,
    pub title: String,
    pub content: String,
}

// ============================================================================
// ENTITY -> RECORD
// ============================================================================

impl From<&Career> for CareerRecord {
    fn from(career: &Career) -> Self {
        Self {
            id: career.id(),
            company_name: career.company_name().as_str().to_string(),
            start_date: career.period().start(),
            end_date: career.period().end(),
            active: career.period().is_active(),
        }
    }
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            fields: project.to_fields(),
        }
    }
}

impl From<&Certification> for CertificationRecord {
    fn from(certification: &Certification) -> Self {
        Self {
            id: certification.id(),
            name: certification.name().to_string(),
            date: certification.date(),
        }
    }
}

impl From<&Portfolio> for PortfolioRecord {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            id: portfolio.id(),
            name: portfolio.name().to_string(),
            overview: portfolio.overview().to_string(),
            tech_stack: portfolio.tech_stack().to_string(),
            link: portfolio.link().as_str().to_string(),
        }
    }
}

impl From<&SocialLink> for SocialLinkRecord {
    fn from(social_link: &SocialLink) -> Self {
        Self {
            id: social_link.id(),
            name: social_link.name().to_string(),
            link: social_link.link().as_str().to_string(),
        }
    }
}

impl From<&SelfPromotion> for SelfPromotionRecord {
    fn from(promotion: &SelfPromotion) -> Self {
        Self {
            id: promotion.id(),
            title: promotion.title().to_string(),
            content: promotion.content().to_string(),
        }
    }
}

// ============================================================================
// RECORD -> ENTITY (trusted)
// ============================================================================

impl From<CareerRecord> for Career {
    fn from(record: CareerRecord) -> Self {
        Self::reconstruct(
            record.id,
            CompanyName::reconstruct(record.company_name),
            Period::reconstruct(record.start_date, record.end_date, record.active),
        )
    }
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self::reconstruct(record.id, record.fields)
    }
}

impl From<CertificationRecord> for Certification {
    fn from(record: CertificationRecord) -> Self {
        Self::reconstruct(record.id, record.name, record.date)
    }
}

impl From<PortfolioRecord> for Portfolio {
    fn from(record: PortfolioRecord) -> Self {
        Self::reconstruct(
            record.id,
            record.name,
            record.overview,
            record.tech_stack,
            Link::reconstruct(record.link),
        )
    }
}

impl From<SocialLinkRecord> for SocialLink {
    fn from(record: SocialLinkRecord) -> Self {
        Self::reconstruct(record.id, record.name, Link::reconstruct(record.link))
    }
}

impl From<SelfPromotionRecord> for SelfPromotion {
    fn from(record: SelfPromotionRecord) -> Self {
        Self::reconstruct(record.id, record.title, record.content)
    }
}

// ============================================================================
// AGGREGATE
// ============================================================================

impl From<&Resume> for ResumeSnapshot {
    fn from(resume: &Resume) -> Self {
        Self {
            id: resume.id(),
            user_id: resume.user_id(),
            name: resume.name().as_str().to_string(),
            date: resume.date(),
            last_name: resume.full_name().last_name().to_string(),
            first_name: resume.full_name().first_name().to_string(),
            auto_save_enabled: resume.is_auto_save_enabled(),
            timestamps: resume.timestamps(),
            careers: resume.careers().iter().map(CareerRecord::from).collect(),
            projects: resume.projects().iter().map(ProjectRecord::from).collect(),
            certifications: resume
                .certifications()
                .iter()
                .map(CertificationRecord::from)
                .collect(),
            portfolios: resume.portfolios().iter().map(PortfolioRecord::from).collect(),
            social_links: resume
                .social_links()
                .iter()
                .map(SocialLinkRecord::from)
                .collect(),
            self_promotions: resume
                .self_promotions()
                .iter()
                .map(SelfPromotionRecord::from)
                .collect(),
        }
    }
}

impl From<ResumeSnapshot> for Resume {
    fn from(snapshot: ResumeSnapshot) -> Self {
        let draft = ResumeDraft {
            user_id: snapshot.user_id,
            name: snapshot.name,
            date: snapshot.date,
            last_name: snapshot.last_name,
            first_name: snapshot.first_name,
            auto_save_enabled: snapshot.auto_save_enabled,
            careers: snapshot.careers.into_iter().map(Career::from).collect(),
            projects: snapshot.projects.into_iter().map(Project::from).collect(),
            certifications: snapshot
                .certifications
                .into_iter()
                .map(Certification::from)
                .collect(),
            portfolios: snapshot.portfolios.into_iter().map(Portfolio::from).collect(),
            social_links: snapshot
                .social_links
                .into_iter()
                .map(SocialLink::from)
                .collect(),
            self_promotions: snapshot
                .self_promotions
                .into_iter()
                .map(SelfPromotion::from)
                .collect(),
        };
        Self::reconstruct(snapshot.id, draft, snapshot.timestamps)
    }
}
