//! Portfolio entity: a showcase piece with a public https link.

use crate::domain::{
    identifiers::PortfolioId,
    notification::ErrorCollector,
    rules,
    value_objects::Link,
};

const NAME_MAX: usize = 50;
const OVERVIEW_MAX: usize = 1000;
const TECH_STACK_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    id: PortfolioId,
    name: String,
    overview: String,
    tech_stack: String,
    link: Link,
}

impl Portfolio {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a portfolio item with a fresh identity.
    ///
    /// `tech_stack` is free text here, unlike the structured
    /// [`TechStack`](crate::TechStack) of a project.
    pub fn create(
        errors: &mut ErrorCollector,
        name: impl Into<String>,
        overview: impl Into<String>,
        tech_stack: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let portfolio = Self::reconstruct(
            PortfolioId::generate(),
            name,
            overview,
            tech_stack,
            Link::reconstruct(link),
        );
        portfolio.validate(errors);
        portfolio
    }

    #[must_use]
    pub fn reconstruct(
        id: PortfolioId,
        name: impl Into<String>,
        overview: impl Into<String>,
        tech_stack: impl Into<String>,
        link: Link,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            overview: overview.into(),
            tech_stack: tech_stack.into(),
            link,
        }
    }

    fn validate(&self, errors: &mut ErrorCollector) {
        rules::required_text(errors, "name", "portfolio name", &self.name, NAME_MAX);
        rules::required_text(errors, "overview", "overview", &self.overview, OVERVIEW_MAX);
        rules::required_text(
            errors,
            "techStack",
            "tech stack",
            &self.tech_stack,
            TECH_STACK_MAX,
        );
        self.link.validate(errors);
    }

    fn revalidated(self, errors: &mut ErrorCollector) -> Self {
        self.validate(errors);
        self
    }

    // ========================================================================
    // CHANGE METHODS
    // ========================================================================

    pub fn change_name(&self, errors: &mut ErrorCollector, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_overview(&self, errors: &mut ErrorCollector, overview: impl Into<String>) -> Self {
        Self {
            overview: overview.into(),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_tech_stack(
        &self,
        errors: &mut ErrorCollector,
        tech_stack: impl Into<String>,
    ) -> Self {
        Self {
            tech_stack: tech_stack.into(),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_link(&self, errors: &mut ErrorCollector, link: impl Into<String>) -> Self {
        Self {
            link: Link::reconstruct(link),
            ..self.clone()
        }
        .revalidated(errors)
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn id(&self) -> PortfolioId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn overview(&self) -> &str {
        &self.overview
    }

    #[must_use]
    pub fn tech_stack(&self) -> &str {
        &self.tech_stack
    }

    #[must_use]
    pub const fn link(&self) -> &Link {
        &self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(errors: &mut ErrorCollector) -> Portfolio {
        Portfolio::create(
            errors,
            "Resume builder",
            "Generates PDF resumes from structured data.",
            "Rust, PostgreSQL",
            "https://example.com/resume-builder",
        )
    }

    #[test]
    fn test_create_valid() {
        let mut errors = ErrorCollector::new();
        let portfolio = sample(&mut errors);
        assert!(!errors.has_errors(), "{errors:?}");
        assert_eq!(portfolio.tech_stack(), "Rust, PostgreSQL");
    }

    #[test]
    fn test_create_reports_every_field() {
        let mut errors = ErrorCollector::new();
        Portfolio::create(&mut errors, "", "", "x".repeat(101), "ftp://example.com");

        assert_eq!(errors.messages("name"), ["portfolio name is required"]);
        assert_eq!(errors.messages("overview"), ["overview is required"]);
        assert_eq!(
            errors.messages("techStack"),
            ["tech stack must be 100 characters or fewer"]
        );
        assert_eq!(errors.messages("link").len(), 1);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_change_methods_keep_identity() {
        let mut errors = ErrorCollector::new();
        let portfolio = sample(&mut errors);

        let changed = portfolio
            .change_name(&mut errors, "Renamed")
            .change_overview(&mut errors, "Different")
            .change_tech_stack(&mut errors, "Go")
            .change_link(&mut errors, "https://example.org");

        assert!(!errors.has_errors());
        assert_eq!(changed.id(), portfolio.id());
        assert_eq!(changed.name(), "Renamed");
        assert_eq!(changed.overview(), "Different");
        assert_eq!(changed.tech_stack(), "Go");
        assert_eq!(changed.link().as_str(), "https://example.org");
        assert_eq!(portfolio.name(), "Resume builder");
    }
}
