//! Project entity: work done while employed at one of the resume's companies.
//!
//! The company name must match a career owned by the same resume. That rule
//! spans entities, so [`Resume`](crate::Resume) enforces it, not this type.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use serde::{Deserialize, Serialize};

use crate::domain::{
    identifiers::ProjectId,
    notification::ErrorCollector,
    rules,
    value_objects::{CompanyName, Period, TechStack, YearMonth},
};

const NAME_MAX: usize = 50;
const OVERVIEW_MAX: usize = 1000;
const TEAM_COMP_MAX: usize = 100;
const ROLE_MAX: usize = 100;
const ACHIEVEMENT_MAX: usize = 1000;

/// Development phases the author took part in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Process {
    pub requirements: bool,
    pub basic_design: bool,
    pub detailed_design: bool,
    pub implementation: bool,
    pub integration_test: bool,
    pub system_test: bool,
    pub maintenance: bool,
}

impl Process {
    /// Number of phases marked.
    #[must_use]
    pub fn count(&self) -> usize {
        [
            self.requirements,
            self.basic_design,
            self.detailed_design,
            self.implementation,
            self.integration_test,
            self.system_test,
            self.maintenance,
        ]
        .into_iter()
        .filter(|marked| *marked)
        .count()
    }
}

/// Raw field values accepted by [`Project::create`] and
/// [`Project::reconstruct`], and returned by [`Project::to_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub name: String,
    pub company_name: String,
    pub start_date: YearMonth,
    pub end_date: Option<YearMonth>,
    pub active: bool,
    pub overview: String,
    pub team_comp: String,
    pub role: String,
    pub achievement: String,
    pub process: Process,
    pub tech_stack: TechStack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    company_name: CompanyName,
    period: Period,
    overview: String,
    team_comp: String,
    role: String,
    achievement: String,
    process: Process,
    tech_stack: TechStack,
}

impl Project {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a project with a fresh identity, recording broken rules.
    pub fn create(errors: &mut ErrorCollector, fields: ProjectFields) -> Self {
        let project = Self::reconstruct(ProjectId::generate(), fields);
        project.validate(errors);
        project
    }

    /// Rehydrate a stored project without validation.
    #[must_use]
    pub fn reconstruct(id: ProjectId, fields: ProjectFields) -> Self {
        Self {
            id,
            name: fields.name,
            company_name: CompanyName::reconstruct(fields.company_name),
            period: Period::reconstruct(fields.start_date, fields.end_date, fields.active),
            overview: fields.overview,
            team_comp: fields.team_comp,
            role: fields.role,
            achievement: fields.achievement,
            process: fields.process,
            tech_stack: fields.tech_stack,
        }
    }

    fn validate(&self, errors: &mut ErrorCollector) {
        rules::required_text(errors, "name", "project name", &self.name, NAME_MAX);
        self.company_name.validate(errors);
        self.period.validate(errors);
        rules::required_text(errors, "overview", "overview", &self.overview, OVERVIEW_MAX);
        rules::required_text(
            errors,
            "teamComp",
            "team composition",
            &self.team_comp,
            TEAM_COMP_MAX,
        );
        rules::required_text(errors, "role", "role", &self.role, ROLE_MAX);
        rules::required_text(
            errors,
            "achievement",
            "achievement",
            &self.achievement,
            ACHIEVEMENT_MAX,
        );
        self.tech_stack.validate(errors);
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

    pub fn change_company_name(
        &self,
        errors: &mut ErrorCollector,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            company_name: CompanyName::reconstruct(company_name),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_period(
        &self,
        errors: &mut ErrorCollector,
        start: YearMonth,
        end: Option<YearMonth>,
        active: bool,
    ) -> Self {
        Self {
            period: Period::reconstruct(start, end, active),
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

    pub fn change_team_comp(
        &self,
        errors: &mut ErrorCollector,
        team_comp: impl Into<String>,
    ) -> Self {
        Self {
            team_comp: team_comp.into(),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_role(&self, errors: &mut ErrorCollector, role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_achievement(
        &self,
        errors: &mut ErrorCollector,
        achievement: impl Into<String>,
    ) -> Self {
        Self {
            achievement: achievement.into(),
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_process(&self, errors: &mut ErrorCollector, process: Process) -> Self {
        Self {
            process,
            ..self.clone()
        }
        .revalidated(errors)
    }

    pub fn change_tech_stack(&self, errors: &mut ErrorCollector, tech_stack: TechStack) -> Self {
        Self {
            tech_stack,
            ..self.clone()
        }
        .revalidated(errors)
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    #[must_use]
    pub const fn period(&self) -> &Period {
        &self.period
    }

    #[must_use]
    pub fn overview(&self) -> &str {
        &self.overview
    }

    #[must_use]
    pub fn team_comp(&self) -> &str {
        &self.team_comp
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn achievement(&self) -> &str {
        &self.achievement
    }

    #[must_use]
    pub const fn process(&self) -> Process {
        self.process
    }

    #[must_use]
    pub const fn tech_stack(&self) -> &TechStack {
        &self.tech_stack
    }

    /// Every field as raw values, suitable for [`Project::reconstruct`].
    #[must_use]
    pub fn to_fields(&self) -> ProjectFields {
        ProjectFields {
            name: self.name.clone(),
            company_name: self.company_name.as_str().to_string(),
            start_date: self.period.start(),
            end_date: self.period.end(),
            active: self.period.is_active(),
            overview: self.overview.clone(),
            team_comp: self.team_comp.clone(),
            role: self.role.clone(),
            achievement: self.achievement.clone(),
            process: self.process,
            tech_stack: self.tech_stack.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::DependencyStack;

    fn ym(value: &str) -> YearMonth {
        YearMonth::parse(value).expect("valid year-month")
    }

    fn fields() -> ProjectFields {
        ProjectFields {
            name: "Order platform rewrite".to_string(),
            company_name: "ABC".to_string(),
            start_date: ym("2021-04"),
            end_date: Some(ym("2022-03")),
            active: false,
            overview: "Replaced the legacy order system.".to_string(),
            team_comp: "5 engineers".to_string(),
            role: "Tech lead".to_string(),
            achievement: "Cut checkout latency in half.".to_string(),
            process: Process {
                implementation: true,
                integration_test: true,
                ..Process::default()
            },
            tech_stack: TechStack::default(),
        }
    }

    #[test]
    fn test_create_valid_project() {
        let mut errors = ErrorCollector::new();
        let project = Project::create(&mut errors, fields());

        assert!(!errors.has_errors(), "{errors:?}");
        assert_eq!(project.name(), "Order platform rewrite");
        assert_eq!(project.company_name().as_str(), "ABC");
        assert_eq!(project.process().count(), 2);
    }

    #[test]
    fn test_create_reports_every_blank_field() {
        let mut errors = ErrorCollector::new();
        Project::create(
            &mut errors,
            ProjectFields {
                name: String::new(),
                company_name: String::new(),
                overview: String::new(),
                team_comp: String::new(),
                role: String::new(),
                achievement: String::new(),
                ..fields()
            },
        );

        for field in [
            "name",
            "companyName",
            "overview",
            "teamComp",
            "role",
            "achievement",
        ] {
            assert_eq!(errors.messages(field).len(), 1, "{field}");
        }
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_create_reports_nested_errors() {
        let mut errors = ErrorCollector::new();
        Project::create(
            &mut errors,
            ProjectFields {
                end_date: Some(ym("2020-01")),
                tech_stack: TechStack::reconstruct(
                    DependencyStack {
                        languages: vec![String::new()],
                        ..DependencyStack::default()
                    },
                    DependencyStack::default(),
                    crate::domain::value_objects::InfrastructureStack::default(),
                    crate::domain::value_objects::ToolingStack::default(),
                ),
                ..fields()
            },
        );

        assert_eq!(errors.messages("endDate").len(), 1);
        assert_eq!(errors.messages("techStack.frontend.languages").len(), 1);
    }

    #[test]
    fn test_length_limits() {
        let mut errors = ErrorCollector::new();
        Project::create(
            &mut errors,
            ProjectFields {
                name: "n".repeat(51),
                overview: "o".repeat(1001),
                role: "r".repeat(101),
                ..fields()
            },
        );

        assert_eq!(
            errors.messages("name"),
            ["project name must be 50 characters or fewer"]
        );
        assert_eq!(errors.messages("overview").len(), 1);
        assert_eq!(errors.messages("role").len(), 1);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_change_methods_return_new_instances() {
        let mut errors = ErrorCollector::new();
        let project = Project::create(&mut errors, fields());

        let renamed = project.change_name(&mut errors, "New name");
        let moved = renamed.change_company_name(&mut errors, "DEF");
        let staffed = moved.change_team_comp(&mut errors, "3 engineers");
        let promoted = staffed.change_role(&mut errors, "Manager");
        let described = promoted.change_overview(&mut errors, "Different scope");
        let achieved = described.change_achievement(&mut errors, "Shipped");
        let processed = achieved.change_process(
            &mut errors,
            Process {
                maintenance: true,
                ..Process::default()
            },
        );
        let stacked = processed.change_tech_stack(&mut errors, TechStack::default());
        let ongoing = stacked.change_period(&mut errors, ym("2021-04"), None, true);

        assert!(!errors.has_errors(), "{errors:?}");
        assert_eq!(ongoing.id(), project.id());
        assert_eq!(ongoing.name(), "New name");
        assert_eq!(ongoing.company_name().as_str(), "DEF");
        assert_eq!(ongoing.team_comp(), "3 engineers");
        assert_eq!(ongoing.role(), "Manager");
        assert_eq!(ongoing.overview(), "Different scope");
        assert_eq!(ongoing.achievement(), "Shipped");
        assert_eq!(ongoing.process().count(), 1);
        assert!(ongoing.period().is_active());
        assert_eq!(project.name(), "Order platform rewrite");
    }

    #[test]
    fn test_change_with_invalid_value_still_returns_value() {
        let mut errors = ErrorCollector::new();
        let project = Project::create(&mut errors, fields());

        let changed = project.change_role(&mut errors, "");

        assert_eq!(errors.messages("role"), ["role is required"]);
        assert_eq!(changed.role(), "");
    }

    #[test]
    fn test_fields_round_trip() {
        let mut errors = ErrorCollector::new();
        let project = Project::create(&mut errors, fields());

        let restored = Project::reconstruct(project.id(), project.to_fields());

        assert_eq!(restored, project);
    }
}
