//! Technology stack of a project, grouped by concern.
//!
//! The groups are plain data records; only [`TechStack`] validates. Every
//! list follows the same caps: at most [`MAX_ITEMS`] entries, each non-blank
//! and at most [`MAX_ITEM_CHARS`] characters. Errors are keyed
//! `techStack.<group>.<list>`.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use serde::{Deserialize, Serialize};

use crate::domain::{notification::ErrorCollector, rules};

pub const MAX_ITEMS: usize = 30;
pub const MAX_ITEM_CHARS: usize = 50;

/// Languages, frameworks and libraries on one side of the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DependencyStack {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub libraries: Vec<String>,
    pub build_tools: Vec<String>,
    pub package_managers: Vec<String>,
    pub linters: Vec<String>,
    pub formatters: Vec<String>,
    pub testing_tools: Vec<String>,
}

impl DependencyStack {
    fn lists(&self) -> [(&'static str, &[String]); 8] {
        [
            ("languages", self.languages.as_slice()),
            ("frameworks", self.frameworks.as_slice()),
            ("libraries", self.libraries.as_slice()),
            ("buildTools", self.build_tools.as_slice()),
            ("packageManagers", self.package_managers.as_slice()),
            ("linters", self.linters.as_slice()),
            ("formatters", self.formatters.as_slice()),
            ("testingTools", self.testing_tools.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfrastructureStack {
    pub clouds: Vec<String>,
    pub operating_systems: Vec<String>,
    pub containers: Vec<String>,
    pub databases: Vec<String>,
    pub web_servers: Vec<String>,
    pub ci_cd_tools: Vec<String>,
    pub iac_tools: Vec<String>,
    pub monitoring_tools: Vec<String>,
    pub logging_tools: Vec<String>,
}

impl InfrastructureStack {
    fn lists(&self) -> [(&'static str, &[String]); 9] {
        [
            ("clouds", self.clouds.as_slice()),
            ("operatingSystems", self.operating_systems.as_slice()),
            ("containers", self.containers.as_slice()),
            ("databases", self.databases.as_slice()),
            ("webServers", self.web_servers.as_slice()),
            ("ciCdTools", self.ci_cd_tools.as_slice()),
            ("iacTools", self.iac_tools.as_slice()),
            ("monitoringTools", self.monitoring_tools.as_slice()),
            ("loggingTools", self.logging_tools.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolingStack {
    pub source_control: Vec<String>,
    pub project_management: Vec<String>,
    pub communication: Vec<String>,
    pub documentation: Vec<String>,
    pub api_development: Vec<String>,
    pub design: Vec<String>,
    pub editors: Vec<String>,
    pub development_environments: Vec<String>,
}

impl ToolingStack {
    fn lists(&self) -> [(&'static str, &[String]); 8] {
        [
            ("sourceControl", self.source_control.as_slice()),
            ("projectManagement", self.project_management.as_slice()),
            ("communication", self.communication.as_slice()),
            ("documentation", self.documentation.as_slice()),
            ("apiDevelopment", self.api_development.as_slice()),
            ("design", self.design.as_slice()),
            ("editors", self.editors.as_slice()),
            ("developmentEnvironments", self.development_environments.as_slice()),
        ]
    }
}

/// Fixed-shape technology record of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStack {
    frontend: DependencyStack,
    backend: DependencyStack,
    infrastructure: InfrastructureStack,
    tools: ToolingStack,
}

impl TechStack {
    pub fn new(
        errors: &mut ErrorCollector,
        frontend: DependencyStack,
        backend: DependencyStack,
        infrastructure: InfrastructureStack,
        tools: ToolingStack,
    ) -> Self {
        let stack = Self::reconstruct(frontend, backend, infrastructure, tools);
        stack.validate(errors);
        stack
    }

    #[must_use]
    pub const fn reconstruct(
        frontend: DependencyStack,
        backend: DependencyStack,
        infrastructure: InfrastructureStack,
        tools: ToolingStack,
    ) -> Self {
        Self {
            frontend,
            backend,
            infrastructure,
            tools,
        }
    }

    pub(crate) fn validate(&self, errors: &mut ErrorCollector) {
        let groups = self
            .frontend
            .lists()
            .map(|list| ("frontend", list))
            .into_iter()
            .chain(self.backend.lists().map(|list| ("backend", list)))
            .chain(
                self.infrastructure
                    .lists()
                    .map(|list| ("infrastructure", list)),
            )
            .chain(self.tools.lists().map(|list| ("tools", list)));

        for (group, (list, items)) in groups {
            validate_list(errors, &format!("techStack.{group}.{list}"), items);
        }
    }

    #[must_use]
    pub const fn frontend(&self) -> &DependencyStack {
        &self.frontend
    }

    #[must_use]
    pub const fn backend(&self) -> &DependencyStack {
        &self.backend
    }

    #[must_use]
    pub const fn infrastructure(&self) -> &InfrastructureStack {
        &self.infrastructure
    }

    #[must_use]
    pub const fn tools(&self) -> &ToolingStack {
        &self.tools
    }

    /// Whether no technology is recorded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn validate_list(errors: &mut ErrorCollector, field: &str, items: &[String]) {
    if items.len() > MAX_ITEMS {
        errors.add_error(field, format!("at most {MAX_ITEMS} entries are allowed"));
    }
    if items.iter().any(|item| item.trim().is_empty()) {
        errors.add_error(field, "entries must not be blank");
    }
    if items
        .iter()
        .any(|item| rules::char_len(item) > MAX_ITEM_CHARS)
    {
        errors.add_error(
            field,
            format!("entries must be {MAX_ITEM_CHARS} characters or fewer"),
        );
    }
}
