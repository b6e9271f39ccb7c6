use crate::domain::{
    identifiers::SocialLinkId,
    notification::ErrorCollector,
    rules,
    value_objects::Link,
};

const NAME_MAX: usize = 50;

/// A named https link to a profile elsewhere (GitHub, a blog, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    id: SocialLinkId,
    name: String,
    link: Link,
}

impl SocialLink {
    pub fn create(
        errors: &mut ErrorCollector,
        name: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let social_link = Self::reconstruct(SocialLinkId::generate(), name, Link::reconstruct(link));
        social_link.validate(errors);
        social_link
    }

    #[must_use]
    pub fn reconstruct(id: SocialLinkId, name: impl Into<String>, link: Link) -> Self {
        Self {
            id,
            name: name.into(),
            link,
        }
    }

    fn validate(&self, errors: &mut ErrorCollector) {
        rules::required_text(errors, "name", "link name", &self.name, NAME_MAX);
        self.link.validate(errors);
    }

    pub fn change_name(&self, errors: &mut ErrorCollector, name: impl Into<String>) -> Self {
        let changed = Self {
            name: name.into(),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    pub fn change_link(&self, errors: &mut ErrorCollector, link: impl Into<String>) -> Self {
        let changed = Self {
            link: Link::reconstruct(link),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    #[must_use]
    pub const fn id(&self) -> SocialLinkId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn link(&self) -> &Link {
        &self.link
    }
}
