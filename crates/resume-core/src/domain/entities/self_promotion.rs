use crate::domain::{identifiers::SelfPromotionId, notification::ErrorCollector, rules};

const TITLE_MAX: usize = 50;
const CONTENT_MAX: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPromotion {
    id: SelfPromotionId,
    title: String,
    content: String,
}

impl SelfPromotion {
    pub fn create(
        errors: &mut ErrorCollector,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let promotion = Self::reconstruct(SelfPromotionId::generate(), title, content);
        promotion.validate(errors);
        promotion
    }

    #[must_use]
    pub fn reconstruct(
        id: SelfPromotionId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    fn validate(&self, errors: &mut ErrorCollector) {
        rules::required_text(errors, "title", "title", &self.title, TITLE_MAX);
        rules::required_text(errors, "content", "content", &self.content, CONTENT_MAX);
    }

    pub fn change_title(&self, errors: &mut ErrorCollector, title: impl Into<String>) -> Self {
        let changed = Self {
            title: title.into(),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    pub fn change_content(&self, errors: &mut ErrorCollector, content: impl Into<String>) -> Self {
        let changed = Self {
            content: content.into(),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    #[must_use]
    pub const fn id(&self) -> SelfPromotionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid() {
        let mut errors = ErrorCollector::new();
        let promotion = SelfPromotion::create(&mut errors, "Strengths", "Calm under pressure.");
        assert!(!errors.has_errors());
        assert_eq!(promotion.title(), "Strengths");
    }

    #[test]
    fn test_both_fields_required() {
        let mut errors = ErrorCollector::new();
        SelfPromotion::create(&mut errors, "", "\n");
        assert_eq!(errors.messages("title"), ["title is required"]);
        assert_eq!(errors.messages("content"), ["content is required"]);
    }

    #[test]
    fn test_content_limit() {
        let mut errors = ErrorCollector::new();
        SelfPromotion::create(&mut errors, "Strengths", "x".repeat(1000));
        assert!(!errors.has_errors());

        SelfPromotion::create(&mut errors, "Strengths", "x".repeat(1001));
        assert_eq!(
            errors.messages("content"),
            ["content must be 1000 characters or fewer"]
        );
    }

    #[test]
    fn test_change_methods() {
        let mut errors = ErrorCollector::new();
        let promotion = SelfPromotion::create(&mut errors, "Strengths", "Calm.");
        let changed = promotion
            .change_title(&mut errors, "Motivation")
            .change_content(&mut errors, "Curious.");
        assert!(!errors.has_errors());
        assert_eq!(changed.id(), promotion.id());
        assert_eq!(changed.title(), "Motivation");
        assert_eq!(changed.content(), "Curious.");
    }
}
