//! Identity-bearing children of a [`Resume`](crate::Resume).
//!
//! Every entity has three kinds of entry point:
//!
//! - `create(errors, ..)` generates a fresh identity and validates,
//!   returning the entity whatever the outcome.
//! - `reconstruct(id, ..)` rehydrates trusted state without validation.
//! - `change_<field>(&self, errors, ..)` returns a new instance with one
//!   field replaced, re-running validation over every field.
//!
//! Cross-entity rules live on the aggregate.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod career;
mod certification;
mod portfolio;
mod project;
mod self_promotion;
mod social_link;

pub use career::Career;
pub use certification::Certification;
pub use portfolio::Portfolio;
pub use project::{Process, Project, ProjectFields};
pub use self_promotion::SelfPromotion;
pub use social_link::SocialLink;
