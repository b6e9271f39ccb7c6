//! # Domain Layer
//!
//! Pure business logic for the resume aggregate: no I/O, no global state.
//!
//! ## Module Structure
//!
//! - [`notification`] - the [`ErrorCollector`](notification::ErrorCollector)
//!   every factory reports into
//! - [`identifiers`] - uuid-backed identity newtypes
//! - [`value_objects`] - self-validating immutable values (names, links,
//!   periods, tech stacks)
//! - [`entities`] - identity-bearing children of the resume
//! - [`aggregates`] - the [`Resume`](aggregates::Resume) aggregate root and
//!   its cross-entity invariants
//! - [`repository`] - persistence port
//!
//! ## Create vs Reconstruct
//!
//! Every value object and entity has two entry points:
//!
//! - `new` / `create` takes an `ErrorCollector`, runs every rule and returns
//!   the value even when rules fail. The caller inspects the collector.
//! - `reconstruct` trusts its input. It is the rehydration path for state
//!   that was valid when it was stored.
//!
//! All fields are private, so these two functions are the only way in.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod aggregates;
pub mod entities;
pub mod identifiers;
pub mod notification;
pub mod repository;
mod rules;
pub mod value_objects;
