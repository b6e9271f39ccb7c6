//! Self-validating immutable values.
//!
//! Construction is "soft": `new` records every broken rule in the supplied
//! [`ErrorCollector`](crate::ErrorCollector) and still returns a value holding
//! exactly the raw input. `reconstruct` skips validation for trusted data.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod company_name;
mod full_name;
mod link;
mod period;
mod resume_name;
pub mod tech_stack;
mod year_month;

pub use company_name::CompanyName;
pub use full_name::FullName;
pub use link::Link;
pub use period::Period;
pub use resume_name::ResumeName;
pub use tech_stack::{DependencyStack, InfrastructureStack, TechStack, ToolingStack};
pub use year_month::{YearMonth, YearMonthError};
