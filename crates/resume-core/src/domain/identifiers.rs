//! Semantic newtypes for domain identities.
//!
//! Every identity wraps a v4 [`Uuid`]. `generate` is used by the `create`
//! factories; `from_uuid` and `parse` are for rehydration and for callers
//! that carry identities across a boundary as text.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identity.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse a hyphenated or simple uuid string.
            ///
            /// # Errors
            ///
            /// Returns `uuid::Error` if the input is not a uuid.
            pub fn parse(value: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(value.trim()).map(Self)
            }

            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_identifier!(
    /// Identity of a [`Resume`](crate::Resume).
    ResumeId
);
uuid_identifier!(
    /// Owning user of a resume. Users live outside this crate.
    UserId
);
uuid_identifier!(
    /// Identity of a [`Career`](crate::Career).
    CareerId
);
uuid_identifier!(
    /// Identity of a [`Project`](crate::Project).
    ProjectId
);
uuid_identifier!(CertificationId);
uuid_identifier!(PortfolioId);
uuid_identifier!(SocialLinkId);
uuid_identifier!(SelfPromotionId);
