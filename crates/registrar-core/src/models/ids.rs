//! Opaque record identifiers. Both are UUID v4 strings on the wire and in
//! storage; malformed input is rejected when parsed at the boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RegistrarError, RegistrarResult};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Parse an identifier received from outside the process.
            pub fn parse(raw: &str) -> RegistrarResult<Self> {
                uuid::Uuid::parse_str(raw)
                    .map(|id| Self(id.to_string()))
                    .map_err(|_| RegistrarError::InvalidId { id: raw.to_string() })
            }

            /// Wrap a value already known to be valid (e.g. read back from storage).
            pub fn from_trusted(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

record_id!(
    /// Identifier of a course record.
    CourseId
);

record_id!(
    /// Identifier of a student record.
    StudentId
);
