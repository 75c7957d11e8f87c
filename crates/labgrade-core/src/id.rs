//! Stable identifiers for rubrics, criteria and levels
//!
//! Generated ids have the form `<prefix>-<ulid>` in lowercase, for example
//! `cr-01j9x7...`. Ids are assigned when the entity is created and never
//! derived from its display name, so renaming or duplicating a criterion
//! name cannot orphan or merge its scores.
//!
//! Ids written by hand in a document are accepted as long as they are
//! non-empty and use only ASCII alphanumerics, `-` and `_`.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{GradeError, Result};

fn validate(kind: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(GradeError::invalid_value(kind, "(empty)"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(GradeError::invalid_value(kind, id));
    }
    Ok(())
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Prefix used for generated ids
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh, time-ordered id
            pub fn generate() -> Self {
                $name(format!(
                    "{}-{}",
                    Self::PREFIX,
                    Ulid::new().to_string().to_lowercase()
                ))
            }

            /// Wrap an existing id after validating its characters
            pub fn new(id: impl Into<String>) -> Result<Self> {
                let id = id.into();
                validate($kind, &id)?;
                Ok($name(id))
            }

            /// Wrap a known-good literal without validation (internal use only)
            #[allow(dead_code)]
            pub(crate) fn new_unchecked(id: &str) -> Self {
                $name(id.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = GradeError;

            fn try_from(value: String) -> Result<Self> {
                $name::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = GradeError;

            fn from_str(s: &str) -> Result<Self> {
                $name::new(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a rubric criterion; keys every score and feedback entry
    CriterionId,
    "cr",
    "criterion id"
);
define_id!(
    /// Identifier of a rubric
    RubricId,
    "rb",
    "rubric id"
);
define_id!(
    /// Identifier of a descriptive level inside a criterion
    LevelId,
    "lv",
    "level id"
);
