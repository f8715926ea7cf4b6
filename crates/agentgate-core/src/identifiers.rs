//! Validated identifier types for the gateway
//!
//! Thread and run identifiers are distinct newtypes so they cannot be mixed
//! up at call sites. Identifiers follow a parse-don't-validate design:
//! `parse()` returns a `Result` for anything that arrives over the wire,
//! while `generate()` mints fresh UUID-backed values for new records.
//!
//! Validation rules for parsed identifiers:
//! - non-empty, at most 128 characters
//! - only ASCII alphanumerics, hyphens, and underscores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_ID_LENGTH: usize = 128;

/// Error returned when an identifier fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier exceeds {MAX_ID_LENGTH} characters")]
    TooLong,
    #[error("identifier contains invalid character '{0}'")]
    InvalidCharacter(char),
}

fn validate(id: &str) -> Result<(), IdValidationError> {
    if id.is_empty() {
        return Err(IdValidationError::Empty);
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(IdValidationError::TooLong);
    }
    if let Some(c) = id
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(IdValidationError::InvalidCharacter(c));
    }
    Ok(())
}

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse and validate an identifier from an untrusted string.
            pub fn parse(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
                validate(id.as_ref())?;
                Ok(Self(id.as_ref().to_string()))
            }

            /// Mint a fresh UUID v4 identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Construct without validation. Only for values that are
            /// guaranteed valid, such as literals in tests.
            #[doc(hidden)]
            pub fn new_unchecked(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a conversation thread.
    ThreadId
}

define_id! {
    /// Unique identifier for a single engine run against a thread.
    RunId
}
