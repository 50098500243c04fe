//! Newtype identifiers.
//!
//! Identifiers arrive from different call sites as either numbers or strings.
//! Every id is normalized to its string form at construction, so a numeric
//! `7` and a string `"7"` compare equal everywhere downstream. Store lookups
//! only ever compare `ProductId`s, never raw primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate string-normalized newtype ids.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier, normalized to string form.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create an id from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(n.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
