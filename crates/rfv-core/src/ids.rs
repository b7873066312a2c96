//! Branded identifiers for stored records.
//!
//! Every identifier is a prefixed UUID v7 (`sess_0190…`), so ids sort by
//! creation time and a stray id pasted into the wrong endpoint is easy to
//! spot in logs. Ids coming back from clients are accepted verbatim via
//! [`from_raw`](SessionId::from_raw); an unknown id is simply not found.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! branded_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix shared by every freshly generated id of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new, time-ordered id.
            pub fn new() -> Self {
                Self(format!("{}_{}", $prefix, Uuid::now_v7()))
            }

            /// Wrap an existing id string without validation.
            pub fn from_raw(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Borrow the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id, returning the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
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

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

branded_id!(
    /// Identifier of a scheduled game session.
    SessionId,
    "sess"
);
branded_id!(
    /// Identifier of one session attribute row.
    AttributeId,
    "attr"
);
branded_id!(
    /// Identifier of a recording (published document reference).
    RecordingId,
    "rec"
);
