//! ULID-backed identifiers.
//!
//! Every widget session and every message handed to the display gets an ID,
//! so transcripts and log lines can be correlated. IDs display with a short
//! prefix (`wgt_…`, `msg_…`) and parse with or without it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates a fresh ID.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
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
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);
                Ulid::from_str(raw).map(Self).map_err(|e| ParseIdError {
                    id_type: stringify!($name),
                    reason: e.to_string(),
                })
            }
        }

        impl From<Ulid> for $name {
            fn from(ulid: Ulid) -> Self {
                Self(ulid)
            }
        }
    };
}

define_id!(
    /// Identifies one widget session: a page load with its own conversation.
    WidgetSessionId,
    "wgt"
);

define_id!(
    /// Identifies a single message shown in the chat panel.
    MessageId,
    "msg"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_uses_widget_prefix() {
        assert!(WidgetSessionId::new().to_string().starts_with("wgt_"));
    }

    #[test]
    fn message_id_parses_its_own_display() {
        let id = MessageId::new();
        let parsed: MessageId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn bare_ulid_parses() {
        let ulid = Ulid::new();
        let id: WidgetSessionId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn garbage_reports_the_id_type() {
        let err = "msg_nope".parse::<MessageId>().unwrap_err();
        assert_eq!(err.id_type, "MessageId");
        assert!(err.to_string().starts_with("failed to parse MessageId"));
    }

    #[test]
    fn later_ids_sort_after_earlier_ones() {
        let first = MessageId::from(Ulid::from_parts(1_000, 7));
        let second = MessageId::from(Ulid::from_parts(2_000, 3));
        assert!(first < second);
    }

    #[test]
    fn serializes_as_bare_ulid() {
        let id = MessageId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));
        let parsed: MessageId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
