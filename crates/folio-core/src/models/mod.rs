pub mod pokemon;
pub mod project;

use chrono::{DateTime, Utc};

/// Current time truncated to whole seconds.
///
/// Timestamps are persisted as unix seconds, so records carry the same
/// precision in memory as they do after a round trip through storage.
pub(crate) fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap_or_else(Utc::now)
}
