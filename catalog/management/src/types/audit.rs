//! Audit log types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One immutable audit entry.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    /// Kind of change, e.g. `create`.
    pub change_type: Option<String>,
    /// Kind of the changed resource.
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    /// Email of the user (or delegate) who made the change.
    pub who_delegate_email: Option<String>,
    pub message: Option<String>,
}

/// An audit log.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub list: Option<Vec<AuditRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_timestamps() {
        let log: AuditLog = serde_json::from_value(json!({
            "list": [{"id": "a1", "created": "2019-01-01T12:00:00Z", "change_type": "create"}]
        }))
        .unwrap();

        let record = &log.list.unwrap()[0];
        assert_eq!(record.change_type.as_deref(), Some("create"));
        assert_eq!(
            record.created.unwrap().to_rfc3339(),
            "2019-01-01T12:00:00+00:00"
        );
    }
}
