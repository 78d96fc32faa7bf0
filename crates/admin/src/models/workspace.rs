//! Workspace records.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lexiops_core::listview::{ListRecord, SortValue};
use lexiops_core::{ByteSize, WorkspaceId, WorkspaceStatus};

use crate::store::Identified;

/// A tenant workspace, as shown on the workspaces page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    /// Unique, stable workspace ID.
    pub id: WorkspaceId,
    /// Workspace name.
    pub name: String,
    /// Member count.
    pub members: u32,
    /// Storage currently used.
    pub storage_used: ByteSize,
    /// Storage limit in whole gigabytes.
    pub storage_limit_gb: u32,
    /// Workspace status.
    pub status: WorkspaceStatus,
    /// Calendar date of the last activity.
    pub last_activity: NaiveDate,
}

impl Workspace {
    /// Percentage of the storage limit in use, saturating at 100.
    #[must_use]
    pub fn storage_percent(&self) -> u32 {
        let limit = ByteSize::from_gb(u64::from(self.storage_limit_gb)).as_u64();
        if limit == 0 {
            return 100;
        }
        let percent = self.storage_used.as_u64().saturating_mul(100) / limit;
        u32::try_from(percent).unwrap_or(100).min(100)
    }
}

impl Identified for Workspace {
    type Id = WorkspaceId;

    fn id(&self) -> WorkspaceId {
        self.id
    }
}

impl ListRecord for Workspace {
    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str())]
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        (key == "status").then(|| Cow::Borrowed(self.status.label()))
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "name" => Some(SortValue::Text(&self.name)),
            "members" => Some(SortValue::Number(i64::from(self.members))),
            "storage" => Some(SortValue::Number(
                i64::try_from(self.storage_used.as_u64()).unwrap_or(i64::MAX),
            )),
            "activity" => Some(SortValue::Date(self.last_activity)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn workspace(used_gb: u64, limit_gb: u32) -> Workspace {
        Workspace {
            id: WorkspaceId::new(1),
            name: "Design Team".to_string(),
            members: 12,
            storage_used: ByteSize::from_gb(used_gb),
            storage_limit_gb: limit_gb,
            status: WorkspaceStatus::Active,
            last_activity: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_storage_percent() {
        assert_eq!(workspace(45, 100).storage_percent(), 45);
        assert_eq!(workspace(120, 100).storage_percent(), 100);
        assert_eq!(workspace(0, 100).storage_percent(), 0);
    }

    #[test]
    fn test_sort_values() {
        let ws = workspace(45, 100);
        assert_eq!(ws.sort_value("members"), Some(SortValue::Number(12)));
        assert_eq!(
            ws.sort_value("storage"),
            Some(SortValue::Number(45_000_000_000))
        );
    }
}
