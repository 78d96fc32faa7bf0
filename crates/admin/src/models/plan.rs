//! Subscription plan records.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use lexiops_core::listview::{ListRecord, SortValue};
use lexiops_core::{PlanId, PlanStatus, Price};

use crate::store::Identified;

/// A subscription plan, as shown on the plans page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Unique, stable plan ID.
    pub id: PlanId,
    /// Plan name.
    pub name: String,
    /// Maximum documents per workspace.
    pub max_documents: u32,
    /// Maximum storage per workspace, in whole megabytes.
    pub max_storage_mb: u32,
    /// Maximum members per workspace.
    pub max_members: u32,
    /// Monthly price.
    pub price: Price,
    /// Plan status.
    pub status: PlanStatus,
}

impl Identified for Plan {
    type Id = PlanId;

    fn id(&self) -> PlanId {
        self.id
    }
}

impl ListRecord for Plan {
    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str())]
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        (key == "status").then(|| Cow::Borrowed(self.status.label()))
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "name" => Some(SortValue::Text(&self.name)),
            "documents" => Some(SortValue::Number(i64::from(self.max_documents))),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexiops_core::listview::FilterSet;

    #[test]
    fn test_plan_search_by_name() {
        let plan = Plan {
            id: PlanId::new(2),
            name: "Pro".to_string(),
            max_documents: 100,
            max_storage_mb: 2048,
            max_members: 5,
            price: Price::from_dollars(19),
            status: PlanStatus::Active,
        };
        assert!(FilterSet::new().query("pro").matches(&plan));
        assert!(!FilterSet::new().query("enterprise").matches(&plan));
    }
}
