//! Stored file records.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lexiops_core::listview::{ListRecord, SortValue};
use lexiops_core::{ByteSize, FileId, FileKind, FileStatus};

use crate::store::Identified;

/// A stored file, as shown on the files page.
///
/// The display size is derived from [`ByteSize`], so the rendered string
/// and the sort key always agree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Unique, stable file ID.
    pub id: FileId,
    /// File name including extension.
    pub name: String,
    /// File kind.
    pub kind: FileKind,
    /// Size in bytes.
    pub size: ByteSize,
    /// Ingestion status.
    pub status: FileStatus,
    /// Calendar date of the last modification.
    pub modified: NaiveDate,
}

impl Identified for FileRecord {
    type Id = FileId;

    fn id(&self) -> FileId {
        self.id
    }
}

impl ListRecord for FileRecord {
    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str())]
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "kind" => Some(Cow::Borrowed(self.kind.label())),
            "status" => Some(Cow::Borrowed(self.status.label())),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "name" => Some(SortValue::Text(&self.name)),
            "modified" => Some(SortValue::Date(self.modified)),
            "size" => Some(SortValue::Number(
                i64::try_from(self.size.as_u64()).unwrap_or(i64::MAX),
            )),
            _ => None,
        }
    }
}
