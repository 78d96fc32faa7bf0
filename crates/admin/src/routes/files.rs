//! File management routes: list with range filters, delete.

use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use lexiops_core::listview::{self, FilterSet, Pager, RangeValue};
use lexiops_core::{ByteSize, FileId, FileKind, FileStatus};

use crate::{
    components::{data_table::files_table_config, table_view::TableView, table_view},
    filters,
    middleware::auth::RequireAdminAuth,
    models::FileRecord,
    routes::{dashboard::AdminUserView, params},
    state::AppState,
};

/// Size buckets for the files page, in bytes.
///
/// Small < 1 MB <= Medium < 10 MB <= Large.
const MEDIUM_MIN_BYTES: i64 = 1_000_000;
const LARGE_MIN_BYTES: i64 = 10_000_000;

/// Query parameters for the files list.
#[derive(Debug, Default, Deserialize)]
pub struct FilesQuery {
    /// Free-text search over the file name.
    pub q: Option<String>,
    /// Kind facet.
    pub kind: Option<String>,
    /// Status facet.
    pub status: Option<String>,
    /// Size bucket (Small/Medium/Large).
    pub size_bucket: Option<String>,
    /// Modified-date lower bound (`YYYY-MM-DD`).
    pub from: Option<String>,
    /// Modified-date upper bound (`YYYY-MM-DD`).
    pub to: Option<String>,
    /// Sort column key.
    pub sort: Option<String>,
    /// Sort direction (asc/desc).
    pub dir: Option<String>,
    /// Requested page (1-based).
    pub page: Option<usize>,
    /// Error code carried through a redirect.
    pub error: Option<String>,
}

/// File row for the list table.
#[derive(Debug, Clone)]
pub struct FileRowView {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub size: String,
    pub status: String,
    pub status_class: &'static str,
    pub modified: String,
}

impl From<&FileRecord> for FileRowView {
    fn from(file: &FileRecord) -> Self {
        Self {
            id: file.id.as_i32(),
            name: file.name.clone(),
            kind: file.kind.label().to_string(),
            size: file.size.display(),
            status: file.status.label().to_string(),
            status_class: match file.status {
                FileStatus::Stored => "badge-active",
                FileStatus::Processing => "badge-pending",
                FileStatus::Failed => "badge-failed",
            },
            modified: file.modified.format("%b %-d, %Y").to_string(),
        }
    }
}

/// One row of the storage side panel.
#[derive(Debug, Clone)]
pub struct StorageRow {
    pub kind: String,
    pub count: usize,
    pub size: String,
    pub percent: u32,
}

/// Files list template.
#[derive(Template)]
#[template(path = "files/index.html")]
pub struct FilesIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub table: TableView,
    pub rows: Vec<FileRowView>,
    pub storage_rows: Vec<StorageRow>,
    pub storage_total: String,
    pub from_value: String,
    pub to_value: String,
    pub error: Option<String>,
}

/// Files list page handler.
///
/// GET /files
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<FilesQuery>,
) -> Html<String> {
    let config = files_table_config();
    let records = state.files().snapshot();

    let from = parse_date(query.from.as_deref());
    let to = parse_date(query.to.as_deref());

    let mut filter = FilterSet::new()
        .query(query.q.as_deref().unwrap_or(""))
        .facet("kind", query.kind.as_deref().unwrap_or("All"))
        .facet("status", query.status.as_deref().unwrap_or("All"))
        .range(
            "modified",
            from.map(RangeValue::Date),
            to.map(RangeValue::Date),
        );
    if let Some((min, max)) = size_bucket_range(query.size_bucket.as_deref()) {
        filter = filter.range("size", min, max);
    }

    let sort = params::sort_from_params(&config, query.sort.as_deref(), query.dir.as_deref());

    let mut pager = Pager::new(config.page_size);
    let output = listview::run(
        &records,
        &filter,
        sort.as_ref(),
        &mut pager,
        query.page.unwrap_or(1),
    );

    let rows = output.rows.iter().map(|f| FileRowView::from(*f)).collect();

    let mut preserved = Vec::new();
    params::push_param(&mut preserved, "q", query.q.as_deref());
    params::push_param(&mut preserved, "kind", query.kind.as_deref());
    params::push_param(&mut preserved, "status", query.status.as_deref());
    params::push_param(&mut preserved, "size_bucket", query.size_bucket.as_deref());
    params::push_param(&mut preserved, "from", query.from.as_deref());
    params::push_param(&mut preserved, "to", query.to.as_deref());
    let preserve = params::join_params(preserved);

    let mut filter_values = HashMap::new();
    for (key, value) in [
        ("kind", &query.kind),
        ("status", &query.status),
        ("size_bucket", &query.size_bucket),
    ] {
        if let Some(value) = value {
            filter_values.insert(key.to_string(), value.clone());
        }
    }

    let table = table_view::build_table_view(
        &config,
        "/files",
        query.q.as_deref(),
        &filter_values,
        sort.as_ref(),
        &output,
        &preserve,
    );

    let (storage_rows, storage_total) = storage_panel(&records);

    let template = FilesIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/files".to_string(),
        table,
        rows,
        storage_rows,
        storage_total,
        from_value: query.from.unwrap_or_default(),
        to_value: query.to.unwrap_or_default(),
        error: query.error.map(|code| error_message(&code)),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Delete a file.
///
/// POST /files/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    match state.files().remove(FileId::new(id)) {
        Ok(file) => {
            tracing::info!(admin = %admin.email, file = %file.name, "Deleted file");
            Redirect::to("/files").into_response()
        }
        Err(e) => {
            tracing::warn!(id, "Failed to delete file: {e}");
            Redirect::to("/files?error=not_found").into_response()
        }
    }
}

/// Parse a `YYYY-MM-DD` query value; invalid input is ignored.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())?.parse().ok()
}

/// The byte range for a size-bucket selection.
#[allow(clippy::type_complexity)]
fn size_bucket_range(bucket: Option<&str>) -> Option<(Option<RangeValue>, Option<RangeValue>)> {
    match bucket {
        Some("Small") => Some((None, Some(RangeValue::Number(MEDIUM_MIN_BYTES - 1)))),
        Some("Medium") => Some((
            Some(RangeValue::Number(MEDIUM_MIN_BYTES)),
            Some(RangeValue::Number(LARGE_MIN_BYTES - 1)),
        )),
        Some("Large") => Some((Some(RangeValue::Number(LARGE_MIN_BYTES)), None)),
        _ => None,
    }
}

/// Per-kind storage rows and the overall total for the side panel.
fn storage_panel(files: &[FileRecord]) -> (Vec<StorageRow>, String) {
    let total: u64 = files.iter().map(|f| f.size.as_u64()).sum();

    let mut rows: Vec<StorageRow> = FileKind::VALUES
        .iter()
        .filter_map(|kind| {
            let of_kind: Vec<_> = files.iter().filter(|f| f.kind == *kind).collect();
            if of_kind.is_empty() {
                return None;
            }
            let bytes: u64 = of_kind.iter().map(|f| f.size.as_u64()).sum();
            Some(StorageRow {
                kind: kind.label().to_string(),
                count: of_kind.len(),
                size: ByteSize::new(bytes).display(),
                percent: if total == 0 {
                    0
                } else {
                    u32::try_from(bytes * 100 / total).unwrap_or(0)
                },
            })
        })
        .collect();

    rows.sort_by(|a, b| b.percent.cmp(&a.percent));
    (rows, ByteSize::new(total).display())
}

/// Map an error code from the redirect query to display text.
fn error_message(code: &str) -> String {
    match code {
        "not_found" => "That file no longer exists.".to_string(),
        _ => "Invalid input. Check the filters and try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_size_bucket_ranges() {
        let (min, max) = size_bucket_range(Some("Medium")).expect("medium bucket");
        assert_eq!(min, Some(RangeValue::Number(1_000_000)));
        assert_eq!(max, Some(RangeValue::Number(9_999_999)));

        let (min, max) = size_bucket_range(Some("Large")).expect("large bucket");
        assert_eq!(min, Some(RangeValue::Number(10_000_000)));
        assert_eq!(max, None);

        assert!(size_bucket_range(Some("All")).is_none());
        assert!(size_bucket_range(None).is_none());
    }

    #[test]
    fn test_bucket_boundaries_partition_the_collection() {
        let files = seed::files();
        let count_for = |bucket: &str| {
            let (min, max) = size_bucket_range(Some(bucket)).expect("bucket");
            FilterSet::new().range("size", min, max).apply(&files).len()
        };

        let total = count_for("Small") + count_for("Medium") + count_for("Large");
        assert_eq!(total, files.len());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-03-01")),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(parse_date(Some("03/01/2024")).is_none());
        assert!(parse_date(Some("")).is_none());
        assert!(parse_date(None).is_none());
    }

    #[test]
    fn test_storage_panel_totals() {
        let files = seed::files();
        let (rows, total) = storage_panel(&files);
        assert!(!rows.is_empty());
        assert_eq!(total, ByteSize::new(files.iter().map(|f| f.size.as_u64()).sum()).display());
        let percent_sum: u32 = rows.iter().map(|r| r.percent).sum();
        assert!(percent_sum <= 100);
    }
}
