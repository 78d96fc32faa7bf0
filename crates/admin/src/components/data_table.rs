//! Data table component types.
//!
//! These types define the configuration for the reusable data tables on the
//! admin list pages. Each page builds one [`DataTableConfig`] naming its
//! columns, facet filters, and page size; the handler feeds the same keys
//! into the list-view engine so the rendered controls and the filtering
//! logic cannot drift apart.

use serde::{Deserialize, Serialize};

use lexiops_core::{FileKind, FileStatus, UserRole, UserStatus, WorkspaceStatus};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column; sortable columns use it as the sort key.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Filter definition for a data table facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Available options, "All" first.
    pub options: Vec<String>,
}

impl TableFilter {
    /// Create a select filter with an "All" no-op option prepended.
    #[must_use]
    pub fn select(key: &str, label: &str, options: &[&str]) -> Self {
        let mut all = vec!["All".to_string()];
        all.extend(options.iter().map(ToString::to_string));
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: all,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Facet filter definitions.
    pub filters: Vec<TableFilter>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for the empty state.
    pub empty_title: String,
    /// Fixed page size.
    pub page_size: usize,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str, page_size: usize) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            page_size,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a facet filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set the empty-state title.
    #[must_use]
    pub fn empty_title(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }

    /// Whether a key names a sortable column.
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.sortable && c.key == key)
    }
}

fn labels(values: &[impl std::fmt::Display]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Build the users table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    let roles = labels(UserRole::VALUES);
    let statuses = labels(UserStatus::VALUES);

    DataTableConfig::new("users", 10)
        .column(TableColumn::sortable("name", "User Info"))
        .column(TableColumn::new("role", "Role"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::sortable("joined", "Joined Date"))
        .filter(TableFilter::select(
            "status",
            "Status",
            &statuses.iter().map(String::as_str).collect::<Vec<_>>(),
        ))
        .filter(TableFilter::select(
            "role",
            "Role",
            &roles.iter().map(String::as_str).collect::<Vec<_>>(),
        ))
        .search_placeholder("Search by name or email...")
        .empty_title("No users found")
}

/// Build the files table configuration.
#[must_use]
pub fn files_table_config() -> DataTableConfig {
    let kinds = labels(FileKind::VALUES);
    let statuses = labels(FileStatus::VALUES);

    DataTableConfig::new("files", 8)
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::new("kind", "Type"))
        .column(TableColumn::sortable("size", "Size"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::sortable("modified", "Modified"))
        .filter(TableFilter::select(
            "kind",
            "Type",
            &kinds.iter().map(String::as_str).collect::<Vec<_>>(),
        ))
        .filter(TableFilter::select(
            "status",
            "Status",
            &statuses.iter().map(String::as_str).collect::<Vec<_>>(),
        ))
        .filter(TableFilter::select(
            "size_bucket",
            "Size",
            &["Small", "Medium", "Large"],
        ))
        .search_placeholder("Search files by name...")
        .empty_title("No files found")
}

/// Build the workspaces table configuration.
#[must_use]
pub fn workspaces_table_config() -> DataTableConfig {
    let statuses = labels(WorkspaceStatus::VALUES);

    DataTableConfig::new("workspaces", 8)
        .column(TableColumn::sortable("name", "Workspace"))
        .column(TableColumn::sortable("members", "Members"))
        .column(TableColumn::sortable("storage", "Storage"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::sortable("activity", "Last Activity"))
        .filter(TableFilter::select(
            "status",
            "Status",
            &statuses.iter().map(String::as_str).collect::<Vec<_>>(),
        ))
        .search_placeholder("Search workspaces by name...")
        .empty_title("No workspaces found")
}
