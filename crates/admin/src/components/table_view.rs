//! Render-ready view state for the data tables.
//!
//! Handlers turn a [`DataTableConfig`] plus the current query parameters
//! into a [`TableView`]: every link, selected option, and count the table
//! template needs, precomputed so the template only prints. The sort links
//! are built with the engine's own toggle rule, so a rendered header link
//! always requests exactly the sort the engine would apply next.

use std::collections::HashMap;

use lexiops_core::listview::{ListOutput, SortDirection, SortSpec};

use super::data_table::DataTableConfig;

/// One option of a facet select.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub selected: bool,
}

/// One facet select with its current selection.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub key: String,
    pub label: String,
    pub options: Vec<OptionView>,
}

/// One column header, with its sort link when the column is sortable.
#[derive(Debug, Clone)]
pub struct ColumnView {
    pub label: String,
    pub sort_url: Option<String>,
    /// "▲" / "▼" when this column is the active sort, empty otherwise.
    pub indicator: &'static str,
}

/// Everything the data-table template needs to render controls and paging.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Path the search/filter form submits to and links point at.
    pub action: String,
    pub search_value: String,
    pub search_placeholder: String,
    pub empty_title: String,
    pub filters: Vec<FilterView>,
    pub columns: Vec<ColumnView>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

/// Build the table view for one rendered page.
///
/// `preserve` is the already-encoded `&key=value...` tail carrying the
/// active search and facet parameters into sort and paging links (see
/// [`crate::routes::params::join_params`]).
#[must_use]
pub fn build_table_view<R>(
    config: &DataTableConfig,
    base_path: &str,
    search_value: Option<&str>,
    filter_values: &HashMap<String, String>,
    sort: Option<&SortSpec>,
    output: &ListOutput<'_, R>,
    preserve: &str,
) -> TableView {
    let filters = config
        .filters
        .iter()
        .map(|filter| {
            let selected = filter_values
                .get(&filter.key)
                .map_or("All", String::as_str);
            FilterView {
                key: filter.key.clone(),
                label: filter.label.clone(),
                options: filter
                    .options
                    .iter()
                    .map(|option| OptionView {
                        value: option.clone(),
                        selected: option == selected,
                    })
                    .collect(),
            }
        })
        .collect();

    let columns = config
        .columns
        .iter()
        .map(|column| {
            let sort_url = column.sortable.then(|| {
                let next = SortSpec::toggled(sort, &column.key);
                format!(
                    "{base_path}?sort={}&dir={}{preserve}",
                    next.key,
                    next.direction.as_param()
                )
            });
            let indicator = match sort {
                Some(spec) if spec.key == column.key => match spec.direction {
                    SortDirection::Ascending => "▲",
                    SortDirection::Descending => "▼",
                },
                _ => "",
            };
            ColumnView {
                label: column.label.clone(),
                sort_url,
                indicator,
            }
        })
        .collect();

    let sort_part = sort.map_or_else(String::new, |spec| {
        format!("&sort={}&dir={}", spec.key, spec.direction.as_param())
    });
    let page_url = |page: usize| format!("{base_path}?page={page}{sort_part}{preserve}");

    TableView {
        action: base_path.to_string(),
        search_value: search_value.unwrap_or_default().to_string(),
        search_placeholder: config.search_placeholder.clone(),
        empty_title: config.empty_title.clone(),
        filters,
        columns,
        page: output.page,
        total_pages: output.total_pages,
        total: output.total,
        prev_url: output.has_prev().then(|| page_url(output.page - 1)),
        next_url: output.has_next().then(|| page_url(output.page + 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::data_table::users_table_config;

    fn output(page: usize, total_pages: usize, total: usize) -> ListOutput<'static, ()> {
        ListOutput {
            rows: vec![],
            total,
            page,
            total_pages,
        }
    }

    #[test]
    fn test_sort_link_toggles_active_column() {
        let config = users_table_config();
        let sort = SortSpec::ascending("name");
        let view = build_table_view(
            &config,
            "/users",
            None,
            &HashMap::new(),
            Some(&sort),
            &output(1, 1, 5),
            "",
        );

        let name_col = &view.columns[0];
        assert_eq!(name_col.indicator, "▲");
        assert_eq!(
            name_col.sort_url.as_deref(),
            Some("/users?sort=name&dir=desc")
        );

        // Inactive sortable column links to an ascending sort.
        let joined_col = &view.columns[3];
        assert_eq!(joined_col.indicator, "");
        assert_eq!(
            joined_col.sort_url.as_deref(),
            Some("/users?sort=joined&dir=asc")
        );

        // Non-sortable columns get no link.
        assert!(view.columns[1].sort_url.is_none());
    }

    #[test]
    fn test_paging_links_carry_sort_and_preserved_params() {
        let config = users_table_config();
        let sort = SortSpec::descending("joined");
        let view = build_table_view(
            &config,
            "/users",
            Some("jane"),
            &HashMap::new(),
            Some(&sort),
            &output(2, 3, 25),
            "&q=jane",
        );

        assert_eq!(
            view.prev_url.as_deref(),
            Some("/users?page=1&sort=joined&dir=desc&q=jane")
        );
        assert_eq!(
            view.next_url.as_deref(),
            Some("/users?page=3&sort=joined&dir=desc&q=jane")
        );
        assert_eq!(view.search_value, "jane");
    }

    #[test]
    fn test_boundary_pages_drop_links() {
        let config = users_table_config();
        let view = build_table_view(
            &config,
            "/users",
            None,
            &HashMap::new(),
            None,
            &output(1, 1, 3),
            "",
        );
        assert!(view.prev_url.is_none());
        assert!(view.next_url.is_none());
    }

    #[test]
    fn test_filter_selection_marks_active_option() {
        let config = users_table_config();
        let mut values = HashMap::new();
        values.insert("role".to_string(), "Moderator".to_string());

        let view = build_table_view(
            &config,
            "/users",
            None,
            &values,
            None,
            &output(1, 1, 3),
            "",
        );

        let role_filter = view
            .filters
            .iter()
            .find(|f| f.key == "role")
            .expect("role filter");
        let selected: Vec<_> = role_filter
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["Moderator"]);

        // Unset facets default to "All".
        let status_filter = view
            .filters
            .iter()
            .find(|f| f.key == "status")
            .expect("status filter");
        assert!(status_filter.options[0].selected);
    }
}
