//! Shared query-parameter handling for the list pages.

use lexiops_core::listview::{SortDirection, SortSpec};

use crate::components::data_table::DataTableConfig;

/// Build the active sort spec from `sort`/`dir` query parameters.
///
/// Keys that don't name a sortable column of the table are ignored, so a
/// hand-edited URL cannot select an unknown sort key.
#[must_use]
pub fn sort_from_params(
    config: &DataTableConfig,
    sort: Option<&str>,
    dir: Option<&str>,
) -> Option<SortSpec> {
    let key = sort.filter(|k| config.is_sortable(k))?;
    let direction = dir.map_or(SortDirection::Ascending, SortDirection::from_param);
    Some(SortSpec {
        key: key.to_string(),
        direction,
    })
}

/// Append `key=value` to the preserved parameter list.
///
/// Empty values and the "All" facet are skipped: they are no-ops, and
/// carrying them around would clutter every pagination link.
pub fn push_param(params: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(v) = value
        && !v.is_empty()
        && v != "All"
    {
        params.push(format!("{key}={}", urlencoding::encode(v)));
    }
}

/// Join preserved parameters for embedding after other query parameters.
///
/// Sort, direction, and page are intentionally excluded; the sort-header
/// and pagination links set those explicitly.
#[must_use]
pub fn join_params(params: Vec<String>) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("&{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::data_table::users_table_config;

    #[test]
    fn test_sort_from_params_validates_key() {
        let config = users_table_config();
        let spec = sort_from_params(&config, Some("name"), Some("desc")).expect("sortable");
        assert_eq!(spec.key, "name");
        assert_eq!(spec.direction, SortDirection::Descending);

        // "role" is a column but not sortable; "bogus" is not a column.
        assert!(sort_from_params(&config, Some("role"), None).is_none());
        assert!(sort_from_params(&config, Some("bogus"), Some("asc")).is_none());
        assert!(sort_from_params(&config, None, Some("asc")).is_none());
    }

    #[test]
    fn test_push_param_skips_noops() {
        let mut params = Vec::new();
        push_param(&mut params, "q", Some("jane smith"));
        push_param(&mut params, "role", Some("All"));
        push_param(&mut params, "status", Some(""));
        push_param(&mut params, "kind", None);
        assert_eq!(params, vec!["q=jane%20smith".to_string()]);
        assert_eq!(join_params(params), "&q=jane%20smith");
        assert_eq!(join_params(Vec::new()), "");
    }
}
