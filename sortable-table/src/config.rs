//! Table configuration.

use serde::Deserialize;
use serde::Serialize;

use crate::sort::{SortOrder, SortState};

/// Per-table configuration.
///
/// Every field has a default, so a config can be built with the builder
/// methods or deserialized from a partial JSON object.
///
/// ```
/// use sortable_table::{SortOrder, TableConfig};
///
/// let config: TableConfig = serde_json::from_str(r#"{"link_prefix": "/items/"}"#).unwrap();
/// assert_eq!(config.link_prefix, "/items/");
/// assert_eq!(config.default_sort.field, "title");
///
/// let config = TableConfig::default().default_sort("price", SortOrder::Desc);
/// assert_eq!(config.default_sort.order, SortOrder::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column and direction the table starts with.
    pub default_sort: SortState,

    /// When true the rows are sorted by `default_sort` during construction.
    /// When false they are shown in insertion order until the first sort,
    /// while the header still shows the default indicator.
    pub sort_on_mount: bool,

    /// Prefix of each row's link target; the row key's value is appended.
    pub link_prefix: String,

    /// Record field used to build row links.
    pub row_key: String,

    /// Id of the element the table is appended to (None = document body).
    pub container: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_sort: SortState::default(),
            sort_on_mount: true,
            link_prefix: "/products/".to_string(),
            row_key: "id".to_string(),
            container: None,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial sort column and direction.
    pub fn default_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.default_sort = SortState::new(field, order);
        self
    }

    pub fn sort_on_mount(mut self, sort: bool) -> Self {
        self.sort_on_mount = sort;
        self
    }

    pub fn link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    pub fn row_key(mut self, key: impl Into<String>) -> Self {
        self.row_key = key.into();
        self
    }

    /// Mount into the element with `id` instead of the document body.
    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container = Some(id.into());
        self
    }
}
