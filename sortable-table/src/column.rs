//! Column descriptors.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tuidom::{Element, Size, TextAlign};

use crate::value::{Record, Value};

/// Caller-supplied row comparison for [`SortKind::Custom`] columns.
/// Must describe ascending order; descending is derived by reversing it.
pub type Comparator = Arc<dyn Fn(&Record, &Record) -> Ordering + Send + Sync>;

/// Caller-supplied cell renderer. Receives the row's value for the column
/// (`Value::Null` when the field is missing).
pub type CellTemplate = Arc<dyn Fn(&Value) -> Element + Send + Sync>;

/// How a column's values are compared when sorting.
#[derive(Clone, Default)]
pub enum SortKind {
    /// Numeric comparison of the field values.
    #[default]
    Number,
    /// Locale-aware string comparison, see [`collate`](crate::collate).
    String,
    /// Comparison of whole records by a caller-supplied function.
    Custom(Comparator),
}

impl fmt::Debug for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::String => write!(f, "String"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

/// Static configuration of one table column.
///
/// # Examples
///
/// ```
/// use sortable_table::Column;
/// use tuidom::Size;
///
/// let columns = vec![
///     Column::new("title", "Name").sortable().string(),
///     Column::new("price", "Price").sortable().width(Size::Fixed(10)),
///     Column::new("images", "Image"),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].sortable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field name in each record, also the column identifier.
    pub id: String,
    /// Header text.
    pub title: String,
    pub sortable: bool,
    pub sort_kind: SortKind,
    pub template: Option<CellTemplate>,
    /// Width of the column's cells. Fill columns share the leftover space.
    pub width: Size,
    pub align: TextAlign,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_kind: SortKind::default(),
            template: None,
            width: Size::Fill,
            align: TextAlign::Left,
        }
    }

    /// Make the column respond to header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Compare values numerically (the default).
    pub fn number(mut self) -> Self {
        self.sort_kind = SortKind::Number;
        self
    }

    /// Compare values as text.
    pub fn string(mut self) -> Self {
        self.sort_kind = SortKind::String;
        self
    }

    /// Compare whole records with `compare`.
    pub fn custom<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Record, &Record) -> Ordering + Send + Sync + 'static,
    {
        self.sort_kind = SortKind::Custom(Arc::new(compare));
        self
    }

    /// Render this column's cells with `template` instead of plain text.
    pub fn template<F>(mut self, template: F) -> Self
    where
        F: Fn(&Value) -> Element + Send + Sync + 'static,
    {
        self.template = Some(Arc::new(template));
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("sort_kind", &self.sort_kind)
            .field("template", &self.template.as_ref().map(|_| "..."))
            .field("width", &self.width)
            .field("align", &self.align)
            .finish()
    }
}
