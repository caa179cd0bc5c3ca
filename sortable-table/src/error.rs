//! Error types

use tuidom::DomError;

/// Errors returned by programmatic table operations.
///
/// Click handling never produces these; a click that cannot be resolved to a
/// sortable column is ignored.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    /// No column with this identifier was configured.
    #[error("Column '{field}' is not configured")]
    UnknownColumn { field: String },

    /// The column exists but is not marked sortable.
    #[error("Column '{field}' is not sortable")]
    NotSortable { field: String },

    /// The table was torn down with `destroy`.
    #[error("Table has been destroyed")]
    Destroyed,

    #[error(transparent)]
    Dom(#[from] DomError),
}

impl TableError {
    pub fn unknown_column(field: impl Into<String>) -> Self {
        Self::UnknownColumn {
            field: field.into(),
        }
    }

    pub fn not_sortable(field: impl Into<String>) -> Self {
        Self::NotSortable {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
