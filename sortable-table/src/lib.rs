//! A sortable data table widget for `tuidom` documents.
//!
//! The table renders a header row with one cell per [`Column`] and a body
//! with one link row per [`Record`]. Clicking a sortable header cell toggles
//! that column's direction and re-renders the body; the header element and
//! its listener stay in place.
//!
//! # Example
//!
//! ```
//! use sortable_table::{Column, Record, SortableTable, SortOrder};
//! use tuidom::{dispatch, Document, Event};
//!
//! let mut doc = Document::new();
//! let columns = vec![Column::new("title", "Name").sortable().string()];
//! let data = vec![
//!     Record::new().set("id", 1).set("title", "Banana"),
//!     Record::new().set("id", 2).set("title", "Apple"),
//! ];
//!
//! let mut table = SortableTable::new(&mut doc, columns, data).unwrap();
//! assert_eq!(table.sort_state().order, SortOrder::Asc);
//!
//! let cell = table.header_cell_id("title").unwrap();
//! dispatch(&mut doc, &Event::click(cell), &mut [&mut table]);
//! assert_eq!(table.sort_state().order, SortOrder::Desc);
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod markup;
pub mod sort;
pub mod table;
pub mod value;

pub use column::{CellTemplate, Column, Comparator, SortKind};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use sort::{SortOrder, SortState, collate};
pub use table::SortableTable;
pub use value::{Record, Value};
