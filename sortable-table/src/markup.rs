//! Element construction for the table.
//!
//! Shape of the generated tree:
//!
//! ```text
//! col   .sortable-table                          id: <table>
//! ├─ row .sortable-table__header  data-element=header   id: <table>-header
//! │  └─ row .sortable-table__cell  data-id data-sortable data-order
//! │     │                                        id: <table>-col-<index>
//! │     ├─ text  title
//! │     └─ text .sortable-table__sort-arrow              id: <cell>-arrow
//! └─ col .sortable-table__body    data-element=body     id: <table>-body
//!    └─ link .sortable-table__row  href=<prefix><row key>
//!       └─ text|template .sortable-table__cell
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use tuidom::{Element, Rgb, Size, Style};

use crate::column::Column;
use crate::config::TableConfig;
use crate::sort::SortState;
use crate::value::{Record, Value};

pub const TABLE_CLASS: &str = "sortable-table";
pub const HEADER_CLASS: &str = "sortable-table__header";
pub const BODY_CLASS: &str = "sortable-table__body";
pub const ROW_CLASS: &str = "sortable-table__row";
pub const CELL_CLASS: &str = "sortable-table__cell";
pub const ARROW_CLASS: &str = "sortable-table__sort-arrow";

/// `data-*` keys used on generated elements.
pub const DATA_ELEMENT: &str = "element";
pub const DATA_ID: &str = "id";
pub const DATA_SORTABLE: &str = "sortable";
pub const DATA_ORDER: &str = "order";

static NEXT_TABLE: AtomicU64 = AtomicU64::new(0);

/// Fresh, document-unique id for a table root.
pub fn next_table_id() -> String {
    let n = NEXT_TABLE.fetch_add(1, Ordering::Relaxed);
    format!("sortable-table-{n}")
}

pub fn header_id(table_id: &str) -> String {
    format!("{table_id}-header")
}

pub fn body_id(table_id: &str) -> String {
    format!("{table_id}-body")
}

/// Header cells are keyed by column position; column ids are caller strings
/// and may not be safe to splice into element ids.
pub fn header_cell_id(table_id: &str, index: usize) -> String {
    format!("{table_id}-col-{index}")
}

pub fn arrow_id(table_id: &str, index: usize) -> String {
    format!("{}-arrow", header_cell_id(table_id, index))
}

/// True for a header cell carrying a column identifier.
pub fn is_column_cell(el: &Element) -> bool {
    el.has_class(CELL_CLASS) && el.has_data(DATA_ID)
}

/// The complete table: header plus body with `rows` in the given order.
pub fn render_table(
    table_id: &str,
    columns: &[Column],
    rows: &[Record],
    state: &SortState,
    config: &TableConfig,
) -> Element {
    Element::col()
        .id(table_id)
        .class(TABLE_CLASS)
        .width(Size::Fill)
        .child(render_header(table_id, columns, state))
        .child(
            Element::col()
                .id(body_id(table_id))
                .class(BODY_CLASS)
                .data(DATA_ELEMENT, "body")
                .width(Size::Fill)
                .children(render_rows(columns, rows, config)),
        )
}

pub fn render_header(table_id: &str, columns: &[Column], state: &SortState) -> Element {
    Element::row()
        .id(header_id(table_id))
        .class(HEADER_CLASS)
        .class(ROW_CLASS)
        .data(DATA_ELEMENT, "header")
        .width(Size::Fill)
        .gap(1)
        .style(Style::new().bold().background(Rgb::gray(45)))
        .children(
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| render_header_cell(table_id, index, column, state)),
        )
}

fn render_header_cell(
    table_id: &str,
    index: usize,
    column: &Column,
    state: &SortState,
) -> Element {
    let order = state.order_of(&column.id);

    Element::row()
        .id(header_cell_id(table_id, index))
        .class(CELL_CLASS)
        .data(DATA_ID, column.id.as_str())
        .data(DATA_SORTABLE, column.sortable.to_string())
        .data(DATA_ORDER, order.map_or("", |o| o.as_str()))
        .width(column.width)
        .gap(1)
        .clickable(column.sortable)
        .child(Element::text(column.title.as_str()))
        .child(
            Element::text(order.map_or("", |o| o.arrow()))
                .id(arrow_id(table_id, index))
                .class(ARROW_CLASS),
        )
}

/// One link row per record, one cell per column.
pub fn render_rows(columns: &[Column], rows: &[Record], config: &TableConfig) -> Vec<Element> {
    rows.iter()
        .map(|record| render_row(columns, record, config))
        .collect()
}

fn render_row(columns: &[Column], record: &Record, config: &TableConfig) -> Element {
    let key = record
        .get(&config.row_key)
        .map(ToString::to_string)
        .unwrap_or_default();

    Element::link(format!("{}{}", config.link_prefix, key))
        .class(ROW_CLASS)
        .width(Size::Fill)
        .gap(1)
        .children(columns.iter().map(|column| render_cell(column, record)))
}

fn render_cell(column: &Column, record: &Record) -> Element {
    let null = Value::Null;
    let value = record.get(&column.id).unwrap_or(&null);

    let cell = match &column.template {
        Some(template) => template(value),
        None => Element::text(value.to_string()).text_align(column.align),
    };

    let cell = cell.class(CELL_CLASS);
    if cell.width == Size::Auto {
        cell.width(column.width)
    } else {
        cell
    }
}
