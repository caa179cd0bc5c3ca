//! The sortable table widget.

use tuidom::{Document, DomError, Element, Event, EventResult, Listener};

use crate::column::Column;
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::markup::{self, DATA_ELEMENT, DATA_ID, DATA_ORDER, DATA_SORTABLE};
use crate::sort::{SortOrder, SortState, sort_rows};
use crate::value::Record;

/// Ids of the mounted elements the table keeps touching.
#[derive(Debug, Clone)]
struct SubElements {
    root: String,
    header: String,
    body: String,
}

/// A table of records whose header cells sort the rows when clicked.
///
/// The document owns the rendered elements; the table keeps their ids and
/// borrows the document for every operation. The table is also the click
/// listener of its own header, see [`Listener`].
#[derive(Debug)]
pub struct SortableTable {
    columns: Vec<Column>,
    data: Vec<Record>,
    config: TableConfig,
    state: SortState,
    /// Current ordered copy of `data`.
    rows: Vec<Record>,
    refs: Option<SubElements>,
}

impl SortableTable {
    /// Render `data` under `columns`, append it to the document body and
    /// apply the default sort (by `title`, ascending).
    pub fn new(doc: &mut Document, columns: Vec<Column>, data: Vec<Record>) -> Result<Self> {
        Self::with_config(doc, columns, data, TableConfig::default())
    }

    pub fn with_config(
        doc: &mut Document,
        columns: Vec<Column>,
        data: Vec<Record>,
        config: TableConfig,
    ) -> Result<Self> {
        let state = config.default_sort.clone();
        let default_column = columns
            .iter()
            .find(|c| c.id == state.field)
            .ok_or_else(|| TableError::unknown_column(&state.field))?;

        let rows = if config.sort_on_mount {
            sort_rows(&data, default_column, state.order)
        } else {
            data.clone()
        };

        let table_id = markup::next_table_id();
        let element = markup::render_table(&table_id, &columns, &rows, &state, &config);
        doc.append_child(config.container.as_deref(), element)?;

        log::debug!(
            "mounted table '{table_id}': {} columns, {} rows, sorted by {} {}",
            columns.len(),
            rows.len(),
            state.field,
            state.order
        );

        Ok(Self {
            columns,
            data,
            config,
            state,
            rows,
            refs: Some(SubElements {
                header: markup::header_id(&table_id),
                body: markup::body_id(&table_id),
                root: table_id,
            }),
        })
    }

    /// Id of the root element, until the table is destroyed.
    pub fn id(&self) -> Option<&str> {
        self.refs.as_ref().map(|r| r.root.as_str())
    }

    /// The root element, while it is attached to `doc`.
    pub fn element<'d>(&self, doc: &'d Document) -> Option<&'d Element> {
        doc.get(self.id()?)
    }

    /// Named part of the table (`"header"` or `"body"`), looked up by its
    /// `element` data attribute.
    pub fn sub_element<'d>(&self, doc: &'d Document, name: &str) -> Option<&'d Element> {
        let root = self.id()?;
        doc.query_all(root, |el| el.get_data(DATA_ELEMENT).is_some_and(|v| v == name))
            .into_iter()
            .next()
    }

    /// Id of the header cell for `column_id`.
    pub fn header_cell_id(&self, column_id: &str) -> Option<String> {
        let root = self.id()?;
        self.columns
            .iter()
            .position(|c| c.id == column_id)
            .map(|index| markup::header_cell_id(root, index))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// The dataset as supplied at construction.
    pub fn data(&self) -> &[Record] {
        &self.data
    }

    /// Rows in the order currently displayed.
    pub fn sorted_rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn sort_state(&self) -> &SortState {
        &self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn is_destroyed(&self) -> bool {
        self.refs.is_none()
    }

    /// Sort by `field` in `order` and re-render the body. The header element
    /// stays in place; only its order attributes and arrows change.
    pub fn sort(&mut self, doc: &mut Document, field: &str, order: SortOrder) -> Result<()> {
        let refs = self.refs.as_ref().ok_or(TableError::Destroyed)?;
        let column = self
            .column(field)
            .ok_or_else(|| TableError::unknown_column(field))?;
        if !column.sortable {
            return Err(TableError::not_sortable(field));
        }
        if !doc.contains(&refs.body) {
            return Err(DomError::not_found(&refs.body).into());
        }

        let rows = sort_rows(&self.data, column, order);
        let state = SortState::new(field, order);

        self.update_indicators(doc, &state);
        let body = doc
            .get_mut(&refs.body)
            .ok_or_else(|| DomError::not_found(&refs.body))?;
        body.replace_children(markup::render_rows(&self.columns, &rows, &self.config));

        log::debug!("table '{}' sorted by {field} {order}", refs.root);
        self.rows = rows;
        self.state = state;
        Ok(())
    }

    /// Derive every header cell's order attribute and arrow from `state`.
    fn update_indicators(&self, doc: &mut Document, state: &SortState) {
        let Some(refs) = &self.refs else {
            return;
        };

        for (index, column) in self.columns.iter().enumerate() {
            let order = state.order_of(&column.id);

            if let Some(cell) = doc.get_mut(&markup::header_cell_id(&refs.root, index)) {
                cell.set_data(DATA_ORDER, order.map_or("", |o| o.as_str()));
            }
            if let Some(arrow) = doc.get_mut(&markup::arrow_id(&refs.root, index)) {
                arrow.set_text(order.map_or("", |o| o.arrow()));
            }
        }
    }

    /// Handle a click on `target`. Resolves the nearest header cell carrying
    /// a column identifier and toggles that column's sort. Clicks that do not
    /// land on a sortable header cell of this table are ignored.
    pub fn handle_click(&mut self, doc: &mut Document, target: &str) -> EventResult {
        let Some(refs) = &self.refs else {
            return EventResult::Ignored;
        };

        let in_header = doc.ancestors(target).iter().any(|el| el.id == refs.header);
        if !in_header {
            return EventResult::Ignored;
        }

        let Some(cell) = doc.closest(target, markup::is_column_cell) else {
            log::trace!("click on '{target}' outside any column cell");
            return EventResult::Ignored;
        };
        if cell.get_data(DATA_SORTABLE).is_none_or(|v| v != "true") {
            return EventResult::Ignored;
        }
        let Some(field) = cell.get_data(DATA_ID).cloned() else {
            return EventResult::Ignored;
        };

        let next = self.state.next_for(&field);
        match self.sort(doc, &field, next.order) {
            Ok(()) => EventResult::Consumed,
            Err(err) => {
                log::warn!("header click on '{field}' not applied: {err}");
                EventResult::Ignored
            }
        }
    }

    /// Detach the root element from the document and hand it back. The table
    /// keeps working if the element is appended again.
    pub fn remove(&mut self, doc: &mut Document) -> Option<Element> {
        let removed = doc.remove(self.id()?);
        if removed.is_some() {
            log::debug!("table '{}' removed from document", self.id().unwrap_or_default());
        }
        removed
    }

    /// Remove the table and release its element references. Afterwards
    /// clicks are ignored and [`sort`](Self::sort) fails with
    /// [`TableError::Destroyed`].
    pub fn destroy(&mut self, doc: &mut Document) {
        self.remove(doc);
        if let Some(refs) = self.refs.take() {
            log::debug!("table '{}' destroyed", refs.root);
        }
    }
}

impl Listener for SortableTable {
    fn current_target(&self) -> Option<&str> {
        self.refs.as_ref().map(|r| r.header.as_str())
    }

    fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.handle_click(doc, target),
            _ => EventResult::Ignored,
        }
    }
}
