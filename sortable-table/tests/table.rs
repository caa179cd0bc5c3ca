use sortable_table::markup::{BODY_CLASS, CELL_CLASS, ROW_CLASS};
use sortable_table::{
    Column, Record, SortOrder, SortState, SortableTable, TableConfig, TableError,
};
use tuidom::{Document, DomError, Element, Event, EventResult, dispatch};

fn fruit_columns() -> Vec<Column> {
    vec![
        Column::new("title", "Name").sortable().string(),
        Column::new("quantity", "Qty").sortable(),
        Column::new("note", "Note"),
    ]
}

fn fruit(id: i64, title: &str, quantity: i64, note: &str) -> Record {
    Record::new()
        .set("id", id)
        .set("title", title)
        .set("quantity", quantity)
        .set("note", note)
}

fn fruit_data() -> Vec<Record> {
    vec![
        fruit(1, "Banana", 12, "ripe"),
        fruit(2, "Apple", 3, "red"),
        fruit(3, "cherry", 40, "sour"),
    ]
}

fn titles(table: &SortableTable) -> Vec<String> {
    table
        .sorted_rows()
        .iter()
        .map(|r| r.get_str("title").unwrap_or_default().to_string())
        .collect()
}

/// Row texts in the order they appear in the mounted body.
fn body_titles(doc: &Document, table: &SortableTable) -> Vec<String> {
    let body = table.sub_element(doc, "body").unwrap();
    body.child_elements()
        .iter()
        .map(|row| row.child_elements()[0].text_content())
        .collect()
}

fn order_attr(doc: &Document, table: &SortableTable, column: &str) -> String {
    let id = table.header_cell_id(column).unwrap();
    doc.get(&id).unwrap().get_data("order").cloned().unwrap_or_default()
}

fn arrow_text(doc: &Document, table: &SortableTable, column: &str) -> String {
    let id = format!("{}-arrow", table.header_cell_id(column).unwrap());
    doc.get(&id).unwrap().text_content()
}

fn click(doc: &mut Document, table: &mut SortableTable, target: &str) -> EventResult {
    dispatch(doc, &Event::click(target), &mut [table])
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_mounts_into_body() {
    let mut doc = Document::new();
    let table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    let root = table.element(&doc).unwrap();
    assert!(root.has_class("sortable-table"));
    assert_eq!(doc.body().child_elements()[0].id, root.id);
}

#[test]
fn test_new_applies_default_sort() {
    let mut doc = Document::new();
    let table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    assert_eq!(table.sort_state(), &SortState::new("title", SortOrder::Asc));
    assert_eq!(titles(&table), vec!["Apple", "Banana", "cherry"]);
    assert_eq!(body_titles(&doc, &table), vec!["Apple", "Banana", "cherry"]);
    assert_eq!(order_attr(&doc, &table, "title"), "asc");
    assert_eq!(arrow_text(&doc, &table, "title"), "▲");
    assert_eq!(order_attr(&doc, &table, "quantity"), "");
}

#[test]
fn test_without_sort_on_mount_keeps_insertion_order() {
    let mut doc = Document::new();
    let config = TableConfig::default().sort_on_mount(false);
    let table =
        SortableTable::with_config(&mut doc, fruit_columns(), fruit_data(), config).unwrap();

    assert_eq!(body_titles(&doc, &table), vec!["Banana", "Apple", "cherry"]);
    assert_eq!(order_attr(&doc, &table, "title"), "asc");
}

#[test]
fn test_rows_and_cells_match_data() {
    let mut doc = Document::new();
    let table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    let body = table.sub_element(&doc, "body").unwrap();
    assert!(body.has_class(BODY_CLASS));
    assert_eq!(body.child_elements().len(), 3);
    for row in body.child_elements() {
        assert!(row.has_class(ROW_CLASS));
        assert_eq!(row.child_elements().len(), 3);
        assert!(row.child_elements().iter().all(|c| c.has_class(CELL_CLASS)));
    }
}

#[test]
fn test_header_has_one_cell_per_column() {
    let mut doc = Document::new();
    let table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    let header = table.sub_element(&doc, "header").unwrap();
    let ids: Vec<_> = header
        .child_elements()
        .iter()
        .map(|c| c.get_data("id").cloned().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["title", "quantity", "note"]);
    assert_eq!(header.child_elements()[2].get_data("sortable").unwrap(), "false");
}

#[test]
fn test_rows_link_to_record() {
    let mut doc = Document::new();
    let table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    let body = table.sub_element(&doc, "body").unwrap();
    let links: Vec<_> = body
        .child_elements()
        .iter()
        .map(|row| row.href.clone().unwrap_or_default())
        .collect();
    assert_eq!(links, vec!["/products/2", "/products/1", "/products/3"]);
}

#[test]
fn test_custom_link_prefix_and_key() {
    let mut doc = Document::new();
    let data = vec![Record::new().set("sku", "A-1").set("title", "Kettle")];
    let config = TableConfig::default().link_prefix("/items/").row_key("sku");
    let table = SortableTable::with_config(&mut doc, fruit_columns(), data, config).unwrap();

    let body = table.sub_element(&doc, "body").unwrap();
    assert_eq!(body.child_elements()[0].href.as_deref(), Some("/items/A-1"));
}

#[test]
fn test_template_renders_cell() {
    let mut doc = Document::new();
    let columns = vec![
        Column::new("title", "Name").sortable().string(),
        Column::new("price", "Price")
            .sortable()
            .template(|value| Element::text(format!("${value}"))),
    ];
    let data = vec![Record::new().set("id", 1).set("title", "Lamp").set("price", 25)];
    let table = SortableTable::new(&mut doc, columns, data).unwrap();

    let body = table.sub_element(&doc, "body").unwrap();
    let cell = &body.child_elements()[0].child_elements()[1];
    assert_eq!(cell.text_content(), "$25");
    assert!(cell.has_class(CELL_CLASS));
}

#[test]
fn test_missing_field_renders_empty_cell() {
    let mut doc = Document::new();
    let data = vec![Record::new().set("id", 1).set("title", "Lamp")];
    let table = SortableTable::new(&mut doc, fruit_columns(), data).unwrap();

    let body = table.sub_element(&doc, "body").unwrap();
    assert_eq!(body.child_elements()[0].child_elements()[2].text_content(), "");
}

#[test]
fn test_unknown_default_column_is_error() {
    let mut doc = Document::new();
    let columns = vec![Column::new("price", "Price").sortable()];

    let err = SortableTable::new(&mut doc, columns, fruit_data()).unwrap_err();

    assert_eq!(err, TableError::unknown_column("title"));
    assert!(doc.body().child_elements().is_empty());
}

#[test]
fn test_mount_into_container() {
    let mut doc = Document::new();
    doc.append_child(None, Element::col().id("page")).unwrap();
    let config = TableConfig::default().container("page");
    let table =
        SortableTable::with_config(&mut doc, fruit_columns(), fruit_data(), config).unwrap();

    assert_eq!(doc.get("page").unwrap().child_elements()[0].id, table.id().unwrap());
}

#[test]
fn test_missing_container_is_error() {
    let mut doc = Document::new();
    let config = TableConfig::default().container("nope");

    let err =
        SortableTable::with_config(&mut doc, fruit_columns(), fruit_data(), config).unwrap_err();

    assert_eq!(err, TableError::Dom(DomError::parent_not_found("nope")));
}

#[test]
fn test_source_data_not_mutated() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    table.sort(&mut doc, "quantity", SortOrder::Desc).unwrap();

    assert_eq!(table.data(), fruit_data().as_slice());
}

// ============================================================================
// Header Clicks
// ============================================================================

#[test]
fn test_click_active_column_toggles() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = table.header_cell_id("title").unwrap();

    assert_eq!(click(&mut doc, &mut table, &cell), EventResult::Consumed);
    assert_eq!(table.sort_state().order, SortOrder::Desc);
    assert_eq!(body_titles(&doc, &table), vec!["cherry", "Banana", "Apple"]);
    assert_eq!(order_attr(&doc, &table, "title"), "desc");
    assert_eq!(arrow_text(&doc, &table, "title"), "▼");

    click(&mut doc, &mut table, &cell);
    assert_eq!(table.sort_state().order, SortOrder::Asc);
    assert_eq!(body_titles(&doc, &table), vec!["Apple", "Banana", "cherry"]);
}

#[test]
fn test_click_on_cell_label_bubbles_to_cell() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = table.header_cell_id("quantity").unwrap();
    let label = doc.get(&cell).unwrap().child_elements()[0].id.clone();

    assert_eq!(click(&mut doc, &mut table, &label), EventResult::Consumed);
    assert_eq!(table.sort_state(), &SortState::new("quantity", SortOrder::Asc));
}

#[test]
fn test_click_other_column_resets_indicators() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = table.header_cell_id("quantity").unwrap();

    click(&mut doc, &mut table, &cell);

    assert_eq!(table.sort_state(), &SortState::new("quantity", SortOrder::Asc));
    assert_eq!(titles(&table), vec!["Apple", "Banana", "cherry"]);
    assert_eq!(order_attr(&doc, &table, "quantity"), "asc");
    assert_eq!(order_attr(&doc, &table, "title"), "");
    assert_eq!(arrow_text(&doc, &table, "title"), "");

    let active: Vec<_> = ["title", "quantity", "note"]
        .iter()
        .filter(|c| !order_attr(&doc, &table, c).is_empty())
        .collect();
    assert_eq!(active.len(), 1);
}

#[test]
fn test_column_ids_resembling_element_ids() {
    let mut doc = Document::new();
    let columns = vec![
        Column::new("title", "Name").sortable().string(),
        Column::new("x", "X").sortable(),
        Column::new("x-arrow", "X arrow").sortable(),
    ];
    let data = vec![
        Record::new().set("id", 1).set("title", "a").set("x", 1).set("x-arrow", 20),
        Record::new().set("id", 2).set("title", "b").set("x", 2).set("x-arrow", 10),
    ];
    let mut table = SortableTable::new(&mut doc, columns, data).unwrap();
    let x = table.header_cell_id("x").unwrap();
    let x_arrow = table.header_cell_id("x-arrow").unwrap();
    assert_ne!(format!("{x}-arrow"), x_arrow);

    assert_eq!(click(&mut doc, &mut table, &x_arrow), EventResult::Consumed);

    assert_eq!(table.sort_state(), &SortState::new("x-arrow", SortOrder::Asc));
    assert_eq!(titles(&table), vec!["b", "a"]);
    assert_eq!(order_attr(&doc, &table, "x-arrow"), "asc");
    assert_eq!(arrow_text(&doc, &table, "x-arrow"), "▲");
    assert_eq!(order_attr(&doc, &table, "x"), "");
    assert_eq!(arrow_text(&doc, &table, "x"), "");
}

#[test]
fn test_click_non_sortable_column_is_noop() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = table.header_cell_id("note").unwrap();

    assert_eq!(click(&mut doc, &mut table, &cell), EventResult::Ignored);
    assert_eq!(table.sort_state(), &SortState::new("title", SortOrder::Asc));
    assert_eq!(order_attr(&doc, &table, "note"), "");
}

#[test]
fn test_click_header_gap_is_noop() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let header = table.sub_element(&doc, "header").unwrap().id.clone();
    let before = body_titles(&doc, &table);

    assert_eq!(click(&mut doc, &mut table, &header), EventResult::Ignored);
    assert_eq!(body_titles(&doc, &table), before);
    assert_eq!(order_attr(&doc, &table, "title"), "asc");
}

#[test]
fn test_click_body_row_is_not_handled() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = {
        let body = table.sub_element(&doc, "body").unwrap();
        body.child_elements()[0].child_elements()[0].id.clone()
    };

    assert_eq!(click(&mut doc, &mut table, &cell), EventResult::Ignored);
    assert_eq!(table.handle_click(&mut doc, &cell), EventResult::Ignored);
    assert_eq!(table.sort_state().order, SortOrder::Asc);
}

#[test]
fn test_click_unknown_target_is_noop() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    assert_eq!(table.handle_click(&mut doc, "not-an-element"), EventResult::Ignored);
}

#[test]
fn test_header_survives_resort() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let header_before = table.sub_element(&doc, "header").unwrap().id.clone();
    let cell = table.header_cell_id("quantity").unwrap();

    click(&mut doc, &mut table, &cell);
    click(&mut doc, &mut table, &cell);

    let header_after = table.sub_element(&doc, "header").unwrap().id.clone();
    assert_eq!(header_before, header_after);
    assert_eq!(table.sort_state().order, SortOrder::Desc);
}

#[test]
fn test_insertion_order_then_click_sorts_descending() {
    let mut doc = Document::new();
    let columns = vec![Column::new("title", "Title").sortable().string()];
    let data = vec![
        Record::new().set("id", 1).set("title", "Banana"),
        Record::new().set("id", 2).set("title", "Apple"),
    ];
    let config = TableConfig::default().sort_on_mount(false);
    let mut table = SortableTable::with_config(&mut doc, columns, data, config).unwrap();

    assert_eq!(body_titles(&doc, &table), vec!["Banana", "Apple"]);
    assert_eq!(order_attr(&doc, &table, "title"), "asc");

    let cell = table.header_cell_id("title").unwrap();
    click(&mut doc, &mut table, &cell);

    assert_eq!(order_attr(&doc, &table, "title"), "desc");
    assert_eq!(body_titles(&doc, &table), vec!["Banana", "Apple"]);
    assert_eq!(table.sort_state().order, SortOrder::Desc);
}

// ============================================================================
// Programmatic Sort
// ============================================================================

#[test]
fn test_sort_numeric_desc() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    table.sort(&mut doc, "quantity", SortOrder::Desc).unwrap();

    assert_eq!(titles(&table), vec!["cherry", "Banana", "Apple"]);
    assert_eq!(body_titles(&doc, &table), titles(&table));
}

#[test]
fn test_sort_unknown_column() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    assert_eq!(
        table.sort(&mut doc, "weight", SortOrder::Asc),
        Err(TableError::unknown_column("weight"))
    );
}

#[test]
fn test_sort_not_sortable_column() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    assert_eq!(
        table.sort(&mut doc, "note", SortOrder::Asc),
        Err(TableError::not_sortable("note"))
    );
    assert_eq!(table.sort_state().field, "title");
}

#[test]
fn test_custom_comparator() {
    let mut doc = Document::new();
    let columns = vec![
        Column::new("title", "Name").sortable().string(),
        Column::new("stock", "Stock").sortable().custom(|a, b| {
            let a = a.get_f64("quantity").unwrap_or(0.0) > 5.0;
            let b = b.get_f64("quantity").unwrap_or(0.0) > 5.0;
            a.cmp(&b)
        }),
    ];
    let mut table = SortableTable::new(&mut doc, columns, fruit_data()).unwrap();

    table.sort(&mut doc, "stock", SortOrder::Asc).unwrap();
    assert_eq!(titles(&table), vec!["Apple", "Banana", "cherry"]);

    table.sort(&mut doc, "stock", SortOrder::Desc).unwrap();
    // Banana and cherry tie; the stable sort keeps them in data order.
    assert_eq!(titles(&table), vec!["Banana", "cherry", "Apple"]);
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_destroy_detaches_root() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let root = table.id().unwrap().to_string();

    table.destroy(&mut doc);

    assert!(!doc.contains(&root));
    assert!(table.is_destroyed());
    assert!(table.element(&doc).is_none());
    assert!(table.sub_element(&doc, "body").is_none());
}

#[test]
fn test_destroyed_table_is_inert() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = table.header_cell_id("title").unwrap();
    table.destroy(&mut doc);

    assert_eq!(click(&mut doc, &mut table, &cell), EventResult::Ignored);
    assert_eq!(
        table.sort(&mut doc, "title", SortOrder::Desc),
        Err(TableError::Destroyed)
    );
    // Destroying twice is harmless.
    table.destroy(&mut doc);
}

#[test]
fn test_remove_and_reattach() {
    let mut doc = Document::new();
    let mut table = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();

    let element = table.remove(&mut doc).unwrap();
    assert!(table.element(&doc).is_none());
    assert!(matches!(
        table.sort(&mut doc, "quantity", SortOrder::Asc),
        Err(TableError::Dom(DomError::NotFound { .. }))
    ));

    doc.append_child(None, element).unwrap();
    table.sort(&mut doc, "quantity", SortOrder::Asc).unwrap();
    assert_eq!(body_titles(&doc, &table), vec!["Apple", "Banana", "cherry"]);
}

#[test]
fn test_two_tables_do_not_interfere() {
    let mut doc = Document::new();
    let mut first = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let mut second = SortableTable::new(&mut doc, fruit_columns(), fruit_data()).unwrap();
    let cell = second.header_cell_id("quantity").unwrap();

    let result = dispatch(&mut doc, &Event::click(cell), &mut [&mut first, &mut second]);

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(first.sort_state().field, "title");
    assert_eq!(second.sort_state().field, "quantity");
}
