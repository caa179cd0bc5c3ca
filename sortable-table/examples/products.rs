use std::fs::File;
use std::time::Duration;

use serde::Deserialize;
use simplelog::{Config, LevelFilter, WriteLogger};
use sortable_table::{Column, Record, SortableTable, TableConfig};
use tuidom::{
    Document, Edges, Element, Event, Key, Rgb, Size, Style, Terminal, TextAlign, dispatch,
};

#[derive(Deserialize)]
struct Catalog {
    #[serde(default)]
    config: TableConfig,
    products: Vec<Record>,
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("title", "Name").sortable().string(),
        Column::new("quantity", "Quantity")
            .sortable()
            .number()
            .width(Size::Fixed(10))
            .align(TextAlign::Right),
        Column::new("price", "Price")
            .sortable()
            .width(Size::Fixed(10))
            .template(|value| {
                Element::text(format!("${value}")).text_align(TextAlign::Right)
            }),
        Column::new("sales", "Sales")
            .sortable()
            .width(Size::Fixed(8))
            .align(TextAlign::Right),
        Column::new("status", "Status")
            .sortable()
            .width(Size::Fixed(14))
            .custom(|a, b| in_stock(b).cmp(&in_stock(a))),
    ]
}

fn in_stock(record: &Record) -> bool {
    record.get_f64("quantity").is_some_and(|q| q > 0.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("sortable-table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let catalog: Catalog = serde_json::from_str(include_str!("../data/products.json"))?;
    let mut products = catalog.products;
    for product in &mut products {
        let status = if in_stock(product) { "in stock" } else { "sold out" };
        product.insert("status", status);
    }

    let mut doc = Document::new();
    doc.append_child(
        None,
        Element::col()
            .id("page")
            .width(Size::Fill)
            .padding(Edges::all(1))
            .gap(1)
            .child(
                Element::text("Products  (click a header to sort, q to quit)")
                    .style(Style::new().bold()),
            ),
    )?;

    let config = catalog.config.container("page");
    let mut table = SortableTable::with_config(&mut doc, columns(), products, config)?;

    doc.append_child(
        Some("page"),
        Element::text("").id("status").style(Style::new().foreground(Rgb::gray(150)).dim()),
    )?;

    let mut term = Terminal::new()?;
    loop {
        term.render(doc.body())?;

        for raw in term.poll(Duration::from_millis(250))? {
            let Some(event) = term.translate(doc.body(), &raw) else {
                continue;
            };

            match &event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                } => {
                    table.destroy(&mut doc);
                    return Ok(());
                }
                Event::Click {
                    target: Some(target),
                    ..
                } => {
                    if dispatch(&mut doc, &event, &mut [&mut table]).is_consumed() {
                        let state = table.sort_state();
                        set_status(&mut doc, format!("sorted by {} {}", state.field, state.order));
                    } else if let Some(href) = doc
                        .closest(target, |el| el.href.is_some())
                        .and_then(|el| el.href.clone())
                    {
                        set_status(&mut doc, format!("open {href}"));
                    }
                }
                _ => {}
            }
        }
    }
}

fn set_status(doc: &mut Document, text: String) {
    if let Some(status) = doc.get_mut("status") {
        status.set_text(text);
    }
}
