use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use discovery_gen::{
  generator::schema_registry::{Schema, is_map_property},
  utils::DocumentLoader,
};
use itertools::Itertools as _;

use crate::ui::{Colors, term_width};

pub(crate) const TABLE_PRESET: &str = "  ── ──            ";

pub(crate) fn new_table() -> Table {
  let mut table = Table::new();
  table
    .load_preset(TABLE_PRESET)
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  table
}

pub(crate) fn header_row(labels: &[&str], colors: &Colors) -> Row {
  let mut row = Row::new();
  for label in labels {
    row.add_cell(Cell::new(label).fg(Colors::cell(colors.label())));
  }
  row
}

fn schema_kind(schema: &Schema) -> &'static str {
  if schema.is_nested() {
    "nested"
  } else if schema.has_properties() {
    "object"
  } else if is_map_property(schema) {
    "map"
  } else {
    schema.schema_type.as_deref().map_or("unknown", |_| "alias")
  }
}

pub async fn list_schemas(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let registry = DocumentLoader::open(input).await?.load_registry()?;
  let nested = registry.nested_schemas()?;

  let mut table = new_table();
  table.set_header(header_row(&["SCHEMA", "KIND", "FIELDS", "PARENTS"], colors));

  let schemas = registry
    .iter()
    .chain(nested.iter().map(|(name, schema)| (name.as_str(), schema)))
    .sorted_by_key(|(name, _)| *name);

  for (name, schema) in schemas {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(Colors::cell(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(schema_kind(schema)).fg(Colors::cell(colors.accent())));
    row.add_cell(Cell::new(schema.properties.len()).fg(Colors::cell(colors.primary())));
    row.add_cell(Cell::new(schema.parents.iter().join(" > ")).fg(Colors::cell(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
