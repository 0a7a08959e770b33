use std::{collections::HashMap, path::PathBuf};

use anyhow::Context as _;
use chrono::{Local, Timelike};
use comfy_table::{Attribute, Cell, Row};
use crossterm::style::Stylize;
use discovery_gen::{
  generator::{
    RustType, SampleConfig, SampleGenerator, Schema, SchemaRegistry, TypeMappings, TypeResolver, default_value_for,
    mangle_ident,
  },
  utils::DocumentLoader,
};

use super::list::{header_row, new_table};
use crate::ui::{Colors, FieldsCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct FieldsConfig {
  pub input: PathBuf,
  pub seed: u64,
  pub verbose: bool,
  pub quiet: bool,
  pub customizations: HashMap<String, String>,
}

impl FieldsConfig {
  pub fn from_command(command: FieldsCommand) -> anyhow::Result<Self> {
    let FieldsCommand {
      input,
      seed,
      customize,
      verbose,
      quiet,
    } = command;

    Ok(Self {
      input,
      seed,
      verbose,
      quiet,
      customizations: parse_customizations(customize)?,
    })
  }

  async fn load_registry(&self) -> anyhow::Result<SchemaRegistry> {
    DocumentLoader::open(&self.input).await?.load_registry()
  }

  fn type_mappings(&self) -> anyhow::Result<TypeMappings> {
    TypeMappings::default()
      .with_customizations(&self.customizations)
      .context("applying --customize")
  }
}

fn parse_customizations(customize: Option<Vec<String>>) -> anyhow::Result<HashMap<String, String>> {
  let Some(entries) = customize else {
    return Ok(HashMap::new());
  };

  let mut map = HashMap::new();
  for entry in entries {
    let (key, value) = entry.split_once('=').ok_or_else(|| {
      anyhow::anyhow!("Invalid customize format '{entry}': expected KEY=PATH (e.g., date-time=crate::MyDateTime)")
    })?;
    map.insert(key.to_string(), value.to_string());
  }
  Ok(map)
}

/// One table row: a property resolved into its Rust field.
struct FieldRow {
  schema: String,
  ident: String,
  rust_type: RustType,
  default: String,
  sample: String,
}

struct FieldsLogger<'a> {
  config: &'a FieldsConfig,
  colors: &'a Colors,
}

impl<'a> FieldsLogger<'a> {
  fn new(config: &'a FieldsConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn warn(&self, message: String) {
    eprintln!(
      "{} {}",
      "Warning:".with(self.colors.accent()),
      message.with(self.colors.primary())
    );
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading schema document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_schema(&self, name: &str, schema: &Schema) {
    if !self.config.verbose {
      return;
    }
    let message = if schema.is_nested() {
      format!("Resolved {} fields in {name} (nested in {})", schema.properties.len(), schema.parents.join(" > "))
    } else {
      format!("Resolved {} fields in {name}", schema.properties.len())
    };
    self.info(&message);
  }

  fn print_cycles(&self, cycles: &[Vec<String>]) {
    if cycles.is_empty() {
      return;
    }

    self.stat("Cycles:", cycles.len().to_string());
    for cycle in cycles {
      let closing = cycle.first().map(String::as_str).unwrap_or_default();
      self.warn(format!("unboxed reference cycle {} -> {closing}", cycle.join(" -> ")));
    }
  }

  fn print_statistics(&self, registry: &SchemaRegistry, nested: usize, rows: &[FieldRow]) {
    self.stat("Schemas:", registry.len().to_string());
    self.stat("Nested schemas:", nested.to_string());
    self.stat("Fields resolved:", rows.len().to_string());
    if self.config.verbose {
      self.stat("Sample seed:", self.config.seed.to_string());
    }
  }
}

fn resolve_rows(
  resolver: TypeResolver<'_>,
  samples: &mut SampleGenerator,
  schema_name: &str,
  schema: &Schema,
  rows: &mut Vec<FieldRow>,
) -> anyhow::Result<()> {
  for (property_name, property) in &schema.properties {
    let rust_type = resolver.resolve_field(schema_name, property_name, property)?;
    let inner = rust_type.unwrap_option();
    rows.push(FieldRow {
      schema: schema_name.to_string(),
      ident: mangle_ident(property_name),
      default: default_value_for(inner),
      sample: samples.sample_value_for(inner),
      rust_type,
    });
  }
  Ok(())
}

pub async fn list_fields(config: FieldsConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = FieldsLogger::new(&config, colors);

  logger.log_loading();
  let registry = config.load_registry().await?;
  let mappings = config.type_mappings()?;
  let nested = registry.nested_schemas()?;

  logger.print_cycles(&registry.reference_cycles());

  let resolver = TypeResolver::new(&registry, &mappings);
  let mut samples = SampleGenerator::new(&SampleConfig::builder().seed(config.seed).build());
  let mut rows = Vec::new();

  let schemas = registry
    .iter()
    .chain(nested.iter().map(|(name, schema)| (name.as_str(), schema)));
  for (name, schema) in schemas {
    resolve_rows(resolver, &mut samples, name, schema, &mut rows)?;
    logger.log_schema(name, schema);
  }

  logger.print_statistics(&registry, nested.len(), &rows);

  let mut table = new_table();
  table.set_header(header_row(&["SCHEMA", "FIELD", "TYPE", "DEFAULT", "SAMPLE"], colors));
  for row in rows {
    let mut table_row = Row::new();
    table_row.add_cell(Cell::new(row.schema).fg(Colors::cell(colors.primary())));
    table_row.add_cell(
      Cell::new(row.ident)
        .fg(Colors::cell(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    table_row.add_cell(Cell::new(row.rust_type).fg(Colors::cell(colors.accent())));
    table_row.add_cell(Cell::new(row.default));
    table_row.add_cell(Cell::new(row.sample));
    table.add_row(table_row);
  }

  println!("{table}");

  Ok(())
}
