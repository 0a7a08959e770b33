use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context as _;
use indexmap::IndexMap;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};
use serde::Deserialize;

use crate::generator::{
  errors::ResolveResult,
  naming::identifiers::{ensure_unique_type_name, nested_type_name},
};

const OBJECT_TYPE: &str = "object";

/// A property or named schema as declared by a Discovery document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(rename = "type", default)]
  pub schema_type: Option<String>,
  #[serde(default)]
  pub format: Option<String>,
  #[serde(rename = "$ref", default)]
  pub reference: Option<String>,
  #[serde(default)]
  pub items: Option<Box<Schema>>,
  #[serde(default)]
  pub additional_properties: Option<Box<Schema>>,
  #[serde(default)]
  pub properties: IndexMap<String, Schema>,
  #[serde(default)]
  pub repeated: bool,
  #[serde(default)]
  pub description: Option<String>,
  /// Enclosing schema names, outermost first. Empty for top-level schemas.
  #[serde(skip)]
  pub parents: Vec<String>,
}

impl Schema {
  /// Key into the type mapping table: `format` wins over `type`.
  pub fn type_key(&self) -> Option<&str> {
    self.format.as_deref().or(self.schema_type.as_deref())
  }

  pub fn is_nested(&self) -> bool {
    !self.parents.is_empty()
  }

  pub fn is_object(&self) -> bool {
    self.schema_type.as_deref() == Some(OBJECT_TYPE)
  }

  pub fn has_properties(&self) -> bool {
    !self.properties.is_empty()
  }
}

/// True if the property declares its own anonymous structure, directly or as array items.
pub fn is_nested_type_property(schema: &Schema) -> bool {
  (schema.is_object() && schema.has_properties()) || schema.items.as_ref().is_some_and(|items| items.has_properties())
}

pub fn is_map_property(schema: &Schema) -> bool {
  schema.additional_properties.is_some()
}

/// The anonymous structure a property resolves to by name, looking through items and map values.
fn anonymous_structure(schema: &Schema) -> Option<&Schema> {
  if schema.reference.is_some() {
    return None;
  }
  if let Some(items) = &schema.items {
    return anonymous_structure(items);
  }
  if let Some(values) = &schema.additional_properties {
    return anonymous_structure(values);
  }
  (schema.is_object() && schema.has_properties()).then_some(schema)
}

/// Top-level shape of a Discovery document; only the members this crate consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub schemas: IndexMap<String, Schema>,
}

impl SchemaDocument {
  pub fn from_json_slice(bytes: &[u8]) -> anyhow::Result<Self> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
      let path = err.path().to_string();
      anyhow::Error::new(err.into_inner()).context(format!("invalid schema document at '{path}'"))
    })
  }

  pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
    Self::from_json_slice(content.as_bytes()).context("parsing schema document")
  }
}

/// Anonymous structures found under the top-level schemas, with the name assigned to each.
#[derive(Debug, Clone, Default)]
struct NestedIndex {
  schemas: IndexMap<String, Schema>,
  /// Enclosing schema name -> property name -> synthesized type name.
  names: BTreeMap<String, BTreeMap<String, String>>,
}

impl NestedIndex {
  fn assigned_name(&self, schema_name: &str, property_name: &str) -> Option<&str> {
    self
      .names
      .get(schema_name)
      .and_then(|properties| properties.get(property_name))
      .map(String::as_str)
  }
}

/// Read-only index of every named schema in a document.
///
/// Names for anonymous nested structures are assigned once, when the registry is
/// built, so the resolver and [`SchemaRegistry::nested_schemas`] always agree.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
  schemas: BTreeMap<String, Schema>,
  nested: ResolveResult<NestedIndex>,
}

impl Default for SchemaRegistry {
  fn default() -> Self {
    Self::new([])
  }
}

impl SchemaRegistry {
  pub fn new(schemas: impl IntoIterator<Item = (String, Schema)>) -> Self {
    let schemas = schemas
      .into_iter()
      .map(|(name, mut schema)| {
        schema.parents.clear();
        (name, schema)
      })
      .collect();
    let mut registry = Self {
      schemas,
      nested: Ok(NestedIndex::default()),
    };
    registry.nested = registry.index_nested();
    registry
  }

  pub fn from_document(document: SchemaDocument) -> Self {
    Self::new(document.schemas)
  }

  pub fn get(&self, name: &str) -> Option<&Schema> {
    self.schemas.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.schemas.contains_key(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.schemas.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
    self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
  }

  pub fn len(&self) -> usize {
    self.schemas.len()
  }

  pub fn is_empty(&self) -> bool {
    self.schemas.is_empty()
  }

  /// Type name for the anonymous structure declared by `property_name` inside `schema_name`.
  ///
  /// Structures reachable from the registry get the name assigned while it was
  /// built. Any other property is named against the registry keys and the
  /// assigned nested names.
  pub fn unique_nested_type_name(&self, schema_name: &str, property_name: &str) -> ResolveResult<String> {
    let index = self.nested.as_ref().map_err(Clone::clone)?;
    if let Some(name) = index.assigned_name(schema_name, property_name) {
      return Ok(name.to_string());
    }
    ensure_unique_type_name(nested_type_name(schema_name, property_name), |name| {
      self.contains(name) || index.schemas.contains_key(name)
    })
  }

  /// Every anonymous structure reachable from the top-level schemas, keyed by synthesized name.
  ///
  /// Each returned schema carries its parent chain and has `id` set to its name.
  pub fn nested_schemas(&self) -> ResolveResult<&IndexMap<String, Schema>> {
    self.nested.as_ref().map(|index| &index.schemas).map_err(Clone::clone)
  }

  fn index_nested(&self) -> ResolveResult<NestedIndex> {
    let mut index = NestedIndex::default();
    for (name, schema) in &self.schemas {
      self.collect_nested(name, schema, &[], &mut index)?;
    }
    Ok(index)
  }

  /// Walks properties depth first; a structure is named before its own children.
  fn collect_nested(
    &self,
    schema_name: &str,
    schema: &Schema,
    parents: &[String],
    index: &mut NestedIndex,
  ) -> ResolveResult<()> {
    let mut chain = parents.to_vec();
    chain.push(schema_name.to_string());

    for (property_name, property) in &schema.properties {
      let Some(body) = anonymous_structure(property) else {
        continue;
      };

      let type_name = ensure_unique_type_name(nested_type_name(schema_name, property_name), |name| {
        self.contains(name) || index.schemas.contains_key(name)
      })?;
      index
        .names
        .entry(schema_name.to_string())
        .or_default()
        .insert(property_name.clone(), type_name.clone());

      let mut nested_schema = body.clone();
      nested_schema.id = Some(type_name.clone());
      nested_schema.parents.clone_from(&chain);
      index.schemas.insert(type_name.clone(), nested_schema);

      self.collect_nested(&type_name, body, &chain, index)?;
    }

    Ok(())
  }

  /// Reference cycles that hold a schema by value and are not broken by boxing.
  ///
  /// Direct self-references of a top-level schema are boxed during resolution and
  /// are not reported. References through arrays and maps are heap allocated and
  /// are ignored. Each cycle is sorted, and the list is sorted.
  pub fn reference_cycles(&self) -> Vec<Vec<String>> {
    let mut dependencies: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for (name, schema) in &self.schemas {
      let mut refs = BTreeSet::new();
      collect_value_refs(name, schema, true, &mut refs);
      dependencies.insert(name.as_str(), refs);
    }

    let mut graph = DiGraphMap::<&str, ()>::new();
    for (&node, deps) in &dependencies {
      graph.add_node(node);
      for dep in deps {
        if let Some((target, _)) = self.schemas.get_key_value(dep) {
          graph.add_edge(node, target.as_str(), ());
        }
      }
    }

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut cycle: Vec<String> = scc.into_iter().map(String::from).collect();
        cycle.sort();
        cycle
      })
      .collect();
    cycles.sort();
    cycles
  }
}

fn collect_value_refs(owner: &str, schema: &Schema, top_level: bool, refs: &mut BTreeSet<String>) {
  for property in schema.properties.values() {
    if let Some(reference) = &property.reference {
      if !(top_level && reference == owner) {
        refs.insert(reference.clone());
      }
      continue;
    }
    if property.items.is_some() || property.additional_properties.is_some() || property.repeated {
      continue;
    }
    if property.is_object() && property.has_properties() {
      collect_value_refs(owner, property, false, refs);
    }
  }
}
