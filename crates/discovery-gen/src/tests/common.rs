use serde_json::Value;

use crate::generator::{
  converter::{TypeMappings, TypeResolver},
  schema_registry::{Schema, SchemaDocument, SchemaRegistry},
};

pub(crate) fn make_schema(value: Value) -> Schema {
  serde_json::from_value(value).unwrap()
}

/// Builds a registry from a `{ "Name": { ...schema } }` object.
pub(crate) fn create_test_registry(schemas: Value) -> SchemaRegistry {
  let document: SchemaDocument = serde_json::from_value(serde_json::json!({ "schemas": schemas })).unwrap();
  SchemaRegistry::from_document(document)
}

pub(crate) fn default_mappings() -> TypeMappings {
  TypeMappings::default()
}

pub(crate) fn create_resolver<'a>(registry: &'a SchemaRegistry, mappings: &'a TypeMappings) -> TypeResolver<'a> {
  TypeResolver::new(registry, mappings)
}
