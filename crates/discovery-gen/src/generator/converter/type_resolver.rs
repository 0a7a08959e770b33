use super::type_mappings::{TypeMapping, TypeMappings};
use crate::generator::{
  ast::RustType,
  errors::{ResolveError, ResolveResult},
  schema_registry::{Schema, SchemaRegistry, is_map_property, is_nested_type_property},
};

/// Resolves Discovery schema properties into Rust types (`RustType`).
///
/// Handles references, primitives, arrays, maps and anonymous nested structures.
/// Only the outermost call for a property may produce an `Option`; every recursive
/// step resolves with optionals disabled.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
  registry: &'a SchemaRegistry,
  mappings: &'a TypeMappings,
}

impl<'a> TypeResolver<'a> {
  pub fn new(registry: &'a SchemaRegistry, mappings: &'a TypeMappings) -> Self {
    Self { registry, mappings }
  }

  pub fn registry(&self) -> &'a SchemaRegistry {
    self.registry
  }

  /// Resolves `property`, declared as `property_name` inside `schema_name`.
  pub fn resolve(
    &self,
    schema_name: &str,
    property_name: &str,
    property: &Schema,
    allow_optional: bool,
  ) -> ResolveResult<RustType> {
    self.resolve_property(schema_name, property_name, property, allow_optional, false)
  }

  /// Resolves a struct field: optional unless it is repeated.
  pub fn resolve_field(&self, schema_name: &str, property_name: &str, property: &Schema) -> ResolveResult<RustType> {
    self.resolve(schema_name, property_name, property, true)
  }

  /// Resolves `property` as an element or value of an enclosing property.
  ///
  /// Never returns an outer `Option`, and does not box self references.
  pub fn resolve_nested(&self, schema_name: &str, property_name: &str, property: &Schema) -> ResolveResult<RustType> {
    self.resolve_property(schema_name, property_name, property, false, true)
  }

  fn resolve_property(
    &self,
    schema_name: &str,
    property_name: &str,
    property: &Schema,
    allow_optional: bool,
    is_nested_call: bool,
  ) -> ResolveResult<RustType> {
    let wrap = |rust_type: RustType| {
      if allow_optional {
        rust_type.with_option()
      } else {
        rust_type
      }
    };

    if let Some(reference) = &property.reference {
      let base = RustType::base(reference.as_str());
      // Only the first recursion level is broken up.
      if !is_nested_call && reference == schema_name {
        return Ok(RustType::option(RustType::boxed(base)));
      }
      return Ok(wrap(base));
    }

    let Some(type_key) = property.type_key() else {
      return Err(ResolveError::invariant(
        schema_name,
        property_name,
        "property declares neither `$ref` nor `type`",
      ));
    };

    let mapping = self
      .mappings
      .get(type_key)
      .ok_or_else(|| ResolveError::UnmappedType {
        schema: schema_name.to_string(),
        property: property_name.to_string(),
        type_name: type_key.to_string(),
      })?;

    match mapping {
      TypeMapping::Sequence => {
        let element = self.nested_type(schema_name, property_name, property)?;
        Ok(wrap(RustType::vec(element)))
      }
      TypeMapping::Map if is_map_property(property) => {
        let value = self.nested_type(schema_name, property_name, property)?;
        Ok(wrap(RustType::map(value)))
      }
      TypeMapping::Map => Ok(wrap(self.nested_type(schema_name, property_name, property)?)),
      TypeMapping::Concrete(rust_type) if property.repeated => Ok(RustType::vec(rust_type.clone())),
      TypeMapping::Concrete(rust_type) => Ok(wrap(rust_type.clone())),
    }
  }

  /// Type of the elements or values carried by `property`.
  fn nested_type(&self, schema_name: &str, property_name: &str, property: &Schema) -> ResolveResult<RustType> {
    let inner = match (&property.items, &property.additional_properties) {
      (Some(items), _) => items,
      (None, Some(values)) => values,
      (None, None) => {
        if !is_nested_type_property(property) {
          return Err(ResolveError::invariant(
            schema_name,
            property_name,
            format!(
              "'{}' property has no `items`, `additionalProperties` or `properties` to take its type from",
              property.type_key().unwrap_or_default()
            ),
          ));
        }
        let type_name = self.registry.unique_nested_type_name(schema_name, property_name)?;
        return Ok(RustType::base(type_name));
      }
    };

    self.resolve_nested(schema_name, property_name, inner)
  }
}
