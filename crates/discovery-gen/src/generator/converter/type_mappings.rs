use std::collections::{BTreeMap, HashMap};

use crate::generator::{
  ast::{RustPrimitive, RustType},
  errors::ConfigError,
};

/// What a schema `type`/`format` key maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMapping {
  /// A fully determined type, used as is.
  Concrete(RustType),
  /// Element type comes from `items`, `additionalProperties` or an anonymous structure.
  Sequence,
  /// Value type comes from `additionalProperties`; without one the property is a plain structure.
  Map,
}

impl TypeMapping {
  pub fn is_marker(&self) -> bool {
    matches!(self, TypeMapping::Sequence | TypeMapping::Map)
  }
}

/// Format and type keys recognised by the resolver.
///
/// Built once per run and handed to the resolver; never mutated during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMappings {
  entries: BTreeMap<String, TypeMapping>,
}

impl Default for TypeMappings {
  fn default() -> Self {
    use TypeMapping::{Concrete, Map, Sequence};

    let primitive = |p: RustPrimitive| Concrete(RustType::Base(p));
    let entries = [
      ("boolean", primitive(RustPrimitive::Bool)),
      ("integer", primitive(RustPrimitive::I32)),
      ("number", primitive(RustPrimitive::F64)),
      ("int32", primitive(RustPrimitive::I32)),
      ("int64", primitive(RustPrimitive::I64)),
      ("uint32", primitive(RustPrimitive::U32)),
      ("uint64", primitive(RustPrimitive::U64)),
      ("float", primitive(RustPrimitive::F32)),
      ("double", primitive(RustPrimitive::F64)),
      ("string", primitive(RustPrimitive::String)),
      ("any", primitive(RustPrimitive::String)),
      // RFC 3339 timestamps
      ("date-time", primitive(RustPrimitive::DateTime)),
      ("google-datetime", primitive(RustPrimitive::DateTime)),
      ("date", primitive(RustPrimitive::Date)),
      ("google-duration", primitive(RustPrimitive::Duration)),
      ("google-fieldmask", primitive(RustPrimitive::FieldMask)),
      // url-safe base64 on the wire
      ("byte", Concrete(RustType::vec(RustType::Base(RustPrimitive::U8)))),
      ("array", Sequence),
      ("object", Map),
    ]
    .into_iter()
    .map(|(key, mapping)| (key.to_string(), mapping))
    .collect();

    Self { entries }
  }
}

impl TypeMappings {
  /// A table without any entries.
  pub fn empty() -> Self {
    Self {
      entries: BTreeMap::new(),
    }
  }

  pub fn get(&self, key: &str) -> Option<&TypeMapping> {
    self.entries.get(key)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  pub fn insert(&mut self, key: impl Into<String>, mapping: TypeMapping) -> Option<TypeMapping> {
    self.entries.insert(key.into(), mapping)
  }

  /// Overrides or adds concrete entries from `key=RustPath` customizations.
  pub fn with_customizations(mut self, customizations: &HashMap<String, String>) -> Result<Self, ConfigError> {
    let mut keys: Vec<&String> = customizations.keys().collect();
    keys.sort();

    for key in keys {
      if self.get(key).is_some_and(TypeMapping::is_marker) {
        return Err(ConfigError::MarkerOverride { key: key.clone() });
      }
      let target = customizations[key].trim();
      if target.is_empty() {
        return Err(ConfigError::EmptyTarget { key: key.clone() });
      }
      self.insert(key.clone(), TypeMapping::Concrete(RustType::base(target)));
    }

    Ok(self)
  }
}
