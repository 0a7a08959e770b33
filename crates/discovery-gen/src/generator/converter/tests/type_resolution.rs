use serde_json::json;

use crate::{
  generator::{
    ast::{RustPrimitive, RustType},
    errors::ResolveError,
  },
  tests::common::{create_resolver, create_test_registry, default_mappings, make_schema},
};

fn resolve_in(registry: serde_json::Value, schema_name: &str, property_name: &str, property: serde_json::Value) -> String {
  let registry = create_test_registry(registry);
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  resolver
    .resolve_field(schema_name, property_name, &make_schema(property))
    .unwrap()
    .to_rust_type()
}

fn resolve_err(property: serde_json::Value) -> ResolveError {
  let registry = create_test_registry(json!({}));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  resolver
    .resolve_field("Foo", "bar", &make_schema(property))
    .unwrap_err()
}

#[test]
fn test_primitive_properties() {
  let cases = [
    (json!({ "type": "boolean" }), "Option<bool>"),
    (json!({ "type": "string" }), "Option<String>"),
    (json!({ "type": "integer" }), "Option<i32>"),
    (json!({ "type": "number" }), "Option<f64>"),
    (json!({ "type": "string", "format": "int64" }), "Option<i64>"),
    (json!({ "type": "string", "format": "uint64" }), "Option<u64>"),
    (json!({ "type": "integer", "format": "uint32" }), "Option<u32>"),
    (json!({ "type": "number", "format": "float" }), "Option<f32>"),
    (json!({ "type": "string", "format": "byte" }), "Option<Vec<u8>>"),
    (json!({ "type": "string", "format": "date" }), "Option<client::chrono::NaiveDate>"),
    (
      json!({ "type": "string", "format": "google-datetime" }),
      "Option<client::chrono::DateTime<client::chrono::offset::Utc>>",
    ),
    (json!({ "type": "string", "format": "google-fieldmask" }), "Option<client::FieldMask>"),
    (json!({ "type": "any" }), "Option<String>"),
  ];
  for (property, expected) in cases {
    assert_eq!(
      resolve_in(json!({}), "Foo", "bar", property.clone()),
      expected,
      "failed for property {property}"
    );
  }
}

#[test]
fn test_array_of_strings() {
  let property = json!({ "type": "array", "items": { "type": "string" } });
  assert_eq!(resolve_in(json!({}), "Foo", "tags", property), "Option<Vec<String>>");
}

#[test]
fn test_array_without_optionals() {
  let registry = create_test_registry(json!({}));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  let property = make_schema(json!({ "type": "array", "items": { "type": "string" } }));

  let result = resolver.resolve("Foo", "tags", &property, false).unwrap();
  assert_eq!(result, RustType::vec(RustType::base(RustPrimitive::String)));
}

#[test]
fn test_map_of_integers() {
  let property = json!({ "type": "object", "additionalProperties": { "type": "integer" } });
  let registry = create_test_registry(json!({}));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);

  let result = resolver.resolve_field("Foo", "counts", &make_schema(property)).unwrap();
  assert_eq!(
    result,
    RustType::option(RustType::Map(
      Box::new(RustType::base(RustPrimitive::String)),
      Box::new(RustType::base(RustPrimitive::I32)),
    ))
  );
}

#[test]
fn test_nested_collections() {
  let cases = [
    (
      json!({ "type": "object", "additionalProperties": { "type": "array", "items": { "type": "string" } } }),
      "Option<HashMap<String, Vec<String>>>",
    ),
    (
      json!({ "type": "array", "items": { "type": "array", "items": { "type": "integer", "format": "int64" } } }),
      "Option<Vec<Vec<i64>>>",
    ),
    (
      json!({ "type": "array", "items": { "type": "object", "additionalProperties": { "type": "boolean" } } }),
      "Option<Vec<HashMap<String, bool>>>",
    ),
    (
      json!({ "type": "array", "additionalProperties": { "type": "string" } }),
      "Option<Vec<String>>",
    ),
  ];
  for (property, expected) in cases {
    assert_eq!(
      resolve_in(json!({}), "Foo", "bar", property.clone()),
      expected,
      "failed for property {property}"
    );
  }
}

#[test]
fn test_self_reference_is_boxed() {
  let registry = create_test_registry(json!({
    "Node": { "id": "Node", "type": "object", "properties": { "next": { "$ref": "Node" } } }
  }));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  let property = make_schema(json!({ "$ref": "Node" }));

  let expected = RustType::option(RustType::boxed(RustType::base("Node")));
  assert_eq!(resolver.resolve("Node", "next", &property, true).unwrap(), expected);
  assert_eq!(resolver.resolve("Node", "next", &property, false).unwrap(), expected);
}

#[test]
fn test_self_reference_inside_array_is_not_boxed() {
  let property = json!({ "type": "array", "items": { "$ref": "Node" } });
  assert_eq!(
    resolve_in(json!({ "Node": { "type": "object" } }), "Node", "children", property),
    "Option<Vec<Node>>"
  );
}

#[test]
fn test_references_to_other_schemas_are_never_boxed() {
  let registry = create_test_registry(json!({
    "Foo": { "type": "object" },
    "Bar": { "type": "object" }
  }));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  let property = make_schema(json!({ "$ref": "Bar" }));

  let optional = resolver.resolve("Foo", "bar", &property, true).unwrap();
  assert_eq!(optional, RustType::option(RustType::base("Bar")));
  assert!(!optional.is_boxed());

  let required = resolver.resolve("Foo", "bar", &property, false).unwrap();
  assert_eq!(required, RustType::base("Bar"));
  assert!(!required.is_boxed());
}

#[test]
fn test_nested_object_synthesizes_name() {
  let property = json!({ "type": "object", "properties": { "baz": { "type": "string" } } });
  assert_eq!(resolve_in(json!({}), "Foo", "bar", property), "Option<FooBar>");
}

#[test]
fn test_nested_object_name_collision_adds_suffix() {
  let property = json!({ "type": "object", "properties": { "baz": { "type": "string" } } });
  assert_eq!(
    resolve_in(json!({ "FooBar": { "type": "object" } }), "Foo", "bar", property),
    "Option<FooBarNested>"
  );
}

#[test]
fn test_nested_object_second_collision_is_fatal() {
  let registry = create_test_registry(json!({
    "FooBar": { "type": "object" },
    "FooBarNested": { "type": "object" }
  }));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  let property = make_schema(json!({ "type": "object", "properties": { "baz": { "type": "string" } } }));

  let err = resolver.resolve_field("Foo", "bar", &property).unwrap_err();
  assert_eq!(
    err,
    ResolveError::NameCollision {
      name: "FooBarNested".to_string()
    }
  );
  assert!(err.is_invariant_violation());
}

#[test]
fn test_array_of_anonymous_objects() {
  let property = json!({
    "type": "array",
    "items": { "type": "object", "properties": { "name": { "type": "string" } } }
  });
  assert_eq!(resolve_in(json!({}), "Channel", "sections", property), "Option<Vec<ChannelSections>>");
}

#[test]
fn test_map_of_anonymous_objects() {
  let property = json!({
    "type": "object",
    "additionalProperties": { "type": "object", "properties": { "count": { "type": "integer" } } }
  });
  assert_eq!(
    resolve_in(json!({}), "Volume", "sale_info", property),
    "Option<HashMap<String, VolumeSaleInfo>>"
  );
}

#[test]
fn test_repeated_primitive_is_never_optional() {
  let registry = create_test_registry(json!({}));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  let property = make_schema(json!({ "type": "string", "repeated": true }));

  for allow_optional in [true, false] {
    assert_eq!(
      resolver.resolve("Foo", "ids", &property, allow_optional).unwrap(),
      RustType::vec(RustType::base(RustPrimitive::String))
    );
  }
}

#[test]
fn test_repeated_concrete_collection() {
  let property = json!({ "type": "string", "format": "byte", "repeated": true });
  assert_eq!(resolve_in(json!({}), "Foo", "chunks", property), "Vec<Vec<u8>>");
}

#[test]
fn test_clashing_nested_names_resolve_to_distinct_types() {
  let registry = create_test_registry(json!({
    "Foo": {
      "type": "object",
      "properties": { "barBaz": { "type": "object", "properties": { "x": { "type": "string" } } } }
    },
    "FooBar": {
      "type": "object",
      "properties": { "baz": { "type": "object", "properties": { "y": { "type": "integer" } } } }
    }
  }));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);

  let cases = [("Foo", "barBaz", "Option<FooBarBaz>"), ("FooBar", "baz", "Option<FooBarBazNested>")];
  for (schema_name, property_name, expected) in cases {
    let property = &registry.get(schema_name).unwrap().properties[property_name];
    assert_eq!(
      resolver.resolve_field(schema_name, property_name, property).unwrap().to_rust_type(),
      expected,
      "failed for {schema_name}.{property_name}"
    );
  }

  let nested = registry.nested_schemas().unwrap();
  assert!(nested.contains_key("FooBarBaz"));
  assert!(nested.contains_key("FooBarBazNested"));
}

#[test]
fn test_unmapped_format_reports_context() {
  let err = resolve_err(json!({ "type": "integer", "format": "int8" }));
  assert_eq!(
    err,
    ResolveError::UnmappedType {
      schema: "Foo".to_string(),
      property: "bar".to_string(),
      type_name: "int8".to_string(),
    }
  );
  assert!(err.is_unmapped_type());
  assert_eq!(
    err.to_string(),
    "Foo.bar: property type 'int8' unknown - add new type mapping"
  );
}

#[test]
fn test_unmapped_type_inside_collection_fails_whole_property() {
  let cases = [
    json!({ "type": "array", "items": { "type": "tuple" } }),
    json!({ "type": "object", "additionalProperties": { "type": "string", "format": "uri" } }),
  ];
  for property in cases {
    let err = resolve_err(property.clone());
    assert!(err.is_unmapped_type(), "expected unmapped type for {property}, got {err:?}");
  }
}

#[test]
fn test_structural_mismatch_is_invariant_violation() {
  let cases = [
    json!({ "type": "array" }),
    json!({ "type": "object" }),
    json!({ "description": "neither ref nor type" }),
  ];
  for property in cases {
    let err = resolve_err(property.clone());
    assert!(
      matches!(err, ResolveError::InvariantViolation { ref schema, ref property, .. } if schema == "Foo" && property == "bar"),
      "expected invariant violation for {property}, got {err:?}"
    );
  }
}

#[test]
fn test_nested_calls_never_return_option() {
  let registry = create_test_registry(json!({ "Node": { "type": "object" } }));
  let mappings = default_mappings();
  let resolver = create_resolver(&registry, &mappings);
  let properties = [
    json!({ "$ref": "Node" }),
    json!({ "$ref": "Other" }),
    json!({ "type": "string" }),
    json!({ "type": "array", "items": { "type": "string" } }),
    json!({ "type": "object", "additionalProperties": { "type": "integer" } }),
    json!({ "type": "object", "properties": { "x": { "type": "string" } } }),
  ];
  for property in properties {
    let result = resolver.resolve_nested("Node", "child", &make_schema(property.clone())).unwrap();
    assert!(!result.is_option(), "nested call returned {result} for {property}");
    assert!(!result.is_boxed(), "nested call boxed {result} for {property}");
  }
}
