pub mod ast;
pub mod converter;
pub mod errors;
pub mod naming;
pub mod samples;
pub mod schema_registry;


pub use ast::{RustPrimitive, RustType, TypeShape};
pub use converter::{TypeMapping, TypeMappings, TypeResolver};
pub use errors::{ConfigError, ResolveError, ResolveResult};
pub use naming::{canonical_type_name, mangle_ident};
pub use samples::{SampleConfig, SampleGenerator, default_value_for};
pub use schema_registry::{Schema, SchemaDocument, SchemaRegistry};
