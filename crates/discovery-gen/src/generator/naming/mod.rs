pub mod identifiers;


pub use identifiers::{camel_to_under, canonical_type_name, ensure_unique_type_name, mangle_ident, nested_type_name};
