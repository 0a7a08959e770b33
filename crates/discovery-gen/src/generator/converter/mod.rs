pub mod type_mappings;
pub mod type_resolver;

#[cfg(test)]
mod tests;

pub use type_mappings::{TypeMapping, TypeMappings};
pub use type_resolver::TypeResolver;
