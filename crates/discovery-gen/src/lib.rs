#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Resolves Discovery-style API schemas into Rust type descriptors.
//!
//! The [`generator`] module holds the resolution core: the type model, the
//! identifier mangler, the schema registry, the type resolver and the
//! default/sample value generator.

pub mod generator;
pub mod utils;

#[cfg(test)]
mod tests;
