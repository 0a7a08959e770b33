use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::generator::errors::{ResolveError, ResolveResult};

/// Suffix appended once when a synthesized nested type name is already taken.
pub const NESTED_TYPE_SUFFIX: &str = "Nested";

pub(crate) static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "alignof", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "offsetof", "override", "priv", "pub", "pure", "ref", "return", "self", "sizeof", "static",
    "struct", "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield",
  ]
  .into_iter()
  .collect()
});

static CAMEL_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("bad regex"));
static CAMEL_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("bad regex"));

/// Splits camel-case words with underscores and lower-cases the result.
///
/// `fooBarBaz` becomes `foo_bar_baz`, `HTTPRequest` becomes `http_request`.
pub fn camel_to_under(name: &str) -> String {
  let words = CAMEL_WORD_RE.replace_all(name, "${1}_${2}");
  CAMEL_BOUNDARY_RE.replace_all(&words, "${1}_${2}").to_lowercase()
}

/// Converts a schema-supplied property name into a legal Rust field identifier.
///
/// # Rules:
/// 1. camelCase boundaries become underscores and the name is lower-cased.
/// 2. `-` and `.` separators become `_`.
/// 3. `$` markers are dropped.
/// 4. An empty name, or one starting with a digit, gets a leading `_`.
/// 5. A name that is a reserved keyword gets a trailing `_`.
///
/// Applying it to an already mangled name returns that name unchanged.
pub fn mangle_ident(name: &str) -> String {
  let ident = camel_to_under(name).replace(['-', '.'], "_").replace('$', "");
  if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
    return format!("_{ident}");
  }
  if RESERVED_WORDS.contains(ident.as_str()) {
    return format!("{ident}_");
  }
  ident
}

fn capitalize(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// Builds a type-name cased identifier from a compound name.
///
/// Segments separated by space, `_` or `-` get their first letter upper-cased
/// and are concatenated; the remainder of each segment keeps its casing.
pub fn canonical_type_name(name: &str) -> String {
  let joined: String = name.split([' ', '_', '-']).map(capitalize).collect();
  capitalize(&joined)
}

/// Name for an anonymous structure declared by `property_name` inside `schema_name`.
pub fn nested_type_name(schema_name: &str, property_name: &str) -> String {
  format!("{schema_name}{}", canonical_type_name(property_name))
}

/// Returns `name` if it is free, otherwise `name` + [`NESTED_TYPE_SUFFIX`].
///
/// The suffix is applied once only; a second collision is an invariant violation.
pub fn ensure_unique_type_name(name: String, is_taken: impl Fn(&str) -> bool) -> ResolveResult<String> {
  if !is_taken(&name) {
    return Ok(name);
  }

  let suffixed = format!("{name}{NESTED_TYPE_SUFFIX}");
  if is_taken(&suffixed) {
    return Err(ResolveError::NameCollision { name: suffixed });
  }
  Ok(suffixed)
}
