//! Literal values for resolved types.
//!
//! [`default_value_for`] returns a fixed zero value that always compiles.
//! [`SampleGenerator`] returns pseudo-random but reproducible values for example
//! code: every generator owns a stream seeded from [`SampleConfig::seed`], so two
//! generators built from the same configuration emit identical text for the same
//! sequence of calls.

use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};

use crate::generator::ast::{CHRONO_PATH, RustPrimitive, RustType};

pub const DEFAULT_SEED: u64 = 1337;

/// Returned for any type without a dedicated zero value.
pub const DEFAULT_FALLBACK: &str = "Default::default()";

/// Returned for any type without a dedicated sample generator.
pub const SAMPLE_FALLBACK: &str = "&Default::default()";

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy eirmod tempor \
  invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. At vero eos et accusam et justo duo dolores et \
  ea rebum. Stet clita kasd gubergren, no sea takimata sanctus est Lorem ipsum dolor sit amet.";

pub fn default_words() -> Vec<String> {
  LOREM_IPSUM
    .split(' ')
    .map(|word| word.trim_matches(',').to_string())
    .filter(|word| !word.is_empty())
    .collect()
}

/// Configuration for [`SampleGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct SampleConfig {
  #[builder(default = DEFAULT_SEED)]
  pub seed: u64,
  #[builder(default = default_words())]
  pub words: Vec<String>,
}

impl Default for SampleConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// Zero value for `rust_type`, rendered as a Rust expression.
///
/// Unknown names fall back to [`DEFAULT_FALLBACK`] instead of failing.
pub fn default_value_for(rust_type: &RustType) -> String {
  match rust_type {
    RustType::Option(_) => "None".to_string(),
    RustType::Box(inner) => format!("Box::new({})", default_value_for(inner)),
    RustType::Vec(element) if **element == RustType::Base(RustPrimitive::U8) => "b\"hello world\".to_vec()".to_string(),
    RustType::Vec(_) => "Vec::new()".to_string(),
    RustType::Map(_, _) => "HashMap::new()".to_string(),
    RustType::Base(primitive) => default_value_for_primitive(primitive),
  }
}

fn default_value_for_primitive(primitive: &RustPrimitive) -> String {
  match primitive {
    RustPrimitive::Bool => "false".to_string(),
    integer if integer.is_integer() => "0".to_string(),
    float if float.is_float() => "0.0".to_string(),
    RustPrimitive::String => "String::new()".to_string(),
    RustPrimitive::DateTime => "chrono::DateTime::<chrono::offset::Utc>::UNIX_EPOCH".to_string(),
    RustPrimitive::Date => "chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()".to_string(),
    RustPrimitive::Duration => "chrono::Duration::seconds(0)".to_string(),
    RustPrimitive::FieldMask => "FieldMask::default()".to_string(),
    _ => DEFAULT_FALLBACK.to_string(),
  }
}

/// Deterministic source of example argument values.
///
/// The stream comes from `StdRng`, whose algorithm may change between `rand`
/// releases; the workspace pins `rand` exactly to keep samples stable.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
  rng: StdRng,
  words: Vec<String>,
}

impl Default for SampleGenerator {
  fn default() -> Self {
    Self::new(&SampleConfig::default())
  }
}

impl SampleGenerator {
  pub fn new(config: &SampleConfig) -> Self {
    let words = if config.words.is_empty() {
      default_words()
    } else {
      config.words.clone()
    };
    Self {
      rng: StdRng::seed_from_u64(config.seed),
      words,
    }
  }

  /// Sample for a resolved type; an outer `Option` is looked through.
  pub fn sample_value_for(&mut self, rust_type: &RustType) -> String {
    self.sample_value_for_name(&rust_type.unwrap_option().to_rust_type())
  }

  /// Sample for a canonical type name, as passed to a generated method.
  ///
  /// Reference forms such as `&str` and `&Vec<u8>` are accepted alongside owned names.
  /// Unknown names fall back to [`SAMPLE_FALLBACK`].
  pub fn sample_value_for_name(&mut self, type_name: &str) -> String {
    let date_time = RustPrimitive::DateTime.canonical_name();
    let date = RustPrimitive::Date.canonical_name();
    let duration = format!("{CHRONO_PATH}::Duration");

    match type_name {
      "bool" => self.rng.gen_bool(0.5).to_string(),
      "u32" | "u64" => self.rng.gen_range(0..=100u64).to_string(),
      "i32" | "i64" => self.rng.gen_range(-101..=-1i64).to_string(),
      // Debug keeps the fractional part, so the text stays a float literal.
      "f32" | "f64" => format!("{:?}", self.rng.r#gen::<f64>()),
      "String" | "&str" => format!("\"{}\"", self.word()),
      "&Vec<String>" => format!("&vec![\"{}\".into()]", self.word()),
      "Vec<u8>" => "vec![0, 1, 2, 3]".to_string(),
      "&Vec<u8>" => "&vec![0, 1, 2, 3]".to_string(),
      "client::FieldMask" | "FieldMask" => format!("FieldMask(vec![\"{}\".to_string()])", self.word()),
      name if name == duration => format!("chrono::Duration::seconds({})", self.rng.gen_range(0..=9_999_999u32)),
      name if name == date => self.date(),
      name if name == date_time => "chrono::Utc::now()".to_string(),
      _ => SAMPLE_FALLBACK.to_string(),
    }
  }

  fn word(&mut self) -> String {
    self.words.choose(&mut self.rng).cloned().unwrap_or_default()
  }

  fn date(&mut self) -> String {
    let year = self.rng.gen_range(1..=9999u32);
    let month = self.rng.gen_range(1..=12u32);
    let day = self.rng.gen_range(1..=28u32);
    format!("chrono::NaiveDate::from_ymd_opt({year}, {month}, {day}).unwrap()")
  }
}
