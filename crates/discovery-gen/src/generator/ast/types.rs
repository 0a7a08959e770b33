use std::fmt;

use strum::Display;

/// Module path under which generated clients re-export `chrono`.
pub const CHRONO_PATH: &str = "client::chrono";

/// Rust primitive and support-library types a schema property can map to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RustPrimitive {
  Bool,
  U8,
  I32,
  I64,
  U32,
  U64,
  F32,
  F64,
  #[default]
  String,
  DateTime,
  Date,
  Duration,
  FieldMask,
  Custom(String),
}

impl RustPrimitive {
  pub fn is_float(&self) -> bool {
    matches!(self, RustPrimitive::F32 | RustPrimitive::F64)
  }

  pub fn is_integer(&self) -> bool {
    matches!(
      self,
      RustPrimitive::U8 | RustPrimitive::I32 | RustPrimitive::I64 | RustPrimitive::U32 | RustPrimitive::U64
    )
  }

  /// Canonical spelling used in emitted declarations.
  pub fn canonical_name(&self) -> String {
    match self {
      RustPrimitive::Bool => "bool".to_string(),
      RustPrimitive::U8 => "u8".to_string(),
      RustPrimitive::I32 => "i32".to_string(),
      RustPrimitive::I64 => "i64".to_string(),
      RustPrimitive::U32 => "u32".to_string(),
      RustPrimitive::U64 => "u64".to_string(),
      RustPrimitive::F32 => "f32".to_string(),
      RustPrimitive::F64 => "f64".to_string(),
      RustPrimitive::String => "String".to_string(),
      RustPrimitive::DateTime => format!("{CHRONO_PATH}::DateTime<{CHRONO_PATH}::offset::Utc>"),
      RustPrimitive::Date => format!("{CHRONO_PATH}::NaiveDate"),
      RustPrimitive::Duration => format!("{CHRONO_PATH}::Duration"),
      RustPrimitive::FieldMask => "client::FieldMask".to_string(),
      RustPrimitive::Custom(name) => name.clone(),
    }
  }
}

impl fmt::Display for RustPrimitive {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.canonical_name())
  }
}

impl std::str::FromStr for RustPrimitive {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let date_time = RustPrimitive::DateTime.canonical_name();
    let date = RustPrimitive::Date.canonical_name();
    let duration = RustPrimitive::Duration.canonical_name();

    Ok(match s {
      "bool" => RustPrimitive::Bool,
      "u8" => RustPrimitive::U8,
      "i32" => RustPrimitive::I32,
      "i64" => RustPrimitive::I64,
      "u32" => RustPrimitive::U32,
      "u64" => RustPrimitive::U64,
      "f32" => RustPrimitive::F32,
      "f64" => RustPrimitive::F64,
      "String" => RustPrimitive::String,
      "client::FieldMask" => RustPrimitive::FieldMask,
      s if s == date_time => RustPrimitive::DateTime,
      s if s == date => RustPrimitive::Date,
      s if s == duration => RustPrimitive::Duration,
      custom => RustPrimitive::Custom(custom.to_string()),
    })
  }
}

impl From<&str> for RustPrimitive {
  fn from(s: &str) -> Self {
    match s.parse() {
      Ok(primitive) => primitive,
      Err(never) => match never {},
    }
  }
}

impl From<String> for RustPrimitive {
  fn from(s: String) -> Self {
    RustPrimitive::from(s.as_str())
  }
}

impl From<&String> for RustPrimitive {
  fn from(s: &String) -> Self {
    RustPrimitive::from(s.as_str())
  }
}

/// Parameter-free tag of a [`RustType`] variant.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum TypeShape {
  Base,
  Option,
  Box,
  Vec,
  Map,
}

/// A resolved Rust type.
///
/// Values are built fresh for every resolution and never mutated afterwards.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RustType {
  Base(RustPrimitive),
  Option(Box<RustType>),
  Box(Box<RustType>),
  Vec(Box<RustType>),
  Map(Box<RustType>, Box<RustType>),
}

impl RustType {
  pub fn base(primitive: impl Into<RustPrimitive>) -> Self {
    RustType::Base(primitive.into())
  }

  pub fn option(inner: RustType) -> Self {
    RustType::Option(Box::new(inner))
  }

  pub fn boxed(inner: RustType) -> Self {
    RustType::Box(Box::new(inner))
  }

  pub fn vec(element: RustType) -> Self {
    RustType::Vec(Box::new(element))
  }

  /// Builds a map keyed by `String`.
  pub fn map(value: RustType) -> Self {
    RustType::Map(Box::new(RustType::Base(RustPrimitive::String)), Box::new(value))
  }

  pub fn with_option(self) -> Self {
    RustType::option(self)
  }

  pub fn shape(&self) -> TypeShape {
    match self {
      RustType::Base(_) => TypeShape::Base,
      RustType::Option(_) => TypeShape::Option,
      RustType::Box(_) => TypeShape::Box,
      RustType::Vec(_) => TypeShape::Vec,
      RustType::Map(_, _) => TypeShape::Map,
    }
  }

  /// Compares variant shape only, ignoring parameters.
  pub fn is_shape(&self, shape: TypeShape) -> bool {
    self.shape() == shape
  }

  pub fn is_option(&self) -> bool {
    self.is_shape(TypeShape::Option)
  }

  pub fn is_boxed(&self) -> bool {
    match self {
      RustType::Box(_) => true,
      RustType::Option(inner) => inner.is_boxed(),
      _ => false,
    }
  }

  /// Strips one outer `Option`, if any.
  pub fn unwrap_option(&self) -> &RustType {
    match self {
      RustType::Option(inner) => inner,
      other => other,
    }
  }

  /// The innermost named type.
  pub fn base_type(&self) -> &RustPrimitive {
    match self {
      RustType::Base(primitive) => primitive,
      RustType::Option(inner) | RustType::Box(inner) | RustType::Vec(inner) => inner.base_type(),
      RustType::Map(_, value) => value.base_type(),
    }
  }

  /// Get the full Rust type string
  pub fn to_rust_type(&self) -> String {
    match self {
      RustType::Base(primitive) => primitive.canonical_name(),
      RustType::Option(inner) => format!("Option<{}>", inner.to_rust_type()),
      RustType::Box(inner) => format!("Box<{}>", inner.to_rust_type()),
      RustType::Vec(element) => format!("Vec<{}>", element.to_rust_type()),
      RustType::Map(key, value) => format!("HashMap<{}, {}>", key.to_rust_type(), value.to_rust_type()),
    }
  }
}

impl fmt::Display for RustType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_rust_type())
  }
}

impl From<RustPrimitive> for RustType {
  fn from(primitive: RustPrimitive) -> Self {
    RustType::Base(primitive)
  }
}
