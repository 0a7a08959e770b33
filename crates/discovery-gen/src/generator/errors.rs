use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Fatal resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  #[error("{schema}.{property}: property type '{type_name}' unknown - add new type mapping")]
  UnmappedType {
    schema: String,
    property: String,
    type_name: String,
  },

  #[error("{schema}.{property}: {reason}")]
  InvariantViolation {
    schema: String,
    property: String,
    reason: String,
  },

  #[error("synthesized type name '{name}' collides with an existing schema even after disambiguation")]
  NameCollision { name: String },
}

impl ResolveError {
  pub(crate) fn invariant(schema: &str, property: &str, reason: impl Into<String>) -> Self {
    Self::InvariantViolation {
      schema: schema.to_string(),
      property: property.to_string(),
      reason: reason.into(),
    }
  }

  pub fn is_unmapped_type(&self) -> bool {
    matches!(self, Self::UnmappedType { .. })
  }

  /// True for every structural-invariant failure, including repeated name collisions.
  pub fn is_invariant_violation(&self) -> bool {
    matches!(self, Self::InvariantViolation { .. } | Self::NameCollision { .. })
  }
}

/// Rejected type-mapping configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("type mapping '{key}' is a structural marker and cannot be customized")]
  MarkerOverride { key: String },

  #[error("type mapping '{key}' has an empty target type")]
  EmptyTarget { key: String },
}
