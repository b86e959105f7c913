//! Native (primitive) types that cannot be injected implicitly.

use serde::{Deserialize, Serialize};

use crate::metadata::TypeDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
  String,
  Boolean,
  Number,
  Object,
  Array,
}

impl NativeType {
  pub fn name(self) -> &'static str {
    match self {
      NativeType::String => "String",
      NativeType::Boolean => "Boolean",
      NativeType::Number => "Number",
      NativeType::Object => "Object",
      NativeType::Array => "Array",
    }
  }
}

const STANDARD: &[NativeType] = &[
  NativeType::String,
  NativeType::Boolean,
  NativeType::Number,
  NativeType::Object,
];

const STRICT: &[NativeType] = &[
  NativeType::String,
  NativeType::Boolean,
  NativeType::Number,
  NativeType::Object,
  NativeType::Array,
];

/// Which closed set of native types applies to constructor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeTypePolicy {
  /// `String`, `Boolean`, `Number`, `Object`.
  Standard,
  /// The standard set plus `Array`.
  #[default]
  Strict,
}

/// A closed set of native types, matched by literal descriptor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeTypes {
  types: &'static [NativeType],
}

impl NativeTypes {
  pub fn standard() -> Self {
    Self { types: STANDARD }
  }

  pub fn strict() -> Self {
    Self { types: STRICT }
  }

  pub fn contains(&self, native: NativeType) -> bool {
    self.types.contains(&native)
  }

  /// Returns the native type `descriptor` names, if any. Unnamed
  /// descriptors are never native.
  pub fn classify(&self, descriptor: &TypeDescriptor) -> Option<NativeType> {
    let name = descriptor.name()?;
    self.types.iter().copied().find(|native| native.name() == name)
  }
}

impl Default for NativeTypes {
  fn default() -> Self {
    NativeTypePolicy::default().into()
  }
}

impl From<NativeTypePolicy> for NativeTypes {
  fn from(policy: NativeTypePolicy) -> Self {
    match policy {
      NativeTypePolicy::Standard => Self::standard(),
      NativeTypePolicy::Strict => Self::strict(),
    }
  }
}
