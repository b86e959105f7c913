use thiserror::Error;

use crate::core::TargetId;

/// The main error type for the `fibre_inject` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Entity is not registered: {target}")]
  EntityNotRegistered { target: TargetId },

  #[error("Entity method is not registered: {target}::{method}")]
  MethodNotRegistered { target: TargetId, method: String },

  #[error("Param {index} does not exist on {target}::{method} ({param_count} declared)")]
  ParamIndexOutOfRange {
    target: TargetId,
    method: String,
    index: usize,
    param_count: usize,
  },

  #[error("Injector already exists for {target}::{method} param {index}")]
  DuplicateInjector {
    target: TargetId,
    method: String,
    index: usize,
  },

  #[error("Param {index} of {target} has native type `{type_name}`")]
  NativeTypeParam {
    target: TargetId,
    index: usize,
    type_name: String,
  },

  #[error("Entity already exists: {target}")]
  DuplicateEntity { target: TargetId },

  #[error("Global container is already installed")]
  GlobalAlreadyInstalled,

  #[error("Global container has not been installed")]
  GlobalNotInstalled,

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),
}

/// A specialized `Result` type for `fibre_inject` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
