//! # Fibre Inject
//!
//! Parameter resolution for dependency injection.
//!
//! Given a class and optionally one of its methods, Fibre Inject produces the
//! ordered list of arguments needed to invoke it. Each position comes either
//! from the parameter types captured ahead of time by a
//! [`TypeMetadataProvider`], or from an [`Injector`] that overrides that
//! slot with an explicit lookup key.
//!
//! ## Core Concepts
//!
//! - **Entity**: the registration record of one class: activation state,
//!   options and injectors. Resolution is only legal once it is activated.
//! - **Injector**: an override for one `(method, index)` slot.
//! - **Container**: the registry of entities, keyed by class identity.
//! - **Native types**: `String`, `Boolean`, `Number`, `Object` (and `Array`
//!   in the strict set) cannot be injected implicitly into a constructor.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_inject::{inject, register_service, Container, MetadataTable, TypeDescriptor};
//!
//! struct UserService;
//! struct Foo;
//!
//! // Captured parameter types, normally produced by a build step.
//! let metadata = MetadataTable::builder()
//!   .constructor::<Foo>([TypeDescriptor::of::<UserService>(), TypeDescriptor::named("Number")])
//!   .build();
//!
//! let container = Container::new(metadata);
//! inject!(container, Foo, 1 => "retry_limit").unwrap();
//! register_service!(container, Foo);
//!
//! let params = container.get::<Foo>().unwrap();
//! assert!(!params[0].is_injector());
//! assert_eq!(params[1].injector().unwrap().key().as_str(), "retry_limit");
//! ```

mod config;
mod container;
mod core;
mod entity;
mod error;
mod global;
mod injector;
#[cfg(feature = "local")]
mod local_container;
mod macros;
mod metadata;
mod native;
mod resolver;

pub use crate::core::{InjectionKey, SlotKey, TargetId, CONSTRUCTOR};
pub use config::ContainerConfig;
pub use container::{Container, SharedProvider};
pub use entity::{Entity, EntityOptions, ResolvedParam};
pub use error::{Error, Result};
pub use global::{global, install_global};
pub use injector::Injector;
#[cfg(feature = "local")]
pub use local_container::LocalContainer;
pub use metadata::{MetadataTable, MetadataTableBuilder, TypeDescriptor, TypeMetadataProvider};
pub use native::{NativeType, NativeTypePolicy, NativeTypes};
pub use resolver::ParamResolver;
