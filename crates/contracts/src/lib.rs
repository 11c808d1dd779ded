//! # Contracts
//!
//! Frozen interface contracts between the host runtime and plugin
//! components: resource identifiers, model identifiers, component
//! configuration, capability traits, and the shared error type.
//! Business crates depend only on this crate; reverse dependencies are
//! prohibited.
//!
//! ## Ownership model
//! Components never own their dependencies. The host owns every resource
//! and hands out `Arc<dyn Resource>` handles through a [`Dependencies`]
//! map; components narrow a handle to the capability they need at bind
//! time and drop it on the next reconfiguration.

mod config;
mod error;
mod geometry;
mod model;
mod registry;
mod resource;
mod resource_name;

pub use config::ComponentConfig;
pub use error::ComponentError;
pub use geometry::{Geometry, Vector3};
pub use model::Model;
pub use registry::{ConstructFn, ModelEntry, Registry, ValidateFn};
pub use resource::{AttributeMap, Dependencies, Readings, Resource, Sensor};
pub use resource_name::ResourceName;
