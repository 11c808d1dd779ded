//! Capability traits - host-facing component interface
//!
//! Every component implements [`Resource`]; components that can be polled
//! for readings additionally implement [`Sensor`]. Handles are held as
//! trait objects inside a host-owned [`Dependencies`] map, so the traits
//! are async via `async_trait` and narrowable through capability probes.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{ComponentError, Geometry, ResourceName};

/// Free-form attribute mapping, as delivered in host configuration
/// documents and `do_command` payloads.
pub type AttributeMap = HashMap<String, Value>;

/// One batch of named scalar readings. Ephemeral per call.
pub type Readings = HashMap<String, Value>;

/// Resolved dependency handles, keyed by resource name. Owned by the host;
/// components borrow it during (re)configuration and keep at most a
/// capability-narrowed `Arc` out of it.
pub type Dependencies = HashMap<ResourceName, Arc<dyn Resource>>;

/// Base capability every component implements.
///
/// `do_command` and `get_geometries` are optional capabilities: components
/// that do not support them fail with
/// [`ComponentError::Unsupported`] instead of attempting partial behavior.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Instance name this component was configured under
    fn name(&self) -> &ResourceName;

    /// Execute an arbitrary model-specific command
    async fn do_command(
        &self,
        command: &AttributeMap,
        timeout: Option<Duration>,
    ) -> Result<AttributeMap, ComponentError>;

    /// Describe the physical geometry of the component
    async fn get_geometries(
        &self,
        extra: Option<&AttributeMap>,
        timeout: Option<Duration>,
    ) -> Result<Vec<Geometry>, ComponentError>;

    /// Narrow this handle to the sensor capability.
    ///
    /// Returns `None` unless the component implements [`Sensor`];
    /// implementors that do must override this to return `Some(self)`.
    fn as_sensor(self: Arc<Self>) -> Option<Arc<dyn Sensor>> {
        None
    }
}

impl std::fmt::Debug for dyn Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("name", self.name())
            .finish_non_exhaustive()
    }
}

/// Sensor capability: a component that produces readings on demand.
#[async_trait]
pub trait Sensor: Resource {
    /// Fetch one batch of readings.
    ///
    /// `extra` and `timeout` are caller-supplied and forwarded as-is to
    /// whatever the implementation reads from; no timeout is enforced here.
    ///
    /// # Errors
    /// Any failure to produce a complete batch must surface here. Partial
    /// or empty success results are not permitted.
    async fn get_readings(
        &self,
        extra: Option<&AttributeMap>,
        timeout: Option<Duration>,
    ) -> Result<Readings, ComponentError>;
}

impl std::fmt::Debug for dyn Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sensor")
            .field("name", self.name())
            .finish_non_exhaustive()
    }
}
