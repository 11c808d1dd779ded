//! Upstream sensor binding
//!
//! The binding is the one resource shared between the reconfiguration path
//! and the read path, so it is modeled as an explicit state machine
//! (Unbound -> Bound -> Rebinding -> Bound) behind an [`ArcSwap`]:
//! readers take a whole-state snapshot without locking, writers swap whole
//! states atomically. A read that starts during a rebind completes against
//! the previous handle; no reader can observe a half-replaced binding.

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use contracts::{ComponentConfig, ComponentError, Dependencies, Resource, ResourceName, Sensor};
use tracing::debug;

use crate::config::SENSOR_ATTRIBUTE;

/// Binding lifecycle state.
///
/// `Rebinding` carries the previous handle so reads issued mid-rebind keep
/// a consistent upstream until the new handle is published.
pub enum BindingState {
    /// No upstream bound yet; reads fail
    Unbound,

    /// Steady state
    Bound {
        dependency: ResourceName,
        source: Arc<dyn Sensor>,
    },

    /// A reconfiguration is resolving a new handle
    Rebinding {
        dependency: ResourceName,
        previous: Arc<dyn Sensor>,
    },
}

/// Atomically replaceable handle to the upstream sensor.
pub struct SensorBinding {
    state: ArcSwap<BindingState>,
    // Serializes writers; readers never take this.
    rebind_lock: Mutex<()>,
}

impl SensorBinding {
    pub fn new() -> Self {
        Self {
            state: ArcSwap::from_pointee(BindingState::Unbound),
            rebind_lock: Mutex::new(()),
        }
    }

    /// Snapshot the handle a read should use.
    ///
    /// # Errors
    /// [`ComponentError::Binding`] while unbound.
    pub fn current(&self) -> Result<Arc<dyn Sensor>, ComponentError> {
        match &*self.state.load_full() {
            BindingState::Unbound => Err(ComponentError::binding(
                SENSOR_ATTRIBUTE,
                "no upstream sensor is bound; reconfigure the component first",
            )),
            BindingState::Bound { source, .. } => Ok(Arc::clone(source)),
            BindingState::Rebinding { previous, .. } => Ok(Arc::clone(previous)),
        }
    }

    /// Replace the bound handle from a new configuration.
    ///
    /// Idempotent and re-entrant: the host may call this on every
    /// configuration change. On failure the previous state is restored
    /// exactly, so a failed rebind never leaves a partially-bound handle.
    pub fn rebind(
        &self,
        config: &ComponentConfig,
        dependencies: &Dependencies,
    ) -> Result<(), ComponentError> {
        let _guard = self
            .rebind_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let dependency: ResourceName = config
            .str_attribute(SENSOR_ATTRIBUTE)
            .ok_or_else(|| {
                ComponentError::config_validation(
                    SENSOR_ATTRIBUTE,
                    "is required in the configuration and must be a string",
                )
            })?
            .into();

        debug!(dependency = %dependency, "rebinding upstream sensor");

        let previous = self.state.load_full();
        if let BindingState::Bound {
            dependency: bound_dependency,
            source,
        } = &*previous
        {
            // Keep the old handle readable while the new one resolves.
            self.state.store(Arc::new(BindingState::Rebinding {
                dependency: bound_dependency.clone(),
                previous: Arc::clone(source),
            }));
        }

        match resolve(&dependency, dependencies) {
            Ok(source) => {
                self.state
                    .store(Arc::new(BindingState::Bound { dependency, source }));
                Ok(())
            }
            Err(err) => {
                self.state.store(previous);
                Err(err)
            }
        }
    }
}

impl Default for SensorBinding {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up the named dependency and narrow it to the sensor capability.
fn resolve(
    dependency: &ResourceName,
    dependencies: &Dependencies,
) -> Result<Arc<dyn Sensor>, ComponentError> {
    let resource = dependencies.get(dependency.as_str()).ok_or_else(|| {
        ComponentError::binding(dependency.as_str(), "not found during reconfiguration")
    })?;

    Arc::clone(resource).as_sensor().ok_or_else(|| {
        ComponentError::binding(
            dependency.as_str(),
            "does not implement the sensor capability",
        )
    })
}
