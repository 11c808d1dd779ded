//! DistanceCalculation component
//!
//! Reads `distance` (meters) from the bound upstream sensor and republishes
//! it as `distanceInCentimeters` and `distanceInInches`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use contracts::{
    AttributeMap, ComponentConfig, ComponentError, Dependencies, Geometry, Model, ModelEntry,
    Readings, Registry, Resource, ResourceName, Sensor,
};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::binding::SensorBinding;
use crate::config::validate_config;

// Conversion constants
pub const METER_TO_CENTIMETER_MULTIPLE: f64 = 100.0;
pub const METER_TO_INCH_MULTIPLE: f64 = 39.37;

/// Entry expected in the upstream reading, unit meters.
pub const DISTANCE_READING: &str = "distance";

/// Output reading keys.
pub const CENTIMETERS_READING: &str = "distanceInCentimeters";
pub const INCHES_READING: &str = "distanceInInches";

/// Sensor component that converts upstream meter readings into
/// centimeters and inches.
pub struct DistanceCalculation {
    name: ResourceName,
    binding: SensorBinding,
}

impl std::fmt::Debug for DistanceCalculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceCalculation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl DistanceCalculation {
    /// Model this component is registered under.
    pub const MODEL: Model = Model::new(
        "atacke",
        "distance-calculation",
        "ultrasonic-distance-calculation",
    );

    /// Construct and bind, the way the host does: validate the
    /// configuration, then run the first reconfiguration.
    #[instrument(name = "distance_calculation_new", skip_all, fields(component = %config.name))]
    pub fn new(
        config: &ComponentConfig,
        dependencies: &Dependencies,
    ) -> Result<Self, ComponentError> {
        validate_config(config)?;
        let component = Self {
            name: config.name.clone(),
            binding: SensorBinding::new(),
        };
        component.reconfigure(config, dependencies)?;
        Ok(component)
    }

    /// Re-resolve the upstream sensor from a new configuration.
    ///
    /// Atomic with respect to concurrent reads: a read in flight finishes
    /// against whichever handle was current when it started.
    #[instrument(name = "distance_calculation_reconfigure", skip_all, fields(component = %self.name))]
    pub fn reconfigure(
        &self,
        config: &ComponentConfig,
        dependencies: &Dependencies,
    ) -> Result<(), ComponentError> {
        debug!("reconfiguring distance calculation component");
        self.binding.rebind(config, dependencies)
    }

    /// Register this model with a module registry.
    pub fn register(registry: &mut Registry) {
        registry.register(ModelEntry {
            model: Self::MODEL,
            validate: validate_config,
            construct: Self::construct,
        });
    }

    fn construct(
        config: &ComponentConfig,
        dependencies: &Dependencies,
    ) -> Result<Arc<dyn Resource>, ComponentError> {
        Ok(Arc::new(Self::new(config, dependencies)?))
    }
}

#[async_trait]
impl Resource for DistanceCalculation {
    fn name(&self) -> &ResourceName {
        &self.name
    }

    async fn do_command(
        &self,
        _command: &AttributeMap,
        _timeout: Option<Duration>,
    ) -> Result<AttributeMap, ComponentError> {
        error!(component = %self.name, "`do_command` is not implemented");
        Err(ComponentError::unsupported("do_command"))
    }

    async fn get_geometries(
        &self,
        _extra: Option<&AttributeMap>,
        _timeout: Option<Duration>,
    ) -> Result<Vec<Geometry>, ComponentError> {
        error!(component = %self.name, "`get_geometries` is not implemented");
        Err(ComponentError::unsupported("get_geometries"))
    }

    fn as_sensor(self: Arc<Self>) -> Option<Arc<dyn Sensor>> {
        Some(self)
    }
}

#[async_trait]
impl Sensor for DistanceCalculation {
    /// Fetch the upstream `distance` reading and convert it.
    ///
    /// `extra` and `timeout` are forwarded to the upstream sensor
    /// unmodified. Upstream failure, or a reading without a numeric
    /// `distance` entry, propagates to the caller; no partial result is
    /// ever returned.
    #[instrument(name = "distance_calculation_get_readings", skip_all, fields(component = %self.name))]
    async fn get_readings(
        &self,
        extra: Option<&AttributeMap>,
        timeout: Option<Duration>,
    ) -> Result<Readings, ComponentError> {
        let source = self.binding.current()?;
        let upstream = source.get_readings(extra, timeout).await?;

        // Upstream reports meters.
        let meters = upstream
            .get(DISTANCE_READING)
            .and_then(Value::as_f64)
            .ok_or_else(|| ComponentError::missing_reading(DISTANCE_READING))?;

        let mut readings = Readings::with_capacity(2);
        readings.insert(
            CENTIMETERS_READING.to_string(),
            Value::from(meters * METER_TO_CENTIMETER_MULTIPLE),
        );
        readings.insert(
            INCHES_READING.to_string(),
            Value::from(meters * METER_TO_INCH_MULTIPLE),
        );
        Ok(readings)
    }
}
