//! Mock upstream sensors
//!
//! Test doubles standing in for a hardware-backed distance sensor,
//! with injectable failure scenarios. Public so the integration tests
//! crate can drive full lifecycles without a host runtime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use contracts::{
    AttributeMap, ComponentError, Geometry, Readings, Resource, ResourceName, Sensor, Vector3,
};
use serde_json::Value;

use crate::component::DISTANCE_READING;

/// Mock sensor behavior (failure scenarios injectable)
#[derive(Debug, Default, Clone)]
pub struct MockSensorConfig {
    /// Readings returned by each `get_readings` call
    pub readings: Readings,
    /// Whether reads should fail
    pub fail_reads: bool,
}

impl MockSensorConfig {
    /// Readings containing a single `distance` entry, unit meters.
    pub fn with_distance(meters: f64) -> Self {
        Self {
            readings: Readings::from([(DISTANCE_READING.to_string(), Value::from(meters))]),
            fail_reads: false,
        }
    }
}

/// Arguments the mock saw on its most recent read.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub extra: Option<AttributeMap>,
    pub timeout: Option<Duration>,
}

/// Mock distance sensor
pub struct MockSensor {
    name: ResourceName,
    config: Mutex<MockSensorConfig>,
    read_count: AtomicU64,
    last_call: Mutex<Option<RecordedCall>>,
}

impl MockSensor {
    /// Mock that reports `meters` on every read.
    pub fn new(name: &str, meters: f64) -> Self {
        Self::with_config(name, MockSensorConfig::with_distance(meters))
    }

    /// Mock with explicit behavior.
    pub fn with_config(name: &str, config: MockSensorConfig) -> Self {
        Self {
            name: name.into(),
            config: Mutex::new(config),
            read_count: AtomicU64::new(0),
            last_call: Mutex::new(None),
        }
    }

    /// Replace the reported distance, keeping other behavior.
    pub fn set_distance(&self, meters: f64) {
        self.lock_config().readings = Readings::from([(
            DISTANCE_READING.to_string(),
            Value::from(meters),
        )]);
    }

    /// Replace the full readings map.
    pub fn set_readings(&self, readings: Readings) {
        self.lock_config().readings = readings;
    }

    /// Toggle read failure injection.
    pub fn set_fail_reads(&self, fail: bool) {
        self.lock_config().fail_reads = fail;
    }

    /// How many reads this mock has served or rejected.
    pub fn read_count(&self) -> u64 {
        self.read_count.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent read, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.last_call
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lock_config(&self) -> std::sync::MutexGuard<'_, MockSensorConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Resource for MockSensor {
    fn name(&self) -> &ResourceName {
        &self.name
    }

    async fn do_command(
        &self,
        _command: &AttributeMap,
        _timeout: Option<Duration>,
    ) -> Result<AttributeMap, ComponentError> {
        Err(ComponentError::unsupported("do_command"))
    }

    async fn get_geometries(
        &self,
        _extra: Option<&AttributeMap>,
        _timeout: Option<Duration>,
    ) -> Result<Vec<Geometry>, ComponentError> {
        Ok(vec![Geometry {
            label: self.name.to_string(),
            center: Vector3::default(),
        }])
    }

    fn as_sensor(self: Arc<Self>) -> Option<Arc<dyn Sensor>> {
        Some(self)
    }
}

#[async_trait]
impl Sensor for MockSensor {
    async fn get_readings(
        &self,
        extra: Option<&AttributeMap>,
        timeout: Option<Duration>,
    ) -> Result<Readings, ComponentError> {
        self.read_count.fetch_add(1, Ordering::SeqCst);
        *self
            .last_call
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(RecordedCall {
            extra: extra.cloned(),
            timeout,
        });

        let config = self.lock_config();
        if config.fail_reads {
            return Err(ComponentError::read(
                self.name.as_str(),
                "injected read failure",
            ));
        }
        Ok(config.readings.clone())
    }
}

/// Resource without the sensor capability, for binding-mismatch scenarios.
pub struct MockOpaqueResource {
    name: ResourceName,
}

impl MockOpaqueResource {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Resource for MockOpaqueResource {
    fn name(&self) -> &ResourceName {
        &self.name
    }

    async fn do_command(
        &self,
        _command: &AttributeMap,
        _timeout: Option<Duration>,
    ) -> Result<AttributeMap, ComponentError> {
        Err(ComponentError::unsupported("do_command"))
    }

    async fn get_geometries(
        &self,
        _extra: Option<&AttributeMap>,
        _timeout: Option<Duration>,
    ) -> Result<Vec<Geometry>, ComponentError> {
        Err(ComponentError::unsupported("get_geometries"))
    }
}
