//! # Distance Calculation
//!
//! Sensor component that wraps an existing distance sensor and republishes
//! its meter readings as centimeters and inches.
//!
//! Responsibilities:
//! - Validate the `sensor` configuration attribute and report it as an
//!   implicit dependency
//! - Bind (and atomically rebind) the upstream sensor handle
//! - Transform each `distance` reading into the two derived units
//!
//! The component holds no state beyond the current binding; every reading
//! and every reconfiguration cycle is self-contained.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = Registry::new();
//! DistanceCalculation::register(&mut registry);
//!
//! let implicit = registry.validate(&config)?;          // ["ultrasonic"]
//! let component = registry.construct(&config, &deps)?; // bound and ready
//! let readings = component.as_sensor().unwrap().get_readings(None, None).await?;
//! ```

pub mod binding;
pub mod component;
pub mod config;
pub mod mock;

pub use binding::{BindingState, SensorBinding};
pub use component::{
    DistanceCalculation, CENTIMETERS_READING, DISTANCE_READING, INCHES_READING,
    METER_TO_CENTIMETER_MULTIPLE, METER_TO_INCH_MULTIPLE,
};
pub use config::{validate_config, SENSOR_ATTRIBUTE};
pub use mock::{MockOpaqueResource, MockSensor, MockSensorConfig, RecordedCall};
