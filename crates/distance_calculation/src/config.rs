//! Configuration validation
//!
//! Rules:
//! - `sensor` attribute present
//! - `sensor` attribute is a string
//!
//! Validation runs before any dependency resolution so a malformed
//! configuration is reported deterministically instead of surfacing as a
//! late binding failure.

use contracts::{ComponentConfig, ComponentError};
use serde_json::Value;

/// Attribute naming the upstream distance sensor.
pub const SENSOR_ATTRIBUTE: &str = "sensor";

/// Attributes that name dependencies this component needs resolved.
const DEPENDENCY_ATTRIBUTES: &[&str] = &[SENSOR_ATTRIBUTE];

/// Validate the configuration and collect implicit dependency names.
///
/// Returns the resource names the host must resolve before the component
/// can be constructed or reconfigured, here exactly the configured
/// upstream sensor.
pub fn validate_config(config: &ComponentConfig) -> Result<Vec<String>, ComponentError> {
    let mut implicit = Vec::with_capacity(DEPENDENCY_ATTRIBUTES.len());

    for attribute in DEPENDENCY_ATTRIBUTES {
        match config.attributes.get(*attribute) {
            Some(Value::String(dependency)) => implicit.push(dependency.clone()),
            Some(other) => {
                return Err(ComponentError::config_validation(
                    *attribute,
                    format!("must be a string, got {other}"),
                ))
            }
            None => {
                return Err(ComponentError::config_validation(
                    *attribute,
                    "is required in the configuration",
                ))
            }
        }
    }

    Ok(implicit)
}
