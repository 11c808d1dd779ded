//! ComponentConfig - host-delivered component configuration
//!
//! One configuration document per component instance, supplied at
//! construction time and again on every reconfiguration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AttributeMap, ResourceName};

/// Configuration for a single component instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Instance name the component is registered under
    pub name: ResourceName,

    /// Requested model, colon-joined (`namespace:family:name`)
    pub model: String,

    /// Model-specific attributes
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl ComponentConfig {
    /// Create a configuration with no attributes.
    pub fn new(name: impl Into<ResourceName>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Typed accessor: `Some` only when the attribute is present and a string.
    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
