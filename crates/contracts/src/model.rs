//! Model - Registry identifier of a component implementation
//!
//! A model names one implementation a module provides, as the triple
//! `namespace:family:name`. The host selects a model string in its
//! configuration and the registry resolves it to a constructor.

use std::fmt;

/// Model triple under which a component implementation is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Model {
    /// Organization namespace (e.g., "atacke")
    pub namespace: &'static str,

    /// Model family (e.g., "distance-calculation")
    pub family: &'static str,

    /// Implementation name (e.g., "ultrasonic-distance-calculation")
    pub name: &'static str,
}

impl Model {
    /// Create a model triple. `const` so components can expose their model
    /// as an associated constant.
    pub const fn new(namespace: &'static str, family: &'static str, name: &'static str) -> Self {
        Self {
            namespace,
            family,
            name,
        }
    }

    /// Whether `requested` is the colon-joined form of this model.
    pub fn matches(&self, requested: &str) -> bool {
        let mut parts = requested.splitn(3, ':');
        parts.next() == Some(self.namespace)
            && parts.next() == Some(self.family)
            && parts.next() == Some(self.name)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.family, self.name)
    }
}
