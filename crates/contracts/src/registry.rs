//! Model registry - maps model identifiers to component constructors
//!
//! A module registers every model it provides; the host then drives the
//! lifecycle through the registry: `validate` first (collecting implicit
//! dependencies), then `construct` once those dependencies are resolved.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{ComponentConfig, ComponentError, Dependencies, Model, Resource};

/// Validation hook: checks a configuration and returns the implicit
/// dependency names the host must resolve before construction.
pub type ValidateFn = fn(&ComponentConfig) -> Result<Vec<String>, ComponentError>;

/// Constructor: builds a component from validated configuration and
/// resolved dependencies.
pub type ConstructFn =
    fn(&ComponentConfig, &Dependencies) -> Result<Arc<dyn Resource>, ComponentError>;

/// One registered model implementation.
pub struct ModelEntry {
    pub model: Model,
    pub validate: ValidateFn,
    pub construct: ConstructFn,
}

/// Registry of the models this module provides.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, ModelEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model. A later registration under the same model
    /// replaces the earlier one.
    pub fn register(&mut self, entry: ModelEntry) {
        self.entries.insert(entry.model.to_string(), entry);
    }

    /// Validate `config` against the model it requests.
    ///
    /// # Errors
    /// [`ComponentError::ModelNotFound`] when the model is unknown, plus
    /// whatever the model's own validation hook reports.
    pub fn validate(&self, config: &ComponentConfig) -> Result<Vec<String>, ComponentError> {
        let entry = self.entry_for(&config.model)?;
        (entry.validate)(config)
    }

    /// Construct a component from validated configuration and resolved
    /// dependencies.
    pub fn construct(
        &self,
        config: &ComponentConfig,
        dependencies: &Dependencies,
    ) -> Result<Arc<dyn Resource>, ComponentError> {
        let entry = self.entry_for(&config.model)?;
        (entry.construct)(config, dependencies)
    }

    /// Registered model identifiers, for host-side diagnostics.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn entry_for(&self, model: &str) -> Result<&ModelEntry, ComponentError> {
        self.entries
            .get(model)
            .ok_or_else(|| ComponentError::ModelNotFound {
                model: model.to_string(),
            })
    }
}
