//! Registry of selectable advancers
//!
//! Each advancer describes itself with a canonical name and aliases. The
//! registry indexes instances under every name and hands out fresh boxes.
//! Advancers are stateless zero-sized types, so cloning one is only a box
//! allocation.

use super::Advancer;
use bevy::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Advancers indexed by canonical name and by alias
#[derive(Resource)]
pub struct AdvancerRegistry {
    advancers: HashMap<String, Box<dyn Advancer>>,
}

impl AdvancerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            advancers: HashMap::new(),
        }
    }

    /// Register the advancers that ship with the benchmark
    pub fn with_standard_advancers(mut self) -> Self {
        use super::{DeferredPairwise, SequentialPairwise};

        self.register_advancer(Box::new(SequentialPairwise));
        self.register_advancer(Box::new(DeferredPairwise));

        self
    }

    pub fn with_advancer(mut self, advancer: Box<dyn Advancer>) -> Self {
        self.register_advancer(advancer);
        self
    }

    pub fn register_advancer(&mut self, advancer: Box<dyn Advancer>) {
        for alias in advancer.aliases() {
            self.advancers.insert(alias.to_string(), advancer.clone_box());
        }
        self.advancers.insert(advancer.name().to_string(), advancer);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Advancer>, String> {
        self.advancers
            .get(name)
            .map(|advancer| advancer.clone_box())
            .ok_or_else(|| {
                let alias_names: Vec<String> =
                    self.list_aliases().into_iter().map(|(alias, _)| alias).collect();
                format!(
                    "Unknown advancer: '{}'. Available advancers: {}. Aliases: {}",
                    name,
                    self.list_available().join(", "),
                    alias_names.join(", ")
                )
            })
    }

    /// Sorted canonical names
    pub fn list_available(&self) -> Vec<String> {
        self.advancers
            .values()
            .map(|advancer| advancer.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(alias, canonical)` pairs sorted by alias
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .advancers
            .iter()
            .filter(|(key, advancer)| key.as_str() != advancer.name())
            .map(|(key, advancer)| (key.clone(), advancer.name().to_string()))
            .collect();

        aliases.sort();
        aliases
    }
}

impl Default for AdvancerRegistry {
    fn default() -> Self {
        Self::new().with_standard_advancers()
    }
}
