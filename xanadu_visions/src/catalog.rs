// Concept catalog: the registry mapping concept names to generators.
//
// `ConceptCatalog::builtin()` registers every `Concept` in canonical order.
// Further generators can be registered at run time as closures; the catalog
// keeps registration order so `concepts()` is a stable ordered list that
// `markov.rs` can build a transition matrix over.
//
// Lookups by unknown name are not errors. `describe` answers them with
// `FALLBACK_DESCRIPTION`, since the Markov walk and the opening visions may
// name concepts that a trimmed or customised catalog lacks.

use crate::concept::Concept;
use crate::error::Result;
use std::fmt;
use xanadu_prng::DreamRng;

/// Text returned for a concept the catalog does not know.
pub const FALLBACK_DESCRIPTION: &str =
    "undefined mathematical patterns beyond current comprehension";

/// A description generator: control value and random source in, fragment out.
pub type Generator = Box<dyn Fn(f64, &mut DreamRng) -> Result<String> + Send + Sync>;

/// Ordered registry of named description generators.
pub struct ConceptCatalog {
    entries: Vec<(String, Generator)>,
}

impl ConceptCatalog {
    /// An empty catalog. Every lookup falls back until something is registered.
    pub fn empty() -> Self {
        ConceptCatalog {
            entries: Vec::new(),
        }
    }

    /// A catalog holding every built-in concept in canonical order.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for concept in Concept::ALL {
            catalog.register(concept.name(), move |value, rng| concept.describe(value, rng));
        }
        catalog
    }

    /// Register `generator` under `name`.
    ///
    /// Re-registering an existing name replaces its generator in place, so
    /// the ordering of the catalog does not change.
    pub fn register<F>(&mut self, name: &str, generator: F)
    where
        F: Fn(f64, &mut DreamRng) -> Result<String> + Send + Sync + 'static,
    {
        let generator: Generator = Box::new(generator);
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = generator,
            None => self.entries.push((name.to_string(), generator)),
        }
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Registered names in registration order.
    pub fn concepts(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Describe `concept` using control value `value` (expected in [0, 1]).
    ///
    /// Unknown names yield `FALLBACK_DESCRIPTION`. Each call samples afresh;
    /// nothing is cached.
    pub fn describe(&self, concept: &str, value: f64, rng: &mut DreamRng) -> Result<String> {
        match self.entries.iter().find(|(n, _)| n == concept) {
            Some((_, generator)) => generator(value, rng),
            None => {
                tracing::debug!(concept, "no generator registered, using fallback");
                Ok(FALLBACK_DESCRIPTION.to_string())
            }
        }
    }
}

impl Default for ConceptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ConceptCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConceptCatalog")
            .field("concepts", &self.concepts())
            .finish()
    }
}
