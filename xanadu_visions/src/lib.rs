// Xanadu vision generator.
//
// Produces short "poetic vision" sentences by sampling numeric parameters
// (probabilities, eigenvectors, dimension counts, rates) and interpolating
// them into fixed templates, with a randomized Markov chain choosing which
// concept each later sentence describes.
//
// Architecture:
// - concept.rs: `Concept` enum, canonical ordering, per-concept generators
// - eigen.rs: Gram-matrix covariance and symmetric eigendecomposition
// - catalog.rs: `ConceptCatalog`, the ordered name -> generator registry
// - markov.rs: `TransitionMatrix` and the `MarkovDriver` walk
// - assembly.rs: opening visions, Poisson summary, chain, rendering
// - config.rs: `VisionConfig` loaded from JSON
// - error.rs: `VisionError`
// - logging.rs: tracing subscriber for the binary
//
// All randomness flows through one `xanadu_prng::DreamRng` passed by
// `&mut` reference, so a seed reproduces a run exactly.

pub mod assembly;
pub mod catalog;
pub mod concept;
pub mod config;
pub mod eigen;
pub mod error;
pub mod logging;
pub mod markov;

pub use assembly::{Composition, compose, render, run};
pub use catalog::{ConceptCatalog, FALLBACK_DESCRIPTION};
pub use concept::Concept;
pub use config::VisionConfig;
pub use error::{Result, VisionError};
pub use markov::{MarkovDriver, Transition, TransitionMatrix};
