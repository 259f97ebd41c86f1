// Markov chain over concepts: a random row-stochastic transition matrix and
// the weighted walk that chooses which concept each chain vision describes.
//
// The matrix is built once per run. Every row gets one independent uniform
// weight per column, then is divided by its sum. A row whose weights sum to
// zero (or to anything non-finite) becomes uniform instead. Rows and columns
// follow the order of the concept list passed in, which for the default run
// is the catalog's canonical order, so iteration is deterministic.
//
// Sampling walks the current row accumulating probability and stops at the
// first positive-probability entry whose cumulative sum reaches the draw.
// Rounding can leave a full row summing to just under 1.0; a draw past the
// last cumulative sum lands on the row's first concept, even when that
// concept's own probability is zero.
//
// Depends on `catalog.rs` only in `MarkovDriver::walk`, which describes each
// visited state.

use crate::catalog::ConceptCatalog;
use crate::error::{Result, VisionError};
use xanadu_prng::DreamRng;

/// Tolerance for row sums of explicitly supplied probability rows.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Row-stochastic matrix over an ordered, duplicate-free concept set.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    concepts: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TransitionMatrix {
    /// Build a fresh random matrix over `concepts`.
    pub fn build(concepts: &[String], rng: &mut DreamRng) -> Result<Self> {
        check_concepts(concepts)?;
        let n = concepts.len();
        let weights: Vec<Vec<f64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.next_f64()).collect::<Vec<f64>>())
            .collect();
        let matrix = Self::from_weights(concepts, weights)?;
        tracing::debug!(concepts = n, "built transition matrix");
        Ok(matrix)
    }

    /// Normalise raw non-negative weights row by row.
    ///
    /// A row whose sum is not a positive finite number becomes uniform.
    pub fn from_weights(concepts: &[String], weights: Vec<Vec<f64>>) -> Result<Self> {
        check_concepts(concepts)?;
        check_shape(concepts.len(), &weights)?;
        for (i, row) in weights.iter().enumerate() {
            if row.iter().any(|w| *w < 0.0) {
                return Err(VisionError::InvalidMatrix(format!(
                    "row '{}' has a negative weight",
                    concepts[i]
                )));
            }
        }
        let rows = weights.into_iter().map(normalize_row).collect();
        Ok(TransitionMatrix {
            concepts: concepts.to_vec(),
            rows,
        })
    }

    /// Accept explicit probability rows.
    ///
    /// Every entry must be finite and non-negative and every row must sum to
    /// 1 within `ROW_SUM_TOLERANCE`.
    pub fn from_rows(concepts: &[String], rows: Vec<Vec<f64>>) -> Result<Self> {
        check_concepts(concepts)?;
        check_shape(concepts.len(), &rows)?;
        for (name, row) in concepts.iter().zip(&rows) {
            if row.iter().any(|p| !p.is_finite() || *p < 0.0) {
                return Err(VisionError::InvalidMatrix(format!(
                    "row '{name}' has a negative or non-finite probability"
                )));
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(VisionError::InvalidMatrix(format!(
                    "row '{name}' sums to {sum}, not 1"
                )));
            }
        }
        Ok(TransitionMatrix {
            concepts: concepts.to_vec(),
            rows,
        })
    }

    /// The concept set in row/column order.
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    fn index_of(&self, concept: &str) -> Option<usize> {
        self.concepts.iter().position(|c| c == concept)
    }

    /// Outgoing probabilities of `from`, in column order.
    pub fn row(&self, from: &str) -> Option<&[f64]> {
        self.index_of(from).map(|i| self.rows[i].as_slice())
    }

    /// Probability of moving from `from` to `to`.
    pub fn probability(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Some(self.rows[i][j])
    }

    /// Sample the successor of `current`.
    pub fn next_state(&self, current: &str, rng: &mut DreamRng) -> Result<&str> {
        let draw = rng.next_f64();
        self.next_state_with_draw(current, draw)
    }

    /// Pick the successor of `current` for a given uniform draw in [0, 1].
    pub fn next_state_with_draw(&self, current: &str, draw: f64) -> Result<&str> {
        let row = self
            .row(current)
            .ok_or_else(|| VisionError::UnknownConcept(current.to_string()))?;

        let mut cumulative = 0.0;
        for (concept, &p) in self.concepts.iter().zip(row) {
            cumulative += p;
            if p > 0.0 && draw <= cumulative {
                return Ok(concept.as_str());
            }
        }
        // Rounding left the row total short of the draw.
        Ok(self.concepts[0].as_str())
    }
}

/// Divide a row by its sum, or make it uniform when the sum is unusable.
fn normalize_row(mut row: Vec<f64>) -> Vec<f64> {
    let total: f64 = row.iter().sum();
    if total > 0.0 && total.is_finite() {
        for w in &mut row {
            *w /= total;
        }
    } else {
        let uniform = 1.0 / row.len() as f64;
        row.iter_mut().for_each(|w| *w = uniform);
    }
    row
}

fn check_concepts(concepts: &[String]) -> Result<()> {
    if concepts.is_empty() {
        return Err(VisionError::InvalidConcepts("concept set is empty".into()));
    }
    for (i, name) in concepts.iter().enumerate() {
        if concepts[..i].contains(name) {
            return Err(VisionError::InvalidConcepts(format!(
                "'{name}' appears more than once"
            )));
        }
    }
    Ok(())
}

fn check_shape(n: usize, rows: &[Vec<f64>]) -> Result<()> {
    if rows.len() != n || rows.iter().any(|r| r.len() != n) {
        return Err(VisionError::InvalidMatrix(format!(
            "expected a {n}x{n} matrix"
        )));
    }
    Ok(())
}

/// One step of the walk, with the description of the state it reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub description: String,
}

impl Transition {
    /// The sentence printed for this step.
    pub fn narration(&self) -> String {
        format!(
            "Coleridge's visions transition from a state of '{}' to {}",
            self.from, self.description
        )
    }
}

/// Drives the weighted random walk over a transition matrix.
///
/// Starts at the first concept of the matrix, never at a random state.
#[derive(Debug, Clone)]
pub struct MarkovDriver {
    matrix: TransitionMatrix,
    current: String,
}

impl MarkovDriver {
    pub fn new(matrix: TransitionMatrix) -> Self {
        let current = matrix.concepts[0].clone();
        MarkovDriver { matrix, current }
    }

    /// Build a random matrix over every concept in `catalog`.
    pub fn from_catalog(catalog: &ConceptCatalog, rng: &mut DreamRng) -> Result<Self> {
        let matrix = TransitionMatrix::build(&catalog.concepts(), rng)?;
        Ok(Self::new(matrix))
    }

    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// The state the walk currently sits in.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Advance one state, returning `(previous, next)`.
    pub fn step(&mut self, rng: &mut DreamRng) -> Result<(String, String)> {
        let next = self.matrix.next_state(&self.current, rng)?.to_string();
        let previous = std::mem::replace(&mut self.current, next.clone());
        Ok((previous, next))
    }

    /// Take `steps` steps, describing each newly reached state.
    ///
    /// The control value for a step is drawn before its successor, so a
    /// seeded run reproduces the same chain.
    pub fn walk(
        &mut self,
        catalog: &ConceptCatalog,
        steps: usize,
        rng: &mut DreamRng,
    ) -> Result<Vec<Transition>> {
        let mut transitions = Vec::with_capacity(steps);
        for step in 0..steps {
            let value = rng.next_f64();
            let (from, to) = self.step(rng)?;
            tracing::debug!(step, from = %from, to = %to, value, "chain transition");
            let description = catalog.describe(&to, value, rng)?;
            transitions.push(Transition {
                from,
                to,
                description,
            });
        }
        Ok(transitions)
    }
}
