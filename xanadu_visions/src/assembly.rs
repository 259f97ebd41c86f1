// Output assembly: turns a config into the ordered list of visions.
//
// A run produces, in order:
// 1. one opening vision per configured opening concept,
// 2. a Poisson-process summary with a freshly drawn rate,
// 3. `chain_steps` transitions from a `MarkovDriver` walk.
//
// `render` numbers them from 1 under a banner, separated by blank lines.
// Every random draw comes from the single `DreamRng` passed in, in the order
// listed above, so a seed fixes the whole text.

use crate::catalog::ConceptCatalog;
use crate::config::VisionConfig;
use crate::error::Result;
use crate::markov::MarkovDriver;
use xanadu_prng::DreamRng;

pub const BANNER: &str = "=== Xanadu: Visions of a Stochastic Dream ===";

const OPENING: &str = "Coleridge's opium-drenched visions populate my daydreams";

/// The text of one run and the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct Composition {
    pub seed: u64,
    pub visions: Vec<String>,
}

impl Composition {
    pub fn render(&self) -> String {
        render(&self.visions)
    }
}

/// Run the whole generator for `config` with the built-in catalog.
pub fn run(config: &VisionConfig) -> Result<Composition> {
    let mut rng = match config.seed {
        Some(seed) => DreamRng::new(seed),
        None => DreamRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), chain_steps = config.chain_steps, "composing visions");
    let catalog = ConceptCatalog::builtin();
    let visions = compose(config, &catalog, &mut rng)?;
    Ok(Composition {
        seed: rng.seed(),
        visions,
    })
}

/// Produce every vision of a run from `catalog` and `rng`.
///
/// The config is validated first; nothing is drawn from `rng` if it fails.
pub fn compose(
    config: &VisionConfig,
    catalog: &ConceptCatalog,
    rng: &mut DreamRng,
) -> Result<Vec<String>> {
    config.validate()?;
    let mut visions = Vec::with_capacity(config.opening_concepts.len() + 1 + config.chain_steps);

    for concept in &config.opening_concepts {
        let value = rng.next_f64();
        let description = catalog.describe(concept, value, rng)?;
        visions.push(format!("{OPENING} like {description}"));
    }

    let rate = rng.range_f64(config.poisson_rate_min, config.poisson_rate_max);
    visions.push(poisson_summary(rate));

    let mut driver = MarkovDriver::from_catalog(catalog, rng)?;
    let transitions = driver.walk(catalog, config.chain_steps, rng)?;
    visions.extend(transitions.iter().map(|t| t.narration()));

    Ok(visions)
}

/// The Poisson-process sentence for a rate in visions per hour.
pub fn poisson_summary(rate: f64) -> String {
    format!(
        "{OPENING} following a Poisson process, λ={rate:.2} visions per hour, \
         each a fleeting glimpse into the sublime and terrifying."
    )
}

/// Banner, then each vision as `n. text`, blocks separated by a blank line.
pub fn render(visions: &[String]) -> String {
    let mut out = String::from(BANNER);
    out.push_str("\n\n");
    for (i, vision) in visions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n\n", i + 1, vision));
    }
    out
}
