// Built-in concepts and their description generators.
//
// Each concept turns a control value in [0, 1] into a sentence fragment.
// Every built-in follows the same convention: `value > 0.5` picks the first
// phrasing, anything else picks the second. Some concepts also draw extra
// numbers from the shared `DreamRng` (a Poisson rate, an eigenvector, a loop
// count, ...) and embed them in the text, so two calls with identical
// arguments usually differ.
//
// `Concept::ALL` is the canonical ordering. `catalog.rs` registers the
// built-ins in this order and `markov.rs` uses it for rows and columns.

use crate::eigen;
use crate::error::Result;
use std::fmt;
use std::str::FromStr;
use xanadu_prng::DreamRng;

/// A built-in concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Concept {
    Fractal,
    Exponential,
    Chaotic,
    Periodic,
    Singular,
    Gaussian,
    Poisson,
    Eigenvector,
    Homotopy,
    Lagrangian,
    Manifold,
    Entropy,
}

impl Concept {
    /// All built-ins in canonical order.
    pub const ALL: [Concept; 12] = [
        Concept::Fractal,
        Concept::Exponential,
        Concept::Chaotic,
        Concept::Periodic,
        Concept::Singular,
        Concept::Gaussian,
        Concept::Poisson,
        Concept::Eigenvector,
        Concept::Homotopy,
        Concept::Lagrangian,
        Concept::Manifold,
        Concept::Entropy,
    ];

    /// The registry name, e.g. `"fractal"`.
    pub fn name(self) -> &'static str {
        match self {
            Concept::Fractal => "fractal",
            Concept::Exponential => "exponential",
            Concept::Chaotic => "chaotic",
            Concept::Periodic => "periodic",
            Concept::Singular => "singular",
            Concept::Gaussian => "gaussian",
            Concept::Poisson => "poisson",
            Concept::Eigenvector => "eigenvector",
            Concept::Homotopy => "homotopy",
            Concept::Lagrangian => "lagrangian",
            Concept::Manifold => "manifold",
            Concept::Entropy => "entropy",
        }
    }

    /// Generate a fresh description for this concept.
    ///
    /// Only `Eigenvector` can fail, and only if the eigensolver does not
    /// converge.
    pub fn describe(self, value: f64, rng: &mut DreamRng) -> Result<String> {
        let high = value > 0.5;
        let text = match self {
            Concept::Fractal => format!(
                "fractal blooms, each iteration revealing {}",
                pick(high, "more vibrant detail", "a deeper, swirling chaos")
            ),
            Concept::Exponential => format!(
                "an exponential surge, the intensity growing {}",
                pick(high, "to an ecstatic peak", "towards an overwhelming oblivion")
            ),
            Concept::Chaotic => format!(
                "a chaotic dance, where {}",
                pick(high, "patterns briefly emerge", "disorder reigns supreme")
            ),
            Concept::Periodic => format!(
                "periodic waves, cresting and falling with the rhythm of {}",
                pick(high, "a fevered pulse", "a slowly fading heartbeat")
            ),
            Concept::Singular => format!(
                "singularities, points of infinite density where {}",
                pick(high, "reality itself fractures", "consciousness dissolves")
            ),
            Concept::Gaussian => format!(
                "a Gaussian blur, where clarity peaks at the center and fades into {}",
                pick(high, "a hazy, dreamlike periphery", "an indistinct, ethereal mist")
            ),
            Concept::Poisson => {
                let rate = rng.range_f64(0.1, 5.0);
                format!(
                    "a Poisson distribution of phantasms, appearing at λ={rate:.2} with a \
                     seemingly random, yet statistically predictable, frequency, like {}",
                    pick(high, "sparks from a dying ember", "glimmers in the deepest ocean")
                )
            }
            Concept::Eigenvector => {
                let cov = eigen::random_covariance(rng);
                let v = eigen::dominant_axis(&cov)?.eigenvector;
                format!(
                    "eigenvectors of a shimmering covariance matrix, principal components \
                     whispering {} from the stochastic depths of Xanadu. The dominant \
                     eigenvector, ({:.2}, {:.2}, {:.2}), guides the dream's trajectory.",
                    pick(high, "forgotten stanzas", "half-remembered hymns"),
                    v.x,
                    v.y,
                    v.z
                )
            }
            Concept::Homotopy => {
                let loops = loop_count(rng);
                format!(
                    "homotopy classes winding through the labyrinth of cognition, where each \
                     of the {loops} loops is {}, a topological knot in the fabric of \
                     consciousness.",
                    pick(
                        high,
                        "a recursion into forgotten poetry",
                        "a contraction towards silence"
                    )
                )
            }
            Concept::Lagrangian => {
                let energy = rng.range_f64(1.0, 10.0);
                format!(
                    "a Lagrangian of desire, its action stationary at an energy of {energy:.2}, \
                     the path of least resistance {}",
                    pick(
                        high,
                        "curving through luminous valleys",
                        "sinking into a dark potential well"
                    )
                )
            }
            Concept::Manifold => {
                let dimensions = rng.range_u64(3, 11);
                format!(
                    "a {dimensions}-dimensional manifold folding upon itself, its curvature {}",
                    pick(
                        high,
                        "bending thought into impossible geodesics",
                        "flattening memory into a featureless plane"
                    )
                )
            }
            Concept::Entropy => {
                let entropy = rng.range_f64(0.1, 1.0);
                format!(
                    "entropy rising to {entropy:.2} nats, every ordered image {}",
                    pick(
                        high,
                        "scattering into a glittering haze",
                        "melting into a lukewarm sea"
                    )
                )
            }
        };
        Ok(text)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Concept {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Concept::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown concept '{s}'"))
    }
}

/// Loop count in [1, 5], taken as the floor of a uniform draw in [1, 6).
fn loop_count(rng: &mut DreamRng) -> u32 {
    (rng.range_f64(1.0, 6.0).floor() as u32).min(5)
}

fn pick(high: bool, above: &'static str, below: &'static str) -> &'static str {
    if high { above } else { below }
}
