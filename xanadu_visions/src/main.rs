// Xanadu vision generator: CLI entry point.
//
// Prints a banner followed by numbered visions: three opening visions, a
// Poisson-process summary and five Markov chain transitions. With no
// arguments every run differs; the seed in use is logged at info level.
//
// Usage:
//   cargo run -p xanadu_visions -- [--seed N] [--steps N] [--config PATH]

use std::path::Path;
use xanadu_visions::VisionConfig;
use xanadu_visions::logging::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let config_path: Option<String> = parse_flag(&args, "--config");
    let mut config = match config_path {
        Some(path) => match VisionConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {path}: {e}");
                std::process::exit(1);
            }
        },
        None => VisionConfig::default(),
    };
    if let Some(seed) = parse_flag(&args, "--seed") {
        config.seed = Some(seed);
    }
    if let Some(steps) = parse_flag(&args, "--steps") {
        config.chain_steps = steps;
    }

    match xanadu_visions::run(&config) {
        Ok(composition) => print!("{}", composition.render()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
