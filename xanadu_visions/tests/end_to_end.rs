// End-to-end runs of the `visions` binary and the library entry point.

use std::process::Command;
use xanadu_prng::DreamRng;
use xanadu_visions::assembly::BANNER;
use xanadu_visions::{ConceptCatalog, VisionConfig, compose};

/// Non-empty blocks of output, banner excluded.
fn blocks(stdout: &str) -> Vec<&str> {
    stdout
        .split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty() && *b != BANNER)
        .collect()
}

#[test]
fn binary_without_arguments_prints_nine_blocks() {
    let output = Command::new(env!("CARGO_BIN_EXE_visions"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run visions binary");
    assert!(output.status.success(), "exit status {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(BANNER));
    let blocks = blocks(&stdout);
    assert!(blocks.len() >= 9, "expected at least 9 blocks, got {}", blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        assert!(block.starts_with(&format!("{}. ", i + 1)), "block {i}: {block}");
    }
}

#[test]
fn binary_seed_flag_is_reproducible() {
    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_visions"))
            .args(["--seed", "31337", "--steps", "7"])
            .output()
            .expect("failed to run visions binary");
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(blocks(&first).len(), 3 + 1 + 7);
}

#[test]
fn binary_rejects_missing_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_visions"))
        .args(["--config", "/nonexistent/xanadu.json"])
        .output()
        .expect("failed to run visions binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn custom_catalog_drives_the_chain() {
    let mut catalog = ConceptCatalog::empty();
    catalog.register("dawn", |_, _| Ok("a pale dawn".to_string()));
    catalog.register("dusk", |_, _| Ok("a violet dusk".to_string()));

    let config = VisionConfig {
        opening_concepts: vec!["dusk".to_string()],
        chain_steps: 4,
        ..VisionConfig::default()
    };
    let mut rng = DreamRng::new(12);
    let visions = compose(&config, &catalog, &mut rng).unwrap();

    assert_eq!(visions.len(), 1 + 1 + 4);
    assert!(visions[0].ends_with("like a violet dusk"));
    assert!(visions[2].starts_with("Coleridge's visions transition from a state of 'dawn' to "));
    for vision in &visions[2..] {
        assert!(vision.ends_with("a pale dawn") || vision.ends_with("a violet dusk"));
    }
}
