//! Custom cargo commands for the typeahead crate.
//!
//! Usage:
//!   cargo xtask verify        - Run full verification suite
//!   cargo xtask test          - Run all tests
//!   cargo xtask check         - Quick check (check + clippy)
//!   cargo xtask bench         - Run benchmarks
//!   cargo xtask fuzz [SECS]   - Run every fuzz target for SECS seconds each

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["session_ops", "exact_distance"];
const DEFAULT_FUZZ_SECS: u64 = 30;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let secs = match args.next() {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("invalid fuzz duration {:?}", raw))?,
                None => DEFAULT_FUZZ_SECS,
            };
            fuzz(secs)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify       Run full verification suite (markers + tests + clippy + release tests)
  test         Run all Rust tests
  check        Quick check (cargo check + clippy)
  bench        Run benchmarks
  fuzz [SECS]  Run each fuzz target for SECS seconds (default {})
"#,
        DEFAULT_FUZZ_SECS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Typeahead Verification Suite");
    println!("==========================================\n");

    // Step 1: Contract hooks still wired into the session
    println!("[1/4] Checking contract hooks...");
    check_contract_hooks()?;
    println!("✓ Contract hooks present\n");

    // Step 2: Debug tests run the contracts after every mutation
    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Release tests, where the contracts compile away
    println!("[4/4] Running Rust tests in release...");
    run_cargo(&["test", "--release", "--quiet"])?;
    println!("✓ Release tests passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for `secs` seconds (requires cargo-fuzz and nightly)
fn fuzz(secs: u64) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", secs);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, secs);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every session mutation must still end in a contract check.
fn check_contract_hooks() -> Result<()> {
    let root = project_root()?;
    let session = std::fs::read_to_string(root.join("src/session.rs"))
        .context("Failed to read session.rs")?;

    let hooks = session.matches("contracts::check_").count();
    if hooks < 3 {
        bail!(
            "Expected at least 3 contract checks in session.rs, found {}. Someone may have removed them!",
            hooks
        );
    }

    Ok(())
}
