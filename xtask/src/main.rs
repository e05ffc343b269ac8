//! Custom cargo commands for the ensure crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short while

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["format_template", "string_conditions"];

/// Seconds each fuzz target runs for.
const FUZZ_SECONDS: u32 = 30;

/// Lowest number of INVARIANT markers the sources may carry.
const MIN_INVARIANT_MARKERS: usize = 4;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + messages + tests + clippy + docs)
  test      Run all Rust tests, with and without default features
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz and nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Ensure Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Checking default messages...");
    check_default_messages()?;
    println!("✓ Default messages unchanged\n");

    println!("[3/5] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Building docs...");
    run_cargo(&["doc", "--no-deps", "--quiet"])?;
    println!("✓ Docs build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, including the build without serde
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target with a time limit
fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No crashes");
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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(())
}

/// Default messages are part of the public contract: callers match on them.
fn check_default_messages() -> Result<()> {
    const EXPECTED: &[(&str, &str)] = &[
        ("VALUE_IS_NOT_TRUE", "Value is not TRUE"),
        ("VALUE_IS_NOT_FALSE", "Value is not FALSE"),
        ("OBJECT_IS_NULL", "Object is NULL"),
        ("OBJECT_IS_NOT_NULL", "Object is not NULL"),
        (
            "WRONG_TYPE",
            "Object is of wrong type. Actual: %s. Expected one of: %s",
        ),
        ("STRING_IS_EMPTY", "The string is empty or NULL"),
        ("STRING_IS_BLANK", "The string is blank"),
        ("ITERABLE_IS_EMPTY", "Iterable is empty or NULL"),
        ("ARRAY_IS_EMPTY", "Array is empty or NULL"),
        ("NEVER_REACHED", "This statement should never be reached."),
    ];

    let root = project_root()?;
    let source = std::fs::read_to_string(root.join("src/conditions/mod.rs"))
        .context("Failed to read src/conditions/mod.rs")?;

    for (name, message) in EXPECTED {
        let actual = extract_message(&source, name)
            .with_context(|| format!("No message constant named {}", name))?;
        if actual != *message {
            bail!("{} changed: expected {:?}, found {:?}", name, message, actual);
        }
    }

    Ok(())
}

fn extract_message<'s>(content: &'s str, name: &str) -> Option<&'s str> {
    // Look for `pub const NAME: &str = "message";`
    let prefix = format!("pub const {}: &str = \"", name);
    content.lines().find_map(|line| {
        let rest = line.trim().strip_prefix(prefix.as_str())?;
        rest.strip_suffix("\";")
    })
}
