//! Custom cargo commands for offerscope.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, with and without default features
//!   cargo xtask check     - Quick check (cargo check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short while

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["view_codec", "score_calculation", "fuzzy_similarity"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + docs + weight table)
  test      Run all Rust tests, default and minimal features
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run fuzz targets for 60s each (needs cargo-fuzz and nightly)
            Pass a seconds value to override: cargo xtask fuzz 300
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("offerscope Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking documented weight table...");
    verify_weight_table()?;
    println!("✓ Weight table matches defaults\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Minimal feature set passes\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Building docs...");
    run_cargo(&["doc", "--quiet", "--no-deps"])?;
    println!("✓ Docs build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds = seconds.unwrap_or("60");
    seconds
        .parse::<u64>()
        .with_context(|| format!("Invalid fuzz duration '{}'", seconds))?;
    let max_time = format!("-max_total_time={}", seconds);

    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, seconds);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(project_root()?)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ All fuzz targets ran clean");
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

/// The field table in the weights module docs is what people read when tuning.
/// Keep it honest: every number in it must match `FieldWeights::default()`.
fn verify_weight_table() -> Result<()> {
    let path = project_root()?.join("src/scoring/weights.rs");
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let defaults = extract_defaults(&source);
    if defaults.is_empty() {
        bail!("No default weights found in {}", path.display());
    }

    let expected: &[(&str, &[&str], &str)] = &[
        ("Name", &["name_exact", "name_prefix", "name_contains"], "name_synonym"),
        ("Offer text", &["offer_contains"], "offer_synonym"),
        ("Category", &["category_contains"], "category_synonym"),
        ("Subcategory", &["subcategory_contains"], "subcategory_synonym"),
        ("Tag", &["tag_exact", "tag_contains", "tag_in_query"], "tag_synonym"),
        ("Description", &["description_contains"], "description_synonym"),
    ];

    for (label, primary_fields, synonym_field) in expected {
        let Some((primary, synonym)) = extract_table_row(&source, label) else {
            bail!("Weight table has no row for '{}'", label);
        };

        let want_primary: Vec<u32> = primary_fields
            .iter()
            .map(|field| lookup(&defaults, field))
            .collect::<Result<_>>()?;
        let want_synonym = lookup(&defaults, synonym_field)?;

        if primary != want_primary || synonym != want_synonym {
            bail!(
                "Weight table row '{}' says {:?} / {} but defaults are {:?} / {}",
                label,
                primary,
                synonym,
                want_primary,
                want_synonym
            );
        }
    }

    Ok(())
}

fn lookup(defaults: &BTreeMap<String, u32>, field: &str) -> Result<u32> {
    defaults
        .get(field)
        .copied()
        .with_context(|| format!("No default for weight '{}'", field))
}

fn extract_defaults(source: &str) -> BTreeMap<String, u32> {
    // Look for "            name_exact: 100," inside the Default impl
    source
        .lines()
        .filter_map(|line| {
            let (field, value) = line.trim().split_once(':')?;
            let value = value.trim().trim_end_matches(',').parse::<u32>().ok()?;
            Some((field.trim().to_string(), value))
        })
        .collect()
}

fn extract_table_row(source: &str, label: &str) -> Option<(Vec<u32>, u32)> {
    // Look for "//! | Name         | 100 / 80 / 60      | 25          |"
    source.lines().find_map(|line| {
        let cells: Vec<&str> = line
            .trim_start_matches("//!")
            .split('|')
            .map(str::trim)
            .collect();
        if cells.len() < 4 || cells[1] != label {
            return None;
        }
        let primary = cells[2]
            .split('/')
            .map(|n| n.trim().parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()?;
        let synonym = cells[3].parse::<u32>().ok()?;
        Some((primary, synonym))
    })
}
